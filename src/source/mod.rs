//! Fragment acquisition: reading chunk files from disk.
//!
//! Files may be read concurrently, but the returned fragments always follow
//! the order chosen by [`FragmentOrder`]. A missing or unreadable file fails
//! the whole set; no partial list is returned.

mod decode;
mod options;

pub use decode::{decode_bytes, normalize_line_endings, DecodePolicy};
pub use options::{FragmentOrder, SourceOptions};

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::Fragment;

/// Read one fragment file.
pub fn read_fragment<P: AsRef<Path>>(path: P, decode: DecodePolicy) -> Result<Fragment> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::FragmentRead {
        path: path.to_path_buf(),
        source,
    })?;

    let source_id = path.display().to_string();
    let text = decode_bytes(&bytes, decode, &source_id)?;
    debug!("read {} ({} bytes)", source_id, bytes.len());

    Ok(Fragment::new(source_id, text))
}

/// Read a set of fragment files in merge order.
///
/// # Example
///
/// ```no_run
/// use unchunk::source::{read_fragments, SourceOptions};
///
/// let fragments = read_fragments(&["part2.txt", "part1.txt"], &SourceOptions::default())?;
/// assert_eq!(fragments[0].source, "part1.txt");
/// # Ok::<(), unchunk::Error>(())
/// ```
pub fn read_fragments<P: AsRef<Path>>(
    paths: &[P],
    options: &SourceOptions,
) -> Result<Vec<Fragment>> {
    let paths = ordered_paths(paths, options.order)?;

    if options.parallel {
        paths
            .par_iter()
            .map(|path| read_fragment(path, options.decode))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| read_fragment(path, options.decode))
            .collect()
    }
}

/// Read a set of fragment files in merge order using tokio.
#[cfg(feature = "async")]
pub async fn read_fragments_async<P: AsRef<Path>>(
    paths: &[P],
    options: &SourceOptions,
) -> Result<Vec<Fragment>> {
    let paths = ordered_paths(paths, options.order)?;
    let mut fragments = Vec::with_capacity(paths.len());

    for path in paths {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| Error::FragmentRead {
                path: path.clone(),
                source,
            })?;
        let source_id = path.display().to_string();
        let text = decode_bytes(&bytes, options.decode, &source_id)?;
        fragments.push(Fragment::new(source_id, text));
    }

    Ok(fragments)
}

/// Apply `order` to `paths`, rejecting an empty list.
pub fn ordered_paths<P: AsRef<Path>>(paths: &[P], order: FragmentOrder) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Err(Error::NoFragments);
    }

    let mut paths: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
    if order == FragmentOrder::Sorted {
        paths.sort();
    }

    Ok(paths)
}
