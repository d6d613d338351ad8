//! Integration tests for merging fragment files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unchunk::{
    merge_files, merge_files_with_options, Error, MergeOptions, OverlapSearch, SourceOptions,
    Unchunk,
};

fn write_fragment(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Three overlapping chunks of a short two-page document.
fn create_sample_chunks(dir: &Path) -> Vec<PathBuf> {
    vec![
        write_fragment(
            dir,
            "part03.txt",
            b"was broken at the end of a line.\n\nFinal paragraph here.\n",
        ),
        write_fragment(
            dir,
            "part01.txt",
            b"--- Page 1 ---\nIntroduction\nThis chapter explains how infor-\n",
        ),
        write_fragment(
            dir,
            "part02.txt",
            b"how infor-\nmation that\n--- Page 2 ---\nwas broken at the end",
        ),
    ]
}

const EXPECTED: &str = "--- Page 1 ---\n\n\
    Introduction This chapter explains how information that --- Page 2 ---\n\n\
    was broken at the end of a line.\n\n\
    Final paragraph here.";

#[test]
fn test_merge_files_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    let paths = create_sample_chunks(dir.path());

    let text = merge_files(&paths).unwrap();
    assert_eq!(text, EXPECTED);
}

#[test]
fn test_merge_files_stats() {
    let dir = TempDir::new().unwrap();
    let paths = create_sample_chunks(dir.path());

    let result = Unchunk::new().merge_files(&paths).unwrap();
    let stats = &result.stats;

    assert_eq!(stats.fragment_count, 3);
    assert_eq!(stats.page_markers, 2);
    assert_eq!(stats.hyphen_joins, 1);
    assert_eq!(stats.paragraph_count, 4);
    assert_eq!(stats.overlap_chars_removed, "how infor-\n".len() + "was broken at the end".len());
    assert!(stats.output_chars <= stats.input_chars);
}

#[test]
fn test_sequential_matches_parallel() {
    let dir = TempDir::new().unwrap();
    let paths = create_sample_chunks(dir.path());

    let parallel = Unchunk::new().merge_files(&paths).unwrap();
    let sequential = Unchunk::new().sequential().merge_files(&paths).unwrap();
    assert_eq!(parallel.content, sequential.content);
}

#[test]
fn test_keep_order() {
    let dir = TempDir::new().unwrap();
    let b = write_fragment(dir.path(), "b.txt", b"second");
    let a = write_fragment(dir.path(), "a.txt", b"first ");

    let sorted = merge_files(&[&b, &a]).unwrap();
    assert_eq!(sorted, "first second");

    let given = Unchunk::new().keep_order().merge_files(&[&b, &a]).unwrap();
    assert_eq!(given.content, "secondfirst");
}

#[test]
fn test_wrapped_output() {
    let dir = TempDir::new().unwrap();
    let paths = create_sample_chunks(dir.path());

    let result = merge_files_with_options(
        &paths,
        &SourceOptions::default(),
        MergeOptions::new().with_width(20),
    )
    .unwrap();

    for line in result.content.lines() {
        assert!(line.chars().count() <= 20, "line too long: {:?}", line);
    }
    assert!(result.content.contains("information"));
}

#[test]
fn test_naive_search_matches_default() {
    let dir = TempDir::new().unwrap();
    let paths = create_sample_chunks(dir.path());

    let naive = Unchunk::new()
        .with_search(OverlapSearch::Naive)
        .merge_files(&paths)
        .unwrap();
    assert_eq!(naive.content, EXPECTED);
}

#[test]
fn test_malformed_bytes_are_dropped() {
    let dir = TempDir::new().unwrap();
    let a = write_fragment(dir.path(), "a.txt", b"caf\xc3\xa9 \xffau ");
    let b = write_fragment(dir.path(), "b.txt", b"au lait");

    let text = merge_files(&[a, b]).unwrap();
    assert_eq!(text, "café au lait");
}

#[test]
fn test_crlf_hyphenation_is_joined() {
    let dir = TempDir::new().unwrap();
    let crlf = write_fragment(dir.path(), "a.txt", b"exam-\r\nple text");
    assert_eq!(merge_files(&[crlf]).unwrap(), "example text");

    let old_mac = write_fragment(dir.path(), "b.txt", b"exam-\rple text");
    assert_eq!(merge_files(&[old_mac]).unwrap(), "example text");
}

#[test]
fn test_crlf_fragments_merge_like_lf() {
    let dir = TempDir::new().unwrap();
    let a = write_fragment(dir.path(), "a.txt", b"Intro-\r\nduction text\r\n");
    let b = write_fragment(dir.path(), "b.txt", b"text\r\n--- Page 2 ---\r\nbody");

    let result = Unchunk::new().merge_files(&[a, b]).unwrap();
    assert_eq!(result.content, "Introduction text --- Page 2 ---\n\nbody");
    assert_eq!(result.stats.overlap_chars_removed, "text\n".len());
    assert_eq!(result.stats.hyphen_joins, 1);
}

#[test]
fn test_missing_fragment_fails_whole_merge() {
    let dir = TempDir::new().unwrap();
    let a = write_fragment(dir.path(), "a.txt", b"present");
    let missing = dir.path().join("b.txt");

    let result = merge_files(&[a, missing.clone()]);
    match result {
        Err(Error::FragmentRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected read error, got {:?}", other),
    }
}

#[test]
fn test_zero_width_rejected() {
    let dir = TempDir::new().unwrap();
    let paths = create_sample_chunks(dir.path());

    let result = Unchunk::new().with_width(0).merge_files(&paths);
    assert!(matches!(result, Err(Error::InvalidWidth(0))));
}
