//! Lenient UTF-8 decoding of fragment bytes.

use log::warn;

use crate::error::{Error, Result};

/// What to do with byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Drop malformed sequences
    #[default]
    Ignore,
    /// Replace malformed sequences with U+FFFD
    Replace,
    /// Fail with [`Error::Encoding`]
    Strict,
}

/// Decode fragment bytes as UTF-8 according to `policy`.
///
/// Line endings are normalized to `\n` afterwards (see
/// [`normalize_line_endings`]). `source_id` only appears in log messages and
/// errors; an encoding error's offset refers to the raw bytes.
pub fn decode_bytes(bytes: &[u8], policy: DecodePolicy, source_id: &str) -> Result<String> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(err) => match policy {
            DecodePolicy::Strict => {
                return Err(Error::Encoding {
                    source_id: source_id.to_string(),
                    offset: err.valid_up_to(),
                })
            }
            DecodePolicy::Replace => {
                warn!("{}: replacing malformed UTF-8", source_id);
                String::from_utf8_lossy(bytes).into_owned()
            }
            DecodePolicy::Ignore => {
                warn!("{}: dropping malformed UTF-8", source_id);
                decode_ignoring(bytes)
            }
        },
    };

    Ok(normalize_line_endings(text))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn decode_ignoring(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());

    loop {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                out.push_str(text);
                break;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match err.error_len() {
                    Some(len) => bytes = &rest[len..],
                    // Truncated sequence at the very end
                    None => break,
                }
            }
        }
    }

    out
}
