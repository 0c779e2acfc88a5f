//! Text decoding for spreadsheet exports
//!
//! pt-BR spreadsheet tools commonly save CSV as Windows-1252.

use encoding_rs::WINDOWS_1252;
use tracing::warn;

/// Decode file bytes as UTF-8, falling back to Windows-1252
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
            if had_errors {
                warn!("some characters could not be decoded from Windows-1252");
            }
            decoded.into_owned()
        }
    }
}
