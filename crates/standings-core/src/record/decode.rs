use encoding_rs::{Encoding, WINDOWS_1252};
use tracing::debug;

/// Decode raw file bytes into text.
///
/// A byte order mark selects UTF-8 or UTF-16. Without one the bytes are read
/// as UTF-8, falling back to Windows-1252 for spreadsheet exports that are
/// not valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            debug!("{} decoding had errors", encoding.name());
        }
        return decoded.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("Input is not valid UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_text("1,Zoë\n".as_bytes()), "1,Zoë\n");
    }

    #[test]
    fn test_decode_utf8_bom_stripped() {
        let bytes = [0xEF, 0xBB, 0xBF, b'p', b'l'];
        assert_eq!(decode_text(&bytes), "pl");
    }

    #[test]
    fn test_decode_utf16le_bom() {
        let bytes = [0xFF, 0xFE, b'1', 0x00, b',', 0x00, b'A', 0x00];
        assert_eq!(decode_text(&bytes), "1,A");
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        // "Zoë" in Windows-1252
        let bytes = [b'Z', b'o', 0xEB];
        assert_eq!(decode_text(&bytes), "Zoë");
    }
}
