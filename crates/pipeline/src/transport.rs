use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Strip an optional `data:<mime>;base64,` prefix and decode the
/// base64 payload into raw image bytes.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let trimmed = payload.trim();
    let encoded = match trimmed.strip_prefix("data:") {
        Some(_) => trimmed.split_once(',').map_or(trimmed, |(_, data)| data),
        None => trimmed,
    };
    STANDARD.decode(encoded)
}

/// Encode assembled document bytes for the text transport.
pub fn encode_document(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_base64_decodes() {
        assert_eq!(decode_image_payload("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        let payload = "data:image/png;base64,aGVsbG8=";
        assert_eq!(decode_image_payload(payload).unwrap(), b"hello");
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(decode_image_payload("  aGVsbG8=\n").unwrap(), b"hello");
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(decode_image_payload("!!!not base64!!!").is_err());
        assert!(decode_image_payload("data:image/png;base64").is_err());
    }

    #[test]
    fn encode_decode_roundtrip() {
        let bytes = [0u8, 1, 2, 253, 254, 255];
        assert_eq!(
            decode_image_payload(&encode_document(&bytes)).unwrap(),
            bytes
        );
    }
}
