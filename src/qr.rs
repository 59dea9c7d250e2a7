//! Request-URL construction for the QR rendering API and the local unicode
//! preview shown in the terminal.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use qrcode::{render::unicode, types::QrError, QrCode};

pub const DEFAULT_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const IMAGE_SIZE: &str = "256x256";

// Matches the characters left intact by JavaScript's encodeURIComponent.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the GET URL that renders `data` as a 256x256 QR image.
pub fn request_url(endpoint: &str, data: &str) -> String {
    format!(
        "{endpoint}?data={}&size={IMAGE_SIZE}",
        utf8_percent_encode(data, QUERY)
    )
}

/// Render `data` as a half-block unicode QR code for display in the terminal.
pub fn unicode_preview(data: &str) -> Result<String, QrError> {
    Ok(QrCode::new(data)?.render::<unicode::Dense1x2>().build())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_request_url_contains_size() {
        let url = request_url(DEFAULT_ENDPOINT, "example.com");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?data=example.com&size=256x256"
        );
    }

    #[rstest]
    #[case("hello world", "hello%20world")]
    #[case("a/b?c=d", "a%2Fb%3Fc%3Dd")]
    #[case("100%", "100%25")]
    #[case("-_.!~*'()", "-_.!~*'()")]
    #[case("über", "%C3%BCber")]
    fn test_request_url_encoding(#[case] input: &str, #[case] encoded: &str) {
        let url = request_url(DEFAULT_ENDPOINT, input);
        assert_eq!(url, format!("{DEFAULT_ENDPOINT}?data={encoded}&size=256x256"));
    }

    #[test]
    fn test_unicode_preview() {
        let preview = unicode_preview("example.com").unwrap();
        assert!(!preview.is_empty());
        assert!(preview.lines().count() > 1);
    }

    #[test]
    fn test_unicode_preview_rejects_oversized_input() {
        // QR version 40 tops out around 3 KB of binary data.
        let too_long = "x".repeat(8192);
        assert!(unicode_preview(&too_long).is_err());
    }
}
