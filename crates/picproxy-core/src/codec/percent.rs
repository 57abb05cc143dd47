//! Strict URI component percent-encoding.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ProxyUrlError;

/// Everything except the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`).
///
/// Stricter than a whole-URI encoder: sub-delims such as `!'()*` are escaped too.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input` as a single URI component, uppercase hex.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Reverses [`encode_uri_component`]. A literal `+` is kept as `+`.
///
/// Malformed escapes (`%` not followed by two hex digits) pass through as-is.
pub fn decode_uri_component(input: &str) -> Result<String, ProxyUrlError> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| ProxyUrlError::InvalidUtf8)
}
