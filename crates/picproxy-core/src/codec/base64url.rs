//! URL-safe base64 text encoding (RFC 4648 section 5), unpadded.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::ProxyUrlError;

/// Encodes without padding; decodes with or without it.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64url-encodes the UTF-8 bytes of `input`.
///
/// Output only contains `[A-Za-z0-9_-]`.
pub fn encode_base64_url_text(input: &str) -> String {
    URL_SAFE_LENIENT.encode(input.as_bytes())
}

/// Reverses [`encode_base64_url_text`]. Trailing `=` padding is accepted.
pub fn decode_base64_url_text(input: &str) -> Result<String, ProxyUrlError> {
    let bytes = URL_SAFE_LENIENT.decode(input)?;
    String::from_utf8(bytes).map_err(|_| ProxyUrlError::InvalidUtf8)
}
