//! Target encodings for the image proxy query string.
//!
//! Both encoders produce text that is safe to embed unescaped in a query
//! value. Decoders are the exact inverses and return [`ProxyUrlError`] on
//! malformed input.
//!
//! [`ProxyUrlError`]: crate::error::ProxyUrlError

mod base64url;
mod percent;

pub use base64url::{decode_base64_url_text, encode_base64_url_text};
pub use percent::{decode_uri_component, encode_uri_component};
