//! Error type for decoding and parsing proxy URLs.
//!
//! Building a proxy URL never fails; everything here comes from reading one
//! back (query parsing, scheme tags, or the encoded target itself).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProxyUrlError {
    /// The `type` tag is not one of the recognized encoding schemes.
    #[error("unknown encoding scheme {0:?} (expected encodeURIComponent or encodeBase64URL)")]
    UnknownScheme(String),

    /// The path does not point at the image proxy endpoint.
    #[error("not an image proxy path: {0}")]
    WrongEndpoint(String),

    #[error("missing query parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("invalid base64url target: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decoded target bytes are not valid UTF-8.
    #[error("decoded target is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid proxy URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
