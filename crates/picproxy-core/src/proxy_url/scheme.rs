//! Encoding scheme selector and its wire tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::ProxyUrlError;

/// How the target URL is encoded inside the proxy query string.
///
/// Serialized (config, JSON) and parsed (CLI, query) by its wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EncodingScheme {
    /// Strict URI component percent-encoding. Tag `encodeURIComponent`.
    #[default]
    #[serde(rename = "encodeURIComponent")]
    PercentEncoding,
    /// Unpadded base64url of the UTF-8 text. Tag `encodeBase64URL`.
    #[serde(rename = "encodeBase64URL")]
    Base64UrlEncoding,
}

impl EncodingScheme {
    /// All schemes, default first.
    pub const ALL: [EncodingScheme; 2] = [
        EncodingScheme::PercentEncoding,
        EncodingScheme::Base64UrlEncoding,
    ];

    /// The `type=` value the proxy endpoint recognizes.
    pub const fn as_tag(self) -> &'static str {
        match self {
            EncodingScheme::PercentEncoding => "encodeURIComponent",
            EncodingScheme::Base64UrlEncoding => "encodeBase64URL",
        }
    }

    pub fn encode(self, target: &str) -> String {
        match self {
            EncodingScheme::PercentEncoding => codec::encode_uri_component(target),
            EncodingScheme::Base64UrlEncoding => codec::encode_base64_url_text(target),
        }
    }

    pub fn decode(self, encoded: &str) -> Result<String, ProxyUrlError> {
        match self {
            EncodingScheme::PercentEncoding => codec::decode_uri_component(encoded),
            EncodingScheme::Base64UrlEncoding => codec::decode_base64_url_text(encoded),
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for EncodingScheme {
    type Err = ProxyUrlError;

    /// Exact, case-sensitive match on the wire tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncodingScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_tag() == s)
            .ok_or_else(|| ProxyUrlError::UnknownScheme(s.to_string()))
    }
}
