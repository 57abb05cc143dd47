//! A proxy request: the target URL plus how it is encoded.

use serde::Serialize;

use super::{build_proxy_url, EncodingScheme, PROXY_ENDPOINT, TYPE_PARAM, URL_PARAM};
use crate::codec::decode_uri_component;
use crate::error::ProxyUrlError;

/// Target image URL and the scheme used to embed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyRequest {
    pub target: String,
    pub scheme: EncodingScheme,
}

impl ProxyRequest {
    pub fn new(target: impl Into<String>, scheme: EncodingScheme) -> Self {
        Self {
            target: target.into(),
            scheme,
        }
    }

    /// Relative proxy URL for this request. See [`build_proxy_url`].
    pub fn to_proxy_url(&self) -> String {
        build_proxy_url(&self.target, self.scheme)
    }

    /// Parses a proxy URL back into the request that produced it.
    ///
    /// Accepts the relative form (`/api/proxy/img.png?...`) or an absolute URL
    /// whose path is the proxy endpoint. A missing `type` means the default
    /// scheme; an unrecognized one is an error. When a parameter repeats, the
    /// first occurrence wins. Keys and values are percent-unescaped once,
    /// so `url=YQ%3D%3D` is the padded base64 `YQ==`.
    pub fn parse(proxy_url: &str) -> Result<Self, ProxyUrlError> {
        let (path, query) = split_path_and_query(proxy_url)?;
        if path != PROXY_ENDPOINT {
            return Err(ProxyUrlError::WrongEndpoint(path));
        }

        let scheme = match query_param(&query, TYPE_PARAM) {
            Some(tag) => decode_uri_component(tag)?.parse::<EncodingScheme>()?,
            None => EncodingScheme::default(),
        };
        let encoded =
            query_param(&query, URL_PARAM).ok_or(ProxyUrlError::MissingParameter(URL_PARAM))?;
        // Query values are unescaped exactly once; for the percent scheme that
        // single pass is the scheme's own decode.
        let target = match scheme {
            EncodingScheme::PercentEncoding => scheme.decode(encoded)?,
            EncodingScheme::Base64UrlEncoding => scheme.decode(&decode_uri_component(encoded)?)?,
        };

        tracing::debug!(scheme = %scheme, target_len = target.len(), "parsed proxy url");
        Ok(Self { target, scheme })
    }
}

/// Splits off the fragment and returns `(path, query)`.
fn split_path_and_query(input: &str) -> Result<(String, String), ProxyUrlError> {
    if input.starts_with('/') {
        let without_fragment = input.split('#').next().unwrap_or_default();
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));
        return Ok((path.to_string(), query.to_string()));
    }

    let parsed = url::Url::parse(input)?;
    Ok((
        parsed.path().to_string(),
        parsed.query().unwrap_or_default().to_string(),
    ))
}

/// Raw (still encoded) value of the first pair whose unescaped key is `name`.
fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| match pair.split_once('=') {
            Some((key, value)) => Some((key, value)),
            None if !pair.is_empty() => Some((pair, "")),
            None => None,
        })
        .find(|(key, _)| decode_uri_component(key).is_ok_and(|key| key == name))
        .map(|(_, value)| value)
}
