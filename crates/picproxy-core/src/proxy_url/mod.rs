//! Image proxy URL construction.
//!
//! A proxy URL points at the local image endpoint and carries the real image
//! location in its query string:
//!
//! ```text
//! /api/proxy/img.png?type=<scheme tag>&url=<encoded target>
//! ```
//!
//! `type` always comes before `url`. The target is encoded by the selected
//! [`EncodingScheme`]; percent-encoding is the default, base64url hides the
//! target from casual inspection.

mod request;
mod scheme;

pub use request::ProxyRequest;
pub use scheme::EncodingScheme;

/// Path of the image proxy endpoint.
pub const PROXY_ENDPOINT: &str = "/api/proxy/img.png";
/// Query parameter holding the scheme tag.
pub const TYPE_PARAM: &str = "type";
/// Query parameter holding the encoded target.
pub const URL_PARAM: &str = "url";

/// Builds the relative proxy URL for `target_url` using `scheme`.
///
/// `target_url` is not validated; it is encoded as raw text.
///
/// # Examples
///
/// - `build_proxy_url("https://example.com/a.png", EncodingScheme::PercentEncoding)`
///   → `"/api/proxy/img.png?type=encodeURIComponent&url=https%3A%2F%2Fexample.com%2Fa.png"`
/// - `build_proxy_url("https://example.com/a.png", EncodingScheme::Base64UrlEncoding)`
///   → `"/api/proxy/img.png?type=encodeBase64URL&url=aHR0cHM6Ly9leGFtcGxlLmNvbS9hLnBuZw"`
pub fn build_proxy_url(target_url: &str, scheme: EncodingScheme) -> String {
    let encoded = scheme.encode(target_url);
    tracing::trace!(scheme = %scheme, target_len = target_url.len(), "built proxy url");
    format!(
        "{PROXY_ENDPOINT}?{TYPE_PARAM}={}&{URL_PARAM}={encoded}",
        scheme.as_tag()
    )
}

/// Builds the proxy URL with the default scheme (percent-encoding).
pub fn proxy_picture(target_url: &str) -> String {
    build_proxy_url(target_url, EncodingScheme::default())
}

/// Prefixes a relative proxy URL with an origin such as `http://localhost:3000`.
///
/// Trailing slashes on `origin` are dropped so the result has exactly one.
pub fn with_origin(origin: &str, proxy_url: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), proxy_url)
}
