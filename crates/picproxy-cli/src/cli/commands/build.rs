//! `picproxy build <url>` – build a proxy URL.

use picproxy_core::config::PicproxyConfig;
use picproxy_core::proxy_url::{build_proxy_url, with_origin};
use picproxy_core::EncodingScheme;

/// Flags override config; config overrides built-in defaults.
pub fn run_build(
    cfg: &PicproxyConfig,
    url: &str,
    scheme: Option<EncodingScheme>,
    base: Option<&str>,
) -> String {
    let scheme = scheme.unwrap_or(cfg.default_scheme);
    let relative = build_proxy_url(url, scheme);
    tracing::info!(scheme = %scheme, "build proxy url for {}", url);

    match base.or(cfg.base_url.as_deref()) {
        Some(origin) if !origin.is_empty() => with_origin(origin, &relative),
        _ => relative,
    }
}
