//! `picproxy decode <proxy_url>` – recover the target image URL.

use anyhow::{Context, Result};
use picproxy_core::ProxyRequest;

pub fn run_decode(proxy_url: &str, json: bool) -> Result<String> {
    let request =
        ProxyRequest::parse(proxy_url).with_context(|| format!("decode {}", proxy_url))?;
    if json {
        return Ok(serde_json::to_string(&request)?);
    }
    Ok(request.target)
}
