//! `picproxy config` – show where the config lives and what it holds.

use anyhow::Result;
use picproxy_core::config::{self, PicproxyConfig};

pub fn run_config(cfg: &PicproxyConfig) -> Result<String> {
    let path = config::config_path()?;
    Ok(format!("# {}\n{}", path.display(), render(cfg)?))
}

fn render(cfg: &PicproxyConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?.trim_end().to_string())
}
