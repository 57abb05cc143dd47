use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::proxy_url::EncodingScheme;

/// Global configuration loaded from `~/.config/picproxy/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicproxyConfig {
    /// Scheme used when none is given on the command line.
    #[serde(default)]
    pub default_scheme: EncodingScheme,
    /// Optional origin (e.g. "http://localhost:3000") prepended to built URLs.
    #[serde(default)]
    pub base_url: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("picproxy")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PicproxyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PicproxyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<PicproxyConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PicproxyConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PicproxyConfig::default();
        assert_eq!(cfg.default_scheme, EncodingScheme::PercentEncoding);
        assert!(cfg.base_url.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PicproxyConfig {
            default_scheme: EncodingScheme::Base64UrlEncoding,
            base_url: Some("http://localhost:3000".to_string()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PicproxyConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_scheme = "encodeBase64URL"
            base_url = "https://img.example.org"
        "#;
        let cfg: PicproxyConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_scheme, EncodingScheme::Base64UrlEncoding);
        assert_eq!(cfg.base_url.as_deref(), Some("https://img.example.org"));
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: PicproxyConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, PicproxyConfig::default());
    }

    #[test]
    fn config_toml_unknown_scheme_rejected() {
        let toml = r#"default_scheme = "encodeURI""#;
        assert!(toml::from_str::<PicproxyConfig>(toml).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_scheme = \"encodeBase64URL\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.default_scheme, EncodingScheme::Base64UrlEncoding);

        let missing = dir.path().join("missing.toml");
        let err = load_from(&missing).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.toml"));
    }
}
