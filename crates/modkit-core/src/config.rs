use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Module-resolution options (optional `[modules]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Try `<specifier>/index` when the exact identifier is not registered.
    pub index_fallback: bool,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            index_fallback: true,
        }
    }
}

fn default_logger_name() -> String {
    "DEFAULT".to_string()
}

/// Global configuration loaded from `~/.config/modkit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModkitConfig {
    /// Name of the logger handed out by `LoggerRegistry::default_logger`.
    #[serde(default = "default_logger_name")]
    pub default_logger_name: String,
    /// Base directory mapped URL paths are joined under (None = print the
    /// relative path as-is).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror_dir: Option<PathBuf>,
    /// Module resolution options; if missing, built-in defaults are used.
    #[serde(default)]
    pub modules: ModulesConfig,
}

impl Default for ModkitConfig {
    fn default() -> Self {
        Self {
            default_logger_name: default_logger_name(),
            mirror_dir: None,
            modules: ModulesConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("modkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ModkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ModkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ModkitConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ModkitConfig::default();
        assert_eq!(cfg.default_logger_name, "DEFAULT");
        assert!(cfg.mirror_dir.is_none());
        assert!(cfg.modules.index_fallback);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ModkitConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ModkitConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_logger_name, cfg.default_logger_name);
        assert_eq!(parsed.modules.index_fallback, cfg.modules.index_fallback);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_logger_name = "SPIDER"
            mirror_dir = "/srv/mirror"

            [modules]
            index_fallback = false
        "#;
        let cfg: ModkitConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_logger_name, "SPIDER");
        assert_eq!(cfg.mirror_dir, Some(PathBuf::from("/srv/mirror")));
        assert!(!cfg.modules.index_fallback);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: ModkitConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.default_logger_name, "DEFAULT");
        assert!(cfg.mirror_dir.is_none());
        assert!(cfg.modules.index_fallback);
    }
}
