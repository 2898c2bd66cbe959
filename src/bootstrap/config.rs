//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read the TOML configuration file / 读取 TOML 配置文件
//! - Parse TOML into the AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - Apply environment overrides / 应用环境变量覆盖
//!
//! Filling empty values with defaults happens in [`super::wiring::Settings`],
//! never here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use lj_core::config::AppConfig;

/// Overrides `[api] base_url`.
pub const ENV_API_URL: &str = "LOVE_JOURNEY_API_URL";
/// Overrides `[share] public_origin`.
pub const ENV_PUBLIC_ORIGIN: &str = "LOVE_JOURNEY_ORIGIN";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// accepted as facts.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config_dir>/love-journey/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("love-journey").join("config.toml"))
}

/// Resolves the configuration for this process.
///
/// An explicit path must exist. Without one, the default path is used when
/// present and [`AppConfig::with_defaults`] otherwise. Environment overrides
/// apply in every case.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_config(&path)?,
            None => AppConfig::with_defaults(),
        },
    };
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Replaces config values with non-empty environment values.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(ENV_API_URL) {
        config.api_base_url = url;
    }
    if let Some(origin) = non_empty(ENV_PUBLIC_ORIGIN) {
        config.public_origin = origin;
    }
    config
}
