//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping. No validation
//! happens here: empty strings and zero timeouts are facts, not errors.
//! Defaults for a fresh install live in [`AppConfig::with_defaults`].

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `https://api.lovejourney.app`
    pub api_base_url: String,

    /// Per-request timeout in seconds (0 means "not set")
    pub api_timeout_secs: u64,

    /// Public origin used to build share links
    pub public_origin: String,

    /// Plan name as written in the file (`free`, `premium`, `legacy`)
    pub plan: String,

    /// Directory QR code images are written to
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            api_timeout_secs: toml_value
                .get("api")
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            public_origin: str_at("share", "public_origin"),
            plan: str_at("plan", "kind"),
            output_dir: PathBuf::from(str_at("output", "dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_timeout_secs: 0,
            public_origin: String::new(),
            plan: String::new(),
            output_dir: PathBuf::new(),
        }
    }

    /// Configuration used when no file exists.
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: "http://localhost:3333".to_string(),
            api_timeout_secs: 30,
            public_origin: "http://localhost:3000".to_string(),
            plan: "free".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}
