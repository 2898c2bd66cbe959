//! Journey manifest: the answers a user would type into the wizard.
//!
//! ```toml
//! partner1 = "Alice"
//! partner2 = "Bruno"
//! title = "Nossa História"
//!
//! [[memories]]
//! date = "2021-02-14"
//! title = "Primeiro encontro"
//! description = "Café na praça"
//! photo = "photos/cafe.jpg"
//! ```
//!
//! Photo paths are relative to the manifest file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JourneyManifest {
    #[serde(default)]
    pub partner1: String,
    #[serde(default)]
    pub partner2: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub memories: Vec<MemoryManifest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryManifest {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub photo: Option<PathBuf>,
}

impl JourneyManifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let mut manifest: JourneyManifest =
            toml::from_str(&content).context("Failed to parse manifest as TOML")?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for memory in &mut manifest.memories {
            if let Some(photo) = memory.photo.as_mut().filter(|p| p.is_relative()) {
                *photo = base.join(&*photo);
            }
        }
        Ok(manifest)
    }
}
