use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    // Display settings
    pub brightness: u8,
    pub dim_timeout_secs: u32,

    // UI preferences
    pub theme: ThemeKind,
    pub show_animations: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeKind {
    Midnight,
    HighContrast,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            brightness: 80,
            dim_timeout_secs: 30,
            theme: ThemeKind::Midnight,
            show_animations: true,
        }
    }
}

impl UiConfig {
    /// Deserialize from a stored JSON blob. Storage (NVS, flash file, ...)
    /// is the embedder's concern.
    pub fn from_blob(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_blob(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse a stored blob, falling back to defaults on a missing or
    /// corrupt payload.
    pub fn load_or_default(data: Option<&[u8]>) -> Self {
        match data.map(Self::from_blob) {
            Some(Ok(config)) => {
                log::info!("Loaded UI configuration");
                config
            }
            Some(Err(e)) => {
                log::warn!("Failed to parse UI configuration: {:?}, using defaults", e);
                Self::default()
            }
            None => Self::default(),
        }
    }
}
