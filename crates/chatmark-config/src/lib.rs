//! Presentation settings for chatmark hosts, read from TOML.
//!
//! ```toml
//! override_color = "#ffffff"
//!
//! [base_font]
//! family = "system"
//! size = 17.0
//! ```

use chatmark_engine::{BuildOptions, Color, Font};
use serde::{Deserialize, Serialize};
use std::{io, path::Path, path::PathBuf, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read chatmark settings from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid chatmark settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Base font and optional bubble colour, turned into [`BuildOptions`].
///
/// Every key is optional; missing keys take the engine defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub override_color: Option<Color>,
    pub base_font: Font,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads settings from `path`. A missing file is not an error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml(&content).map(Some)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::new(self.base_font.clone(), self.override_color)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}
