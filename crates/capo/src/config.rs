//! Configuration types for Capo.
//!
//! - [`AppConfig`] - Top-level configuration combining style and data settings.
//! - [`StyleConfig`] - Visual styling of rendered diagrams.
//! - [`DataConfig`] - Location of the reference data files.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources (the CLI loads them from TOML).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Reference data configuration section.
    #[serde(default)]
    data: DataConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, data: DataConfig) -> Self {
        Self { style, data }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the data configuration.
    pub fn data(&self) -> &DataConfig {
        &self.data
    }
}

/// Visual styling for rendered diagrams.
///
/// Colors are SVG color strings (`"white"`, `"#1a1a1a"`, ...). Unset fields
/// fall back to the two-tone defaults of a printed chord card.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Canvas background color.
    #[serde(default)]
    background: Option<String>,

    /// Color of lines, markers, dots, and text.
    #[serde(default)]
    foreground: Option<String>,
}

impl StyleConfig {
    /// Returns the background color, defaulting to white.
    pub fn background(&self) -> &str {
        self.background.as_deref().unwrap_or("white")
    }

    /// Returns the foreground color, defaulting to black.
    pub fn foreground(&self) -> &str {
        self.foreground.as_deref().unwrap_or("black")
    }
}

/// Location of the on-disk reference data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Directory holding the JSON data files.
    #[serde(default)]
    dir: Option<PathBuf>,
}

impl DataConfig {
    /// Returns the data directory, defaulting to `json/` next to the process.
    pub fn dir(&self) -> &Path {
        self.dir.as_deref().unwrap_or(Path::new("json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.style().background(), "white");
        assert_eq!(config.style().foreground(), "black");
        assert_eq!(config.data().dir(), Path::new("json"));
    }

    #[test]
    fn test_deserializes_partial_config() {
        let config: AppConfig =
            serde_json::from_str(r##"{ "style": { "foreground": "#333" } }"##).unwrap();
        assert_eq!(config.style().foreground(), "#333");
        assert_eq!(config.style().background(), "white");
    }
}
