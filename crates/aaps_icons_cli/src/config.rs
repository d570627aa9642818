//! `aaps-icons.toml` handling
//!
//! ```toml
//! [export]
//! output_dir = "icons-svg"
//! size = 48.0
//! tint = "#FFFFFF"
//!
//! [check]
//! strict = false
//! ```
//!
//! Every section and key is optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use aaps_vector::{Color, IconDefinition, RenderOptions};

const CONFIG_FILE: &str = "aaps-icons.toml";

#[derive(Debug, Default, Deserialize)]
pub struct IconsConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

/// Settings for `svg` and `export`
#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output width; height follows the icon's aspect ratio
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub tint: Option<Color>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("icons-svg")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            size: None,
            tint: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckConfig {
    /// Fail on warnings too
    #[serde(default)]
    pub strict: bool,
}

impl IconsConfig {
    /// Load the config
    ///
    /// An explicit path must exist; otherwise `aaps-icons.toml` in the
    /// current directory is used when present, and defaults when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ExportConfig {
    /// Render options for `icon`, with command-line values taking precedence
    pub fn render_options(
        &self,
        icon: &IconDefinition,
        size: Option<f32>,
        tint: Option<Color>,
    ) -> RenderOptions {
        let mut options = RenderOptions::new();
        if let Some(width) = size.or(self.size) {
            let display = icon.display_size();
            options = options.with_size(width, width * display.height / display.width);
        }
        if let Some(tint) = tint.or(self.tint) {
            options = options.with_tint(tint);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aaps_vector::Size;

    #[test]
    fn test_defaults() {
        let config = IconsConfig::parse("").unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("icons-svg"));
        assert!(config.export.size.is_none());
        assert!(!config.check.strict);
    }

    #[test]
    fn test_parse_full() {
        let config = IconsConfig::parse(
            r##"
[export]
output_dir = "out"
size = 96.0
tint = "#FFFFFF"

[check]
strict = true
"##,
        )
        .unwrap();

        assert_eq!(config.export.output_dir, PathBuf::from("out"));
        assert_eq!(config.export.size, Some(96.0));
        assert_eq!(config.export.tint, Some(Color::WHITE));
        assert!(config.check.strict);
    }

    #[test]
    fn test_bad_tint_is_rejected() {
        assert!(IconsConfig::parse("[export]\ntint = \"white\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        assert!(IconsConfig::load(Some(Path::new("/nonexistent/aaps-icons.toml"))).is_err());
    }

    #[test]
    fn test_render_options_keep_aspect() {
        let icon = aaps_icons::get("ManBack").unwrap();
        let export = ExportConfig {
            size: Some(24.0),
            tint: Some(Color::BLACK),
            ..ExportConfig::default()
        };

        let options = export.render_options(icon, None, None);
        assert_eq!(options.size, Some(Size::new(24.0, 64.0)));
        assert_eq!(options.tint, Some(Color::BLACK));

        let options = export.render_options(icon, Some(48.0), Some(Color::WHITE));
        assert_eq!(options.size, Some(Size::new(48.0, 128.0)));
        assert_eq!(options.tint, Some(Color::WHITE));
    }
}
