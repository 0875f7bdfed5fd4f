use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::config::Config;

/// Visual overrides that can live in a TOML file.
///
/// Every field is optional; anything left out keeps the value already in the [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    pub prefix: Option<String>,
    pub glyphs: Option<Vec<String>>,
    pub suffix: Option<String>,
    pub success_glyph: Option<String>,
    pub fail_glyph: Option<String>,
    pub hide_cursor: Option<bool>,
}

impl Style {
    /// Built-in glyph sets by name.
    pub fn preset(name: &str) -> Result<Self> {
        let glyphs: &[&str] = match name {
            "line" => &["|", "/", "-", "\\"],
            "dots" => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            "arc" => &["◜", "◠", "◝", "◞", "◡", "◟"],
            other => bail!("Unknown preset '{other}' (expected line, dots or arc)"),
        };
        Ok(Self {
            glyphs: Some(glyphs.iter().map(|g| (*g).to_string()).collect()),
            ..Self::default()
        })
    }

    /// Overlays the fields that are set. Messages and the writer are never touched.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(prefix) = &self.prefix {
            config.prefix.clone_from(prefix);
        }
        if let Some(glyphs) = &self.glyphs {
            config.glyphs.clone_from(glyphs);
        }
        if let Some(suffix) = &self.suffix {
            config.suffix.clone_from(suffix);
        }
        if let Some(glyph) = &self.success_glyph {
            config.success_glyph.clone_from(glyph);
        }
        if let Some(glyph) = &self.fail_glyph {
            config.fail_glyph.clone_from(glyph);
        }
        if let Some(hide) = self.hide_cursor {
            config.hide_cursor = hide;
        }
        config
    }
}

/// Load a style from a TOML file
pub fn load_style_file(path: &Path) -> Result<Style> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read style file: {}", path.display()))?;

    let style: Style = toml::from_str(&content)
        .with_context(|| format!("Failed to parse style file: {}", path.display()))?;

    Ok(style)
}

/// `<config dir>/spinline/style.toml`, if the platform has a config dir.
pub fn default_style_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("spinline").join("style.toml"))
}
