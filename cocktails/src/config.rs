//! Configuration loading for the cocktails CLI.
//!
//! ```toml
//! [library]
//! recipes = "~/cocktails/recipes"
//!
//! [fonts]
//! title = "/usr/share/fonts/Lobster-Regular.ttf"
//! body = "/usr/share/fonts/Roboto-Regular.ttf"
//! body_bold = "/usr/share/fonts/Roboto-Bold.ttf"
//!
//! [card]
//! frame = "~/cocktails/drinks_4x6.png"
//! scale = 0.5
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    pub library: Option<LibraryConfig>,
    pub fonts: Option<FontConfig>,
    pub card: Option<CardConfig>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct LibraryConfig {
    /// Directory searched when no recipe directory is given.
    pub recipes: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct FontConfig {
    pub title: Option<PathBuf>,
    pub body: Option<PathBuf>,
    pub body_bold: Option<PathBuf>,
    pub body_italic: Option<PathBuf>,
    pub body_bold_italic: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CardConfig {
    pub frame: Option<PathBuf>,
    pub scale: Option<f32>,
}

/// Default scale applied to the card frame and layout constants.
pub const DEFAULT_CARD_SCALE: f32 = 0.5;

impl Config {
    pub fn recipe_dir(&self) -> Option<PathBuf> {
        self.library
            .as_ref()
            .and_then(|library| library.recipes.as_deref())
            .map(expand_home)
    }

    /// Card scale, or the default (0.5) when unset or not positive.
    pub fn card_scale(&self) -> f32 {
        self.card
            .as_ref()
            .and_then(|card| card.scale)
            .filter(|scale| *scale > 0.0)
            .unwrap_or(DEFAULT_CARD_SCALE)
    }

    pub fn frame_path(&self) -> Option<PathBuf> {
        self.card
            .as_ref()
            .and_then(|card| card.frame.as_deref())
            .map(expand_home)
    }

    pub fn fonts(&self) -> FontConfig {
        let fonts = self.fonts.clone().unwrap_or_default();
        FontConfig {
            title: fonts.title.as_deref().map(expand_home),
            body: fonts.body.as_deref().map(expand_home),
            body_bold: fonts.body_bold.as_deref().map(expand_home),
            body_italic: fonts.body_italic.as_deref().map(expand_home),
            body_bold_italic: fonts.body_bold_italic.as_deref().map(expand_home),
        }
    }
}

/// Replace a leading `~` with the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(dir.join("cocktails").join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file as TOML: {}", path.display()))?;
    Ok(config)
}
