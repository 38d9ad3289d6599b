//! Application configuration, read from a JSON file.
//!
//! Lookup order: the path in `CHECKERS_CONFIG`, then `checkers.json` in the
//! working directory, then built-in defaults. Every field is optional.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use gpui::rgb;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::domain::Table;
use crate::ui::theme::{
    CROWN, DARK_SQUARE, DARK_TEAM, LIGHT_SQUARE, LIGHT_TEAM, SELECTED_OUTLINE, Theme,
};

pub const CONFIG_ENV: &str = "CHECKERS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "checkers.json";

/// A `#rrggbb` color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub u32);

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let digits = s.strip_prefix('#').unwrap_or(&s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color {:?} is not in #rrggbb form", s));
        }
        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|e| e.to_string())
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl JsonSchema for HexColor {
    fn schema_name() -> Cow<'static, str> {
        "HexColor".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^#?[0-9a-fA-F]{6}$"
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub light_team: HexColor,
    pub dark_team: HexColor,
    pub selected_outline: HexColor,
    pub crown: HexColor,
    pub light_square: HexColor,
    pub dark_square: HexColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light_team: HexColor(LIGHT_TEAM),
            dark_team: HexColor(DARK_TEAM),
            selected_outline: HexColor(SELECTED_OUTLINE),
            crown: HexColor(CROWN),
            light_square: HexColor(LIGHT_SQUARE),
            dark_square: HexColor(DARK_SQUARE),
        }
    }
}

impl From<&ThemeConfig> for Theme {
    fn from(config: &ThemeConfig) -> Self {
        Self {
            light_team: rgb(config.light_team.0),
            dark_team: rgb(config.dark_team.0),
            selected_outline: rgb(config.selected_outline.0),
            crown: rgb(config.crown.0),
            light_square: rgb(config.light_square.0),
            dark_square: rgb(config.dark_square.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Mirror crown glyphs on kings
    pub flip_crowns: bool,
    /// Starting layout, one symbol per slot (`.`, `l`, `L`, `d`, `D`).
    /// The standard opening setup when absent.
    pub layout: Option<String>,
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 600.0,
            flip_crowns: false,
            layout: None,
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `CHECKERS_CONFIG`, `checkers.json`, or fall back to defaults
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::from_file(&path),
            None => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        for (name, value) in [
            ("window_width", config.window_width),
            ("window_height", config.window_height),
        ] {
            ensure!(
                value.is_finite() && value > 0.0,
                "{} must be a positive number of pixels, got {}",
                name,
                value
            );
        }
        // surface layout errors at startup rather than on first reset
        config.table()?;
        Ok(config)
    }

    /// The starting piece placement
    pub fn table(&self) -> Result<Table> {
        match &self.layout {
            Some(layout) => layout
                .parse::<Table>()
                .with_context(|| format!("Invalid board layout {:?}", layout)),
            None => Ok(Table::standard()),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        Some(default)
    } else {
        None
    }
}

/// Pretty-printed JSON Schema for the config file
pub fn schema_json() -> Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
