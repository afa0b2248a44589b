pub mod keys;

use crate::{constants::APP_NAME, git::UnmergedCodes};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub use keys::{Command, KeysConfig};

fn config_dir() -> Option<PathBuf> {
    // ~/.config on macOS too, not ~/Library/Application Support
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.is_empty()
    {
        return Some(PathBuf::from(xdg_config_home).join(APP_NAME));
    }
    if cfg!(windows) {
        return dirs::config_dir().map(|d| d.join(APP_NAME));
    }
    dirs::home_dir().map(|home| home.join(".config").join(APP_NAME))
}

pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Color theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Key binding configuration, one table per layer.
    /// To unbind an inherited key mapping, assign it to `noop`.
    #[serde(default)]
    pub keys: KeysConfig,

    /// Merge conflict detection.
    #[serde(default)]
    pub merge: MergeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct MergeConfig {
    /// Porcelain status codes treated as unmerged after a failed merge. For example:
    /// ```toml
    /// [merge]
    /// unmerged_codes = ["UU", "AA"]
    /// ```
    #[serde(default = "MergeConfig::default_unmerged_codes")]
    pub unmerged_codes: Vec<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            unmerged_codes: Self::default_unmerged_codes(),
        }
    }
}

impl MergeConfig {
    fn default_unmerged_codes() -> Vec<String> {
        crate::constants::DEFAULT_UNMERGED_CODES
            .iter()
            .map(|c| (*c).to_string())
            .collect()
    }

    pub fn unmerged(&self) -> UnmergedCodes {
        UnmergedCodes::new(&self.unmerged_codes)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// List title and highlighted row accent (default: "magenta").
    #[serde(
        default = "ThemeConfig::default_accent",
        deserialize_with = "deserialize_color"
    )]
    pub accent: ThemeColor,
    /// Rows marked for deletion (default: "red").
    #[serde(
        default = "ThemeConfig::default_marked",
        deserialize_with = "deserialize_color"
    )]
    pub marked: ThemeColor,
    /// The branch being merged while a target is picked (default: "cyan").
    #[serde(
        default = "ThemeConfig::default_merge_source",
        deserialize_with = "deserialize_color"
    )]
    pub merge_source: ThemeColor,
    /// Success/positive color, also added diff lines (default: "green").
    #[serde(
        default = "ThemeConfig::default_success",
        deserialize_with = "deserialize_color"
    )]
    pub success: ThemeColor,
    /// Error color, also removed diff lines (default: "red").
    #[serde(
        default = "ThemeConfig::default_error",
        deserialize_with = "deserialize_color"
    )]
    pub error: ThemeColor,
    /// Warning color, used for conflicts (default: "yellow").
    #[serde(
        default = "ThemeConfig::default_warning",
        deserialize_with = "deserialize_color"
    )]
    pub warning: ThemeColor,
    /// Muted/dim text color (default: "gray").
    #[serde(
        default = "ThemeConfig::default_muted",
        deserialize_with = "deserialize_color"
    )]
    pub muted: ThemeColor,
    /// Border color (default: "gray").
    #[serde(
        default = "ThemeConfig::default_border",
        deserialize_with = "deserialize_color"
    )]
    pub border: ThemeColor,
    /// Hint/key binding color, also hunk headers (default: "blue").
    #[serde(
        default = "ThemeConfig::default_hint",
        deserialize_with = "deserialize_color"
    )]
    pub hint: ThemeColor,
    /// Foreground color for highlighted/selected items (default: "white").
    #[serde(
        default = "ThemeConfig::default_highlight_fg",
        deserialize_with = "deserialize_color"
    )]
    pub highlight_fg: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: Self::default_accent(),
            marked: Self::default_marked(),
            merge_source: Self::default_merge_source(),
            success: Self::default_success(),
            error: Self::default_error(),
            warning: Self::default_warning(),
            muted: Self::default_muted(),
            border: Self::default_border(),
            hint: Self::default_hint(),
            highlight_fg: Self::default_highlight_fg(),
        }
    }
}

impl ThemeConfig {
    fn default_accent() -> ThemeColor {
        ThemeColor::Named(NamedColor::Magenta)
    }
    fn default_marked() -> ThemeColor {
        ThemeColor::Named(NamedColor::Red)
    }
    fn default_merge_source() -> ThemeColor {
        ThemeColor::Named(NamedColor::Cyan)
    }
    fn default_success() -> ThemeColor {
        ThemeColor::Named(NamedColor::Green)
    }
    fn default_error() -> ThemeColor {
        ThemeColor::Named(NamedColor::Red)
    }
    fn default_warning() -> ThemeColor {
        ThemeColor::Named(NamedColor::Yellow)
    }
    fn default_muted() -> ThemeColor {
        ThemeColor::Named(NamedColor::Gray)
    }
    fn default_border() -> ThemeColor {
        ThemeColor::Named(NamedColor::Gray)
    }
    fn default_hint() -> ThemeColor {
        ThemeColor::Named(NamedColor::Blue)
    }
    fn default_highlight_fg() -> ThemeColor {
        ThemeColor::Named(NamedColor::White)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl NamedColor {
    /// All named colours in alphabetical order, as accepted by the config parser.
    pub const fn all() -> &'static [(&'static str, NamedColor)] {
        &[
            ("black", NamedColor::Black),
            ("blue", NamedColor::Blue),
            ("cyan", NamedColor::Cyan),
            ("gray", NamedColor::Gray),
            ("green", NamedColor::Green),
            ("magenta", NamedColor::Magenta),
            ("red", NamedColor::Red),
            ("white", NamedColor::White),
            ("yellow", NamedColor::Yellow),
        ]
    }

    pub fn as_str(self) -> &'static str {
        Self::all()
            .iter()
            .find(|(_, c)| *c == self)
            .map_or("white", |(name, _)| name)
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(n) => f.write_str(n.as_str()),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl Serialize for ThemeColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl ThemeColor {
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(hex) = s.strip_prefix('#')
            && hex.len() == 6
            && hex.is_ascii()
        {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Self::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        let lower = s.to_lowercase();
        let lookup = if lower == "grey" { "gray" } else { lower.as_str() };
        NamedColor::all()
            .iter()
            .find(|(name, _)| *name == lookup)
            .map(|(_, color)| Self::Named(*color))
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<ThemeColor, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ThemeColor::parse(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid color '{s}': expected a named color (black, red, green, yellow, \
             blue, magenta, cyan, white, gray/grey) or hex (#rrggbb)"
        ))
    })
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s)?;
    Ok(config)
}

/// Load the config file. An explicit path must exist; a missing default file means defaults.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let config_file = match config_override {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path.to_path_buf()
        }
        None => match default_config_file() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    let contents = fs::read_to_string(&config_file)
        .with_context(|| format!("reading {}", config_file.display()))?;
    load_config_from_str(&contents).with_context(|| format!("parsing {}", config_file.display()))
}
