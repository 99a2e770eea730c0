use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the color service knows about a single color, already
/// formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub name: String,
    pub cmyk: Option<String>,
}

/// One entry of a generated color scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeColor {
    pub hex: String,
    pub rgb: String,
    pub name: String,
}

/// A saved palette. Colors are canonical `#RRGGBB` strings and keep the
/// order they were generated in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Sort orders offered by the palette library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    ByName,
}

/// Color spaces the conversion operation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorSpace {
    Hex,
    Rgb,
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorSpace::Hex => write!(f, "hex"),
            ColorSpace::Rgb => write!(f, "rgb"),
        }
    }
}

/// Normalize a hex color to the canonical `#RRGGBB` form used in stored
/// palettes. Assumes the value already passed hex validation.
pub fn canonical_hex(value: &str) -> String {
    let digits = value.strip_prefix('#').unwrap_or(value);
    format!("#{}", digits.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_hex() {
        assert_eq!(canonical_hex("ff00aa"), "#FF00AA");
        assert_eq!(canonical_hex("#ff00aa"), "#FF00AA");
        assert_eq!(canonical_hex("#FF00AA"), "#FF00AA");
    }

    #[test]
    fn test_palette_with_tags() {
        let palette = Palette::new("Sunset", vec!["#FF0000".to_string()])
            .with_tags(vec!["warm".to_string()]);
        assert_eq!(palette.name, "Sunset");
        assert_eq!(palette.tags, vec!["warm"]);
    }

    #[test]
    fn test_color_space_display() {
        assert_eq!(ColorSpace::Hex.to_string(), "hex");
        assert_eq!(ColorSpace::Rgb.to_string(), "rgb");
    }
}
