//! Highlight palette
//!
//! A small fixed set of color tags, each mapped to one RGBA paint style.
//! Styles can be overridden from the config file with `#RRGGBBAA` strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A highlight color tag from the fixed palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Red,
    Yellow,
    Green,
    Blue,
    Pink,
    Orange,
}

impl ColorTag {
    /// Every tag, in pick-list order
    pub const ALL: [ColorTag; 6] = [
        ColorTag::Red,
        ColorTag::Yellow,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Pink,
        ColorTag::Orange,
    ];

    /// Label shown in the color pick list
    pub fn label(self) -> &'static str {
        match self {
            ColorTag::Red => "Red",
            ColorTag::Yellow => "Yellow",
            ColorTag::Green => "Green",
            ColorTag::Blue => "Blue",
            ColorTag::Pink => "Pink",
            ColorTag::Orange => "Orange",
        }
    }

    /// Parse a label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Built-in paint style (alpha 0.7)
    pub const fn default_style(self) -> Color {
        match self {
            ColorTag::Red => Color::rgba(255, 0, 0, 178),
            ColorTag::Yellow => Color::rgba(255, 255, 0, 178),
            ColorTag::Green => Color::rgba(0, 255, 0, 178),
            ColorTag::Blue => Color::rgba(0, 0, 255, 178),
            ColorTag::Pink => Color::rgba(255, 105, 180, 178),
            ColorTag::Orange => Color::rgba(255, 165, 0, 178),
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid hex color: #{}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                255,
            )),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid hex color length: #{}", s)),
        }
    }

    /// CSS-style `rgba(r, g, b, a)` with alpha as a fraction
    pub fn to_css(&self) -> String {
        let alpha = (self.a as f32 / 255.0 * 10.0).round() / 10.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Resolved paint styles for every tag
#[derive(Debug, Clone)]
pub struct Palette {
    styles: HashMap<ColorTag, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: ColorTag::ALL
                .into_iter()
                .map(|tag| (tag, tag.default_style()))
                .collect(),
        }
    }
}

impl Palette {
    /// Build a palette from hex overrides; invalid entries keep the default
    pub fn with_overrides(overrides: &HashMap<ColorTag, String>) -> Self {
        let mut palette = Self::default();
        for (tag, hex) in overrides {
            match Color::from_hex(hex) {
                Ok(color) => {
                    palette.styles.insert(*tag, color);
                }
                Err(e) => tracing::warn!("Ignoring palette override for {}: {}", tag, e),
            }
        }
        palette
    }

    /// Paint style for a tag
    pub fn style(&self, tag: ColorTag) -> Color {
        self.styles
            .get(&tag)
            .copied()
            .unwrap_or_else(|| tag.default_style())
    }
}
