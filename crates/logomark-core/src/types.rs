//! Core value types for logo compositions.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Handle to a node living on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three elements of a logo composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    /// The graphic mark
    Logo,
    /// The title text
    Title,
    /// The slogan text
    Slogan,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [Self::Logo, Self::Title, Self::Slogan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Title => "title",
            Self::Slogan => "slogan",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the logo, title and slogan are arranged relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Logo, title and slogan stacked vertically on a shared center axis (`align-top`).
    #[default]
    Stacked,
    /// Logo in the left column, text column on the right (`align-left`).
    LeftAnchored,
    /// Text column on the left, logo in the right column (`align-right`).
    RightAnchored,
}

impl Placement {
    /// The alignment mode string this placement is selected by.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stacked => "align-top",
            Self::LeftAnchored => "align-left",
            Self::RightAnchored => "align-right",
        }
    }
}

impl FromStr for Placement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "align-top" => Ok(Self::Stacked),
            "align-left" => Ok(Self::LeftAnchored),
            "align-right" => Ok(Self::RightAnchored),
            other => Err(ConfigError::InvalidAlignmentMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width and height in user units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The visible coordinate region of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from hex string (e.g., "#FF5733", "F53" or "#FF5733CC").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let a = channel(6..8)?;
                let mut color = Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                color.a = a as f32 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Parse a hex color or one of the few keywords logo inputs commonly carry.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "transparent" | "none" => Ok(Self::TRANSPARENT),
            _ => Self::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                value: value.to_string(),
            }),
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a))
    }

    /// Hex representation without alpha (`#rrggbb`).
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn is_opaque(&self) -> bool {
        self.to_rgba8().3 == 255
    }

    pub fn is_transparent(&self) -> bool {
        self.to_rgba8().3 == 0
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        let (r, g, b, a) = color.to_rgba8();
        if a == 255 {
            color.to_hex()
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from(*self))
    }
}
