//! Margin settings per element kind.
//!
//! Settings are an immutable value handed to the layout engine; nothing here is
//! process-wide state.

use crate::types::ElementKind;

/// Spacing around one element.
///
/// There is no `right` margin: the alignment formulas reuse `bottom` as the
/// trailing horizontal margin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
}

impl Margins {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(top: f64, left: f64, bottom: f64) -> Self {
        Self { top, left, bottom }
    }

    /// Create uniform margins.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Total vertical margin.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Total horizontal margin (`left` + `bottom`).
    pub fn horizontal(&self) -> f64 {
        self.left + self.bottom
    }
}

/// Settings for one element kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementSettings {
    pub margins: Margins,
}

/// Layout settings for the whole composition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    pub logo: ElementSettings,
    pub title: ElementSettings,
    pub slogan: ElementSettings,
}

impl Settings {
    /// Settings with the same margins on every element.
    pub fn with_uniform_margins(margins: Margins) -> Self {
        let element = ElementSettings { margins };
        Self {
            logo: element,
            title: element,
            slogan: element,
        }
    }

    /// Get the settings for an element kind.
    pub fn element(&self, kind: ElementKind) -> &ElementSettings {
        match kind {
            ElementKind::Logo => &self.logo,
            ElementKind::Title => &self.title,
            ElementKind::Slogan => &self.slogan,
        }
    }

    /// Get the margins for an element kind.
    pub fn margins(&self, kind: ElementKind) -> Margins {
        self.element(kind).margins
    }

    /// Load settings from a JSON string. Missing fields default to zero.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, crate::errors::ConfigError> {
        serde_json::from_str(json).map_err(|e| crate::errors::ConfigError::InvalidJson {
            reason: e.to_string(),
        })
    }
}
