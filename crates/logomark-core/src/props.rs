//! The input contract for a logo composition.
//!
//! A [`LogoProps`] bundles the container descriptor with the logo, title and
//! slogan descriptors. Field names follow the camelCase JSON used by callers:
//!
//! ```json
//! {
//!   "container": {
//!     "width": 600, "height": 400,
//!     "viewbox": { "x": 0, "y": 0, "width": 600, "height": 400 },
//!     "backgroundColor": "#ffffff",
//!     "align": "align-left"
//!   },
//!   "logo": { "svg": "<svg ...>", "width": 100, "height": 100, "fill": "#3b82f6" },
//!   "title": { "text": "Acme", "fontFamily": "Inter", "fontSize": 24, "color": "#111111" },
//!   "slogan": { "text": "Fast.", "fontFamily": "Inter", "fontSize": 14, "color": "#555555" }
//! }
//! ```

use crate::errors::ConfigError;
use crate::types::{Color, Placement, ViewBox};

/// Everything needed to lay out one logo composition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoProps {
    pub container: ContainerSpec,
    pub logo: LogoSpec,
    pub title: TextSpec,
    pub slogan: TextSpec,
}

/// The canvas descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContainerSpec {
    /// Declared canvas width
    pub width: f64,
    /// Declared canvas height
    pub height: f64,
    /// Initial viewport of the canvas
    pub viewbox: ViewBox,
    /// Canvas background
    #[cfg_attr(feature = "serde", serde(default = "transparent", alias = "background"))]
    pub background_color: Color,
    /// Raw alignment mode (`align-top`, `align-left`, `align-right`)
    #[cfg_attr(feature = "serde", serde(default = "default_align"))]
    pub align: String,
    /// Style class attached to the canvas root
    #[cfg_attr(feature = "serde", serde(default, alias = "className"))]
    pub class: Option<String>,
}

/// The graphic mark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoSpec {
    /// Source vector markup
    pub svg: String,
    /// Target width
    pub width: f64,
    /// Target height
    pub height: f64,
    /// Fill applied to the imported markup
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill: Color,
}

/// A title or slogan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextSpec {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default = "default_font_family"))]
    pub font_family: String,
    /// Font size in user units
    pub font_size: f64,
    #[cfg_attr(feature = "serde", serde(default, alias = "fontColor"))]
    pub color: Color,
}

impl ContainerSpec {
    /// Create a container whose viewport matches its declared size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            viewbox: ViewBox::new(0.0, 0.0, width, height),
            background_color: Color::TRANSPARENT,
            align: default_align(),
            class: None,
        }
    }

    /// Set the alignment mode string.
    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = align.into();
        self
    }

    /// Set the initial viewport.
    pub fn with_viewbox(mut self, viewbox: ViewBox) -> Self {
        self.viewbox = viewbox;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Parse the alignment mode. Unknown modes are an error here; the layout
    /// pipeline recovers from it.
    pub fn placement(&self) -> Result<Placement, ConfigError> {
        self.align.parse()
    }
}

impl LogoSpec {
    pub fn new(svg: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            svg: svg.into(),
            width,
            height,
            fill: Color::default(),
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }
}

impl TextSpec {
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_family: default_font_family(),
            font_size,
            color: Color::default(),
        }
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl LogoProps {
    /// Load props from a JSON string.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson {
            reason: e.to_string(),
        })
    }

    /// Check every size the layout depends on.
    ///
    /// Geometry over finite, non-negative numbers cannot fail, so this is the
    /// only input check the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let container = &self.container;
        non_negative("container width", container.width)?;
        non_negative("container height", container.height)?;
        finite("viewbox x", container.viewbox.x)?;
        finite("viewbox y", container.viewbox.y)?;
        non_negative("viewbox width", container.viewbox.width)?;
        non_negative("viewbox height", container.viewbox.height)?;
        non_negative("logo width", self.logo.width)?;
        non_negative("logo height", self.logo.height)?;
        non_negative("title font size", self.title.font_size)?;
        non_negative("slogan font size", self.slogan.font_size)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::InvalidDimension { field, value });
    }
    Ok(())
}

fn default_align() -> String {
    Placement::Stacked.as_str().to_string()
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

#[cfg(feature = "serde")]
fn transparent() -> Color {
    Color::TRANSPARENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_props() -> LogoProps {
        LogoProps {
            container: ContainerSpec::new(600.0, 400.0),
            logo: LogoSpec::new("<svg/>", 100.0, 100.0),
            title: TextSpec::new("Acme", 24.0),
            slogan: TextSpec::new("Fast.", 14.0),
        }
    }

    #[test]
    fn test_validate_accepts_zero_sizes() {
        let mut props = sample_props();
        props.logo.width = 0.0;
        props.slogan.font_size = 0.0;
        assert!(props.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let mut props = sample_props();
        props.title.font_size = -1.0;
        assert!(matches!(
            props.validate(),
            Err(ConfigError::InvalidDimension { field: "title font size", .. })
        ));

        let mut props = sample_props();
        props.container.viewbox.x = f64::NAN;
        assert!(matches!(
            props.validate(),
            Err(ConfigError::InvalidDimension { field: "viewbox x", .. })
        ));
    }

    #[test]
    fn test_container_placement() {
        let container = ContainerSpec::new(10.0, 10.0);
        assert_eq!(container.placement().unwrap(), Placement::Stacked);
        let container = container.with_align("align-right");
        assert_eq!(container.placement().unwrap(), Placement::RightAnchored);
        assert!(container.with_align("centered").placement().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = r##"{
            "container": {
                "width": 600, "height": 400,
                "viewbox": { "x": 0, "y": 0, "width": 600, "height": 400 },
                "backgroundColor": "#ffffff",
                "align": "align-left"
            },
            "logo": { "svg": "<svg/>", "width": 100, "height": 80, "fill": "#3b82f6" },
            "title": { "text": "Acme", "fontFamily": "Inter", "fontSize": 24, "fontColor": "#111" },
            "slogan": { "text": "Fast.", "fontSize": 14 }
        }"##;

        let props = LogoProps::from_json_str(json).unwrap();
        assert_eq!(props.container.background_color, Color::WHITE);
        assert_eq!(props.container.placement().unwrap(), Placement::LeftAnchored);
        assert_eq!(props.logo.fill.to_hex(), "#3b82f6");
        assert_eq!(props.title.font_family, "Inter");
        assert_eq!(props.title.color.to_hex(), "#111111");
        assert_eq!(props.slogan.font_family, "sans-serif");
        assert_eq!(props.slogan.color, Color::BLACK);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_bad_color() {
        let json = r#"{
            "container": { "width": 1, "height": 1, "viewbox": { "x": 0, "y": 0, "width": 1, "height": 1 } },
            "logo": { "svg": "", "width": 1, "height": 1, "fill": "not-a-color" },
            "title": { "text": "", "fontSize": 1 },
            "slogan": { "text": "", "fontSize": 1 }
        }"#;
        let err = LogoProps::from_json_str(json).unwrap_err();
        match err {
            ConfigError::InvalidJson { reason } => assert!(reason.contains("not-a-color")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
