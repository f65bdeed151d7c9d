//! Heuristic text metrics.
//!
//! Surfaces without a font stack use this to report rendered text boxes. Text is
//! measured as a single line; no shaping, kerning or wrapping happens here.

use logomark_core::TextSpec;

/// Text measurement configuration.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font family
    pub font_family: String,
    /// Font size in user units
    pub font_size: f64,
    /// Line height as a multiplier (e.g., 1.2 = 120%)
    pub line_height: f64,
    /// Letter spacing in user units
    pub letter_spacing: f64,
    /// Average advance of one character, relative to the font size
    pub char_width: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16.0,
            line_height: 1.2,
            letter_spacing: 0.0,
            char_width: 0.55,
        }
    }
}

impl TextStyle {
    /// Style for a title or slogan descriptor.
    pub fn for_spec(spec: &TextSpec) -> Self {
        Self {
            font_family: spec.font_family.clone(),
            font_size: spec.font_size,
            ..Default::default()
        }
    }

    fn char_advance(&self) -> f64 {
        self.font_size * self.char_width + self.letter_spacing
    }
}

/// Measured text metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width of the text
    pub width: f64,
    /// Height of the text (including line height)
    pub height: f64,
    /// Baseline offset from top
    pub baseline: f64,
}

/// Measure a single line of text.
pub fn measure_text(text: &str, style: &TextStyle) -> TextMetrics {
    let char_count = text.chars().filter(|c| !c.is_control()).count();
    let width = if char_count == 0 {
        0.0
    } else {
        // Spacing sits between characters, not after the last one.
        char_count as f64 * style.char_advance() - style.letter_spacing
    };

    // Line height centers the em box, so the baseline moves down by half the leading.
    let height = style.font_size * style.line_height;
    let leading = height - style.font_size;

    TextMetrics {
        width: width.max(0.0),
        height,
        baseline: leading / 2.0 + style.font_size * 0.8,
    }
}
