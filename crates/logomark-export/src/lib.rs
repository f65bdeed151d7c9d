//! Export formats for Logomark compositions.
//!
//! Only SVG is supported. A composition can be exported from a laid out
//! [`Scene`], or rendered straight from its input with [`render_svg`].

pub mod svg;

use logomark_core::{ExportError, LogoProps, LogomarkError, Settings};
use logomark_layout::compose;
use logomark_render_2d::Scene;

/// Export a laid out scene to an SVG document.
pub fn export_svg(scene: &Scene) -> Result<String, ExportError> {
    svg::export(scene)
}

/// Validate, lay out and export a composition.
pub fn render_svg(props: &LogoProps, settings: &Settings) -> Result<String, LogomarkError> {
    props.validate()?;

    let mut scene = Scene::new();
    compose(&mut scene, props, settings)?;
    Ok(export_svg(&scene)?)
}

/// Like [`render_svg`], reading the props and optional settings from JSON.
pub fn render_svg_from_json(props: &str, settings: Option<&str>) -> Result<String, LogomarkError> {
    let props = LogoProps::from_json_str(props)?;
    let settings = match settings {
        Some(json) => Settings::from_json_str(json)?,
        None => Settings::default(),
    };
    render_svg(&props, &settings)
}
