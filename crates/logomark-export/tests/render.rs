//! End-to-end rendering through the real scene.

use logomark_core::{
    Color, ContainerSpec, LogoProps, LogoSpec, LogomarkError, Margins, Placement, Settings,
    TextSpec, ViewBox,
};
use logomark_export::{export_svg, render_svg, render_svg_from_json};
use logomark_layout::{compose, Surface};
use logomark_render_2d::Scene;

const LOGO: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn props(align: &str) -> LogoProps {
    LogoProps {
        container: ContainerSpec::new(400.0, 300.0)
            .with_align(align)
            .with_background(Color::WHITE),
        logo: LogoSpec::new(LOGO, 100.0, 100.0).with_fill(Color::from_rgb8(0x11, 0x22, 0x33)),
        title: TextSpec::new("Acme", 24.0).with_font_family("Inter"),
        slogan: TextSpec::new("Fast.", 14.0),
    }
}

#[test]
fn test_render_top() {
    init_tracing();
    let svg = render_svg(&props("align-top"), &Settings::default()).unwrap();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300">"#));
    assert!(svg.contains(r##"fill="#ffffff""##));
    assert!(svg.contains(r#"<g transform="translate("#));
    assert!(svg.contains(r##"width="100" height="100" viewBox="2 2 20 20" fill="#112233">"##));
    assert!(svg.contains(">Acme</text>"));
    assert!(svg.contains(">Fast.</text>"));
}

#[test]
fn test_exported_positions_match_layout() {
    let mut scene = Scene::new();
    let c = compose(&mut scene, &props("align-top"), &Settings::default()).unwrap();
    let svg = export_svg(&scene).unwrap();

    // Stacked: logo starts at the top of the group, centered horizontally
    let logo = scene.bbox(c.elements.logo).unwrap();
    let group = scene.bbox(c.elements.group).unwrap();
    assert!((logo.y - group.y).abs() < 1e-9);
    assert!((logo.center_x() - group.center_x()).abs() < 1e-9);

    // The group is 100 wide, so it moves right by (400 - 100) / 2
    assert!((c.translation.x - 150.0).abs() < 1e-9);
    assert!(svg.contains(r#"<g transform="translate(150 "#), "{svg}");
}

#[test]
fn test_render_modes_share_canvas() {
    for (mode, placement) in [
        ("align-top", Placement::Stacked),
        ("align-left", Placement::LeftAnchored),
        ("align-right", Placement::RightAnchored),
    ] {
        let mut scene = Scene::new();
        let c = compose(&mut scene, &props(mode), &Settings::default()).unwrap();
        assert_eq!(c.placement, placement);

        let group = scene.bbox(c.elements.group).unwrap();
        assert!((group.center_x() - 200.0).abs() < 1e-6, "{mode}");
        assert!((group.center_y() - 150.0).abs() < 1e-6, "{mode}");
        assert!(export_svg(&scene).is_ok());
    }
}

#[test]
fn test_unknown_mode_renders_as_top() {
    init_tracing();
    let top = render_svg(&props("align-top"), &Settings::default()).unwrap();
    let bogus = render_svg(&props("align-bogus"), &Settings::default()).unwrap();
    assert_eq!(top, bogus);
}

#[test]
fn test_small_viewport_grows() {
    let mut p = props("align-left");
    p.container = p.container.with_viewbox(ViewBox::new(-10.0, -10.0, 50.0, 50.0));

    let mut scene = Scene::new();
    let c = compose(&mut scene, &p, &Settings::default()).unwrap();
    assert_eq!(c.viewport.x, 0.0);
    assert!((c.viewport.width - (c.metrics.width + 100.0)).abs() < 1e-9);
    assert!((c.viewport.height - 200.0).abs() < 1e-9);

    let svg = export_svg(&scene).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 252.8 200""#), "{svg}");
}

#[test]
fn test_margins_grow_container() {
    let plain = {
        let mut scene = Scene::new();
        compose(&mut scene, &props("align-top"), &Settings::default()).unwrap()
    };
    let spaced = {
        let mut scene = Scene::new();
        let settings = Settings::with_uniform_margins(Margins::new(5.0, 5.0, 5.0));
        compose(&mut scene, &props("align-top"), &settings).unwrap()
    };

    // Each of the three stacked elements gains top + bottom
    assert!((spaced.metrics.height - plain.metrics.height - 30.0).abs() < 1e-9);
    // The widest element gains left + bottom
    assert!((spaced.metrics.width - plain.metrics.width - 10.0).abs() < 1e-9);
}

#[test]
fn test_malformed_logo() {
    let mut p = props("align-top");
    p.logo.svg = "<svg".to_string();
    let err = render_svg(&p, &Settings::default()).unwrap_err();
    assert!(matches!(err, LogomarkError::Layout(_)));
}

#[test]
fn test_invalid_props_rejected_before_layout() {
    let mut p = props("align-top");
    p.title.font_size = f64::NAN;
    let err = render_svg(&p, &Settings::default()).unwrap_err();
    assert!(matches!(err, LogomarkError::Config(_)));
}

#[test]
fn test_render_from_json() {
    let props = format!(
        r##"{{
            "container": {{
                "width": 400,
                "height": 300,
                "viewbox": {{ "x": 0, "y": 0, "width": 400, "height": 300 }},
                "backgroundColor": "#fafafa",
                "align": "align-right",
                "className": "brand"
            }},
            "logo": {{ "svg": {logo}, "width": 80, "height": 80, "fill": "#ff0000" }},
            "title": {{ "text": "Acme & Co", "fontFamily": "Inter", "fontSize": 24, "fontColor": "#222" }},
            "slogan": {{ "text": "Fast.", "fontSize": 14 }}
        }}"##,
        logo = serde_json_string(LOGO)
    );
    let settings = r#"{ "title": { "margins": { "top": 4, "left": 0, "bottom": 4 } } }"#;

    let svg = render_svg_from_json(&props, Some(settings)).unwrap();
    assert!(svg.contains(r#"class="brand""#));
    assert!(svg.contains(r##"fill="#fafafa""##));
    assert!(svg.contains(r##"fill="#222222""##));
    assert!(svg.contains(">Acme &amp; Co</text>"));
}

#[test]
fn test_render_from_bad_json() {
    let err = render_svg_from_json("{", None).unwrap_err();
    assert!(matches!(err, LogomarkError::Config(_)));
}

fn serde_json_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
