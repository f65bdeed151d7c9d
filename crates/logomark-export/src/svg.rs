//! SVG export for laid out scenes.

use std::fmt::{self, Write};

use logomark_core::{Color, ExportError, NodeId};
use logomark_layout::Surface;
use logomark_render_2d::{GroupNode, MarkupNode, Scene, SceneNode, TextNode};
use tracing::debug;

/// Export a scene to an SVG document.
///
/// The root element carries the declared canvas size and the current viewport.
/// Groups become `<g>` elements translated by their offset, logo markup is
/// nested in an `<svg>` that maps its natural extent onto the displayed size,
/// and text is written at its baseline.
pub fn export(scene: &Scene) -> Result<String, ExportError> {
    if !scene.is_prepared() {
        return Err(ExportError::Unprepared);
    }

    let size = scene.size();
    let viewport = scene.viewport();
    let mut svg = String::new();

    write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}""#,
        Num(size.width),
        Num(size.height),
        Num(viewport.x),
        Num(viewport.y),
        Num(viewport.width),
        Num(viewport.height),
    )?;
    if let Some(class) = scene.class() {
        write!(svg, r#" class="{}""#, escape_xml(class))?;
    }
    svg.push_str(">\n");

    let background = scene.background();
    if !background.is_transparent() {
        write!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}"{} />"#,
            Num(viewport.x),
            Num(viewport.y),
            Num(viewport.width),
            Num(viewport.height),
            Paint("fill", background),
        )?;
        svg.push('\n');
    }

    let mut builder = SvgBuilder {
        svg: &mut svg,
        scene,
        indent: 1,
    };
    for &root in scene.roots() {
        builder.export_node(root)?;
    }

    svg.push_str("</svg>\n");

    debug!(
        nodes = scene.len(),
        bytes = svg.len(),
        "exported scene to svg"
    );
    Ok(svg)
}

struct SvgBuilder<'a> {
    svg: &'a mut String,
    scene: &'a Scene,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.svg.push_str("  ");
        }
    }

    fn export_node(&mut self, id: NodeId) -> Result<(), ExportError> {
        let scene = self.scene;
        match scene.node(id) {
            Some(SceneNode::Group(group)) => self.export_group(group),
            Some(SceneNode::Markup(markup)) => self.export_markup(markup),
            Some(SceneNode::Text(text)) => self.export_text(text),
            None => Err(ExportError::UnknownNode { node: id }),
        }
    }

    fn export_group(&mut self, group: &GroupNode) -> Result<(), ExportError> {
        self.write_indent();
        writeln!(
            self.svg,
            r#"<g transform="translate({} {})">"#,
            Num(group.offset.x),
            Num(group.offset.y)
        )?;

        self.indent += 1;
        for &child in &group.children {
            self.export_node(child)?;
        }
        self.indent -= 1;

        self.write_indent();
        self.svg.push_str("</g>\n");
        Ok(())
    }

    fn export_markup(&mut self, markup: &MarkupNode) -> Result<(), ExportError> {
        let natural = markup.natural;

        self.write_indent();
        write!(
            self.svg,
            r#"<svg x="{}" y="{}" width="{}" height="{}" viewBox="{} {} {} {}""#,
            Num(markup.position.x),
            Num(markup.position.y),
            Num(markup.size.width),
            Num(markup.size.height),
            Num(natural.x),
            Num(natural.y),
            Num(natural.width),
            Num(natural.height),
        )?;
        if let Some(fill) = markup.fill {
            write!(self.svg, "{}", Paint("fill", fill))?;
        }
        self.svg.push_str(">\n");

        // The inner viewport pins the source canvas to its own size so the
        // natural extent lines up with the viewBox above.
        self.indent += 1;
        self.write_indent();
        writeln!(
            self.svg,
            r#"<svg width="{}" height="{}" overflow="visible">{}</svg>"#,
            Num(markup.canvas.width),
            Num(markup.canvas.height),
            markup.markup
        )?;
        self.indent -= 1;

        self.write_indent();
        self.svg.push_str("</svg>\n");
        Ok(())
    }

    fn export_text(&mut self, text: &TextNode) -> Result<(), ExportError> {
        let spec = &text.spec;

        self.write_indent();
        writeln!(
            self.svg,
            r#"<text x="{}" y="{}"{} font-size="{}" font-family="{}">{}</text>"#,
            Num(text.position.x),
            Num(text.position.y + text.metrics.baseline),
            Paint("fill", spec.color),
            Num(spec.font_size),
            escape_xml(&spec.font_family),
            escape_xml(&spec.text)
        )?;
        Ok(())
    }
}

/// Coordinates rounded to four decimals, without trailing zeros.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 10_000.0).round() / 10_000.0;
        // Avoid printing "-0"
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{}", rounded)
    }
}

/// A paint attribute, with a matching opacity attribute for translucent colors.
struct Paint(&'static str, Color);

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Paint(attr, color) = *self;
        if color.is_transparent() {
            return write!(f, r#" {attr}="none""#);
        }
        write!(f, r#" {attr}="{}""#, color.to_hex())?;
        if !color.is_opaque() {
            let (_, _, _, a) = color.to_rgba8();
            write!(f, r#" {attr}-opacity="{}""#, Num(a as f64 / 255.0))?;
        }
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
