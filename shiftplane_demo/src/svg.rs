// Copyright 2025 the Shiftplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization for a [`Scene`].

use std::fmt::Write as _;

use peniko::{Brush, Color};
use shiftplane::{PathPrimitive, Primitive, Scene, TextAnchor, TextBaseline, TextPrimitive};

/// Renders `scene` as a standalone SVG document sized to the scene frame.
///
/// Primitives are written in paint order, so later ones cover earlier ones.
pub(crate) fn render_scene(scene: &Scene, background: Option<Color>) -> String {
    let frame = scene.frame();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        frame.x0,
        frame.y0,
        frame.width(),
        frame.height(),
        frame.width(),
        frame.height(),
    );
    if let Some(color) = background {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            frame.x0,
            frame.y0,
            frame.width(),
            frame.height(),
        );
        write_paint(&mut out, "fill", &Brush::Solid(color));
        out.push_str("/>\n");
    }
    for primitive in scene.primitives() {
        match primitive {
            Primitive::Path(p) => write_path(&mut out, p),
            Primitive::Text(t) => write_text(&mut out, t),
        }
    }
    out.push_str("</svg>\n");
    out
}

fn write_path(out: &mut String, p: &PathPrimitive) {
    let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
    match &p.fill {
        Some(fill) => write_paint(out, "fill", fill),
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &p.stroke {
        if stroke.stroke_width > 0.0 {
            write_paint(out, "stroke", &stroke.brush);
            let _ = write!(
                out,
                r#" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round""#,
                stroke.stroke_width
            );
        }
    }
    out.push_str("/>\n");
}

fn write_text(out: &mut String, t: &TextPrimitive) {
    let baseline = match t.baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Hanging => "hanging",
        TextBaseline::Alphabetic => "alphabetic",
    };
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
        t.pos.x, t.pos.y, t.font_size
    );
    write_paint(out, "fill", &t.fill);
    let _ = writeln!(out, ">{}</text>", escape_xml(&t.text));
}

fn write_paint(out: &mut String, name: &str, brush: &Brush) {
    let Brush::Solid(color) = brush else {
        let _ = write!(out, r#" {name}="none""#);
        return;
    };
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Point, Rect};
    use peniko::color::palette::css;
    use shiftplane::StrokeStyle;

    use super::*;

    #[test]
    fn paths_and_text_serialize_in_paint_order() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 200.0, 100.0));
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 10.0));
        scene.add(Primitive::stroked(
            path,
            StrokeStyle::solid(css::TEAL.multiply_alpha(0.4), 2.0),
        ));
        scene.add(Primitive::Text(TextPrimitive {
            pos: Point::new(5.0, 5.0),
            text: "a<b".into(),
            font_size: 12.0,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Hanging,
            fill: Brush::Solid(css::BLACK),
        }));

        let svg = render_scene(&scene, Some(css::WHITE));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r##"fill="none" stroke="#"##));
        assert!(svg.contains("stroke-opacity="));
        assert!(svg.contains("a&lt;b"));
        let path_at = svg.find("<path").unwrap();
        let text_at = svg.find("<text").unwrap();
        assert!(path_at < text_at);
    }
}
