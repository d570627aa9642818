//! SVG import and export
//!
//! Import goes through `usvg`, which resolves styles, `use` references and
//! transforms, and turns shapes (rect, circle, polygon, arcs) into plain
//! paths. Each visible path becomes one group with absolute commands.

use std::borrow::Cow;
use std::fmt::Write;
use std::fs;
use std::path::Path as FilePath;

use usvg::tiny_skia_path::PathSegment;
use usvg::{Options, Tree};

use crate::color::Color;
use crate::command::DrawCommand;
use crate::error::{PathError, SvgError};
use crate::geometry::Point;
use crate::icon::{IconDefinition, PathFillType, PathGroup, PathStyle, StrokeCap, StrokeJoin};
use crate::path_data::to_path_data;
use crate::render::{render, RenderOptions};

impl IconDefinition {
    /// Build an owned icon from an SVG document
    ///
    /// Display and viewport size both come from the document size.
    pub fn from_svg(name: impl Into<Cow<'static, str>>, svg: &str) -> Result<Self, SvgError> {
        let tree = Tree::from_str(svg, &Options::default()).map_err(|e| SvgError::Parse(e.to_string()))?;

        let size = tree.size();
        let mut builder = IconDefinition::builder(name, size.width(), size.height(), size.width(), size.height());

        let mut groups = Vec::new();
        collect_groups(tree.root(), &mut groups);
        if groups.is_empty() {
            return Err(SvgError::Unsupported("document has no visible paths".to_string()));
        }

        for group in groups {
            builder = builder.group(group);
        }
        Ok(builder.build())
    }

    /// Load an icon from an SVG file, named after the file stem
    pub fn from_svg_file(path: impl AsRef<FilePath>) -> Result<Self, SvgError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_svg(name, &data)
    }
}

fn collect_groups(group: &usvg::Group, out: &mut Vec<PathGroup>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_groups(g, out),
            usvg::Node::Path(p) => {
                if !p.is_visible() {
                    continue;
                }
                let commands = convert_path(p.data(), &p.abs_transform());
                let mut style = PathStyle::new();
                if !p.id().is_empty() {
                    style = style.named(p.id().to_string());
                }
                if let Some(fill) = p.fill() {
                    style = style.fill(paint_color(fill.paint())).fill_alpha(fill.opacity().get());
                    style.fill_type = match fill.rule() {
                        usvg::FillRule::NonZero => PathFillType::NonZero,
                        usvg::FillRule::EvenOdd => PathFillType::EvenOdd,
                    };
                }
                if let Some(stroke) = p.stroke() {
                    style = stroke_style(style, stroke, &p.abs_transform());
                }
                out.push(PathGroup::new(style, commands));
            }
            usvg::Node::Image(_) => {
                tracing::debug!("skipping embedded image");
            }
            usvg::Node::Text(_) => {
                tracing::debug!("skipping text node");
            }
        }
    }
}

fn convert_path(data: &usvg::tiny_skia_path::Path, transform: &usvg::Transform) -> Vec<DrawCommand> {
    let (sx, ky, kx, sy, tx, ty) = (
        transform.sx,
        transform.ky,
        transform.kx,
        transform.sy,
        transform.tx,
        transform.ty,
    );
    let pt = |p: usvg::tiny_skia_path::Point| Point::new(sx * p.x + kx * p.y + tx, ky * p.x + sy * p.y + ty);

    data.segments()
        .map(|segment| match segment {
            PathSegment::MoveTo(p) => DrawCommand::MoveTo(pt(p)),
            PathSegment::LineTo(p) => DrawCommand::LineTo(pt(p)),
            PathSegment::QuadTo(c, e) => DrawCommand::QuadTo {
                control: pt(c),
                end: pt(e),
            },
            PathSegment::CubicTo(c1, c2, e) => DrawCommand::CurveTo {
                control1: pt(c1),
                control2: pt(c2),
                end: pt(e),
            },
            PathSegment::Close => DrawCommand::Close,
        })
        .collect()
}

fn paint_color(paint: &usvg::Paint) -> Color {
    let rgb = |c: usvg::Color| Color::rgb(c.red, c.green, c.blue);
    match paint {
        usvg::Paint::Color(color) => rgb(*color),
        usvg::Paint::LinearGradient(lg) => gradient_fallback(lg.stops()),
        usvg::Paint::RadialGradient(rg) => gradient_fallback(rg.stops()),
        usvg::Paint::Pattern(_) => {
            tracing::warn!("pattern paint is not supported, using gray");
            Color::rgb(0x80, 0x80, 0x80)
        }
    }
}

fn gradient_fallback(stops: &[usvg::Stop]) -> Color {
    tracing::warn!("gradient paint is not supported, using its first stop");
    stops.first().map_or(Color::BLACK, |stop| {
        let c = stop.color();
        Color::rgb(c.red, c.green, c.blue).multiply_alpha(stop.opacity().get())
    })
}

fn stroke_style(style: PathStyle, stroke: &usvg::Stroke, transform: &usvg::Transform) -> PathStyle {
    let cap = match stroke.linecap() {
        usvg::LineCap::Butt => StrokeCap::Butt,
        usvg::LineCap::Round => StrokeCap::Round,
        usvg::LineCap::Square => StrokeCap::Square,
    };
    let join = match stroke.linejoin() {
        usvg::LineJoin::Miter | usvg::LineJoin::MiterClip => StrokeJoin::Miter,
        usvg::LineJoin::Round => StrokeJoin::Round,
        usvg::LineJoin::Bevel => StrokeJoin::Bevel,
    };
    if stroke.dasharray().is_some() {
        tracing::debug!("dropping stroke dash pattern");
    }

    // Widths live in user space; carry the transform's scale over
    let (scale_x, scale_y) = transform.get_scale();
    let scale = (scale_x * scale_y).sqrt();

    style
        .stroke(paint_color(stroke.paint()), stroke.width().get() * scale)
        .stroke_alpha(stroke.opacity().get())
        .stroke_cap(cap)
        .stroke_join(join)
        .stroke_miter(stroke.miterlimit().get())
}

/// Write `icon` as a standalone SVG document
///
/// Geometry is resolved through [`render`], so size and tint apply.
pub fn to_svg_document(icon: &IconDefinition, options: &RenderOptions) -> Result<String, PathError> {
    let rendered = render(icon, options)?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = rendered.width,
        h = rendered.height,
    );

    for path in &rendered.paths {
        out.push_str("  <path");
        if let Some(name) = &path.name {
            let _ = write!(out, r#" id="{}""#, escape_attr(name));
        }
        let _ = write!(out, r#" d="{}""#, to_path_data(&path.geometry));

        match path.fill {
            Some(fill) => {
                push_paint(&mut out, "fill", fill);
                if path.fill_type == PathFillType::EvenOdd {
                    out.push_str(r#" fill-rule="evenodd""#);
                }
            }
            None => out.push_str(r#" fill="none""#),
        }

        if let Some(stroke) = &path.stroke {
            push_paint(&mut out, "stroke", stroke.color);
            let _ = write!(
                out,
                r#" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}" stroke-miterlimit="{}""#,
                stroke.width,
                stroke.cap.as_svg(),
                stroke.join.as_svg(),
                stroke.miter_limit,
            );
        }
        out.push_str("/>\n");
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn push_paint(out: &mut String, attr: &str, color: Color) {
    let _ = write!(out, r#" {attr}="{}""#, color.to_rgb_hex());
    if color.a != 0xFF {
        let _ = write!(out, r#" {attr}-opacity="{}""#, color.alpha());
    }
}

fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace('&', "&amp;")
            .replace('"', "&quot;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
  <g>
    <path id="ring" d="M2 2 H22 V22 H2 Z" fill="none" stroke="#000000" stroke-width="2" stroke-linecap="round"/>
    <rect x="8" y="8" width="8" height="8" fill="#67DFE8" fill-opacity="0.5" fill-rule="evenodd"/>
  </g>
</svg>"##;

    #[test]
    fn test_from_svg() {
        let icon = IconDefinition::from_svg("Badge", BADGE).unwrap();

        assert_eq!(icon.name(), "Badge");
        assert_eq!(icon.viewport().width, 24.0);
        assert_eq!(icon.groups().len(), 2);

        let ring = icon.group("ring").unwrap();
        assert!(ring.style.fill.is_none());
        assert_eq!(ring.style.stroke, Some(Color::BLACK));
        assert_eq!(ring.style.stroke_width, 2.0);
        assert_eq!(ring.style.stroke_cap, StrokeCap::Round);
        assert_eq!(ring.commands[0], DrawCommand::MoveTo(Point::new(2.0, 2.0)));

        let square = &icon.groups()[1];
        assert_eq!(square.style.fill, Some(Color::from_argb(0xFF67DFE8)));
        assert_eq!(square.style.fill_alpha, 0.5);
        assert_eq!(square.style.fill_type, PathFillType::EvenOdd);
        let bounds = square.geometry().unwrap().bounds().unwrap();
        assert_eq!((bounds.x(), bounds.y(), bounds.width()), (8.0, 8.0, 8.0));
    }

    #[test]
    fn test_viewbox_is_applied() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24">
  <path d="M0 0 L24 24" stroke="#000000" stroke-width="1"/>
</svg>"##;
        let icon = IconDefinition::from_svg("Scaled", svg).unwrap();
        let geometry = icon.groups()[0].geometry().unwrap();

        assert_eq!(icon.viewport().width, 48.0);
        assert!(geometry.subpaths()[0].last_point().approx_eq(Point::new(48.0, 48.0), 1e-4));
        assert!((icon.groups()[0].style.stroke_width - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_and_empty_documents() {
        assert!(matches!(IconDefinition::from_svg("Bad", "<svg"), Err(SvgError::Parse(_))));

        let empty = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"/>"#;
        assert!(matches!(
            IconDefinition::from_svg("Empty", empty),
            Err(SvgError::Unsupported(_))
        ));
    }

    #[test]
    fn test_export_reimports() {
        let icon = IconDefinition::from_svg("Badge", BADGE).unwrap();
        let options = RenderOptions::new().with_size(48.0, 48.0);
        let document = to_svg_document(&icon, &options).unwrap();

        assert!(document.contains(r#"viewBox="0 0 48 48""#));
        assert!(document.contains(r#"id="ring""#));
        let opacity: f32 = document
            .split(r##"fill="#67DFE8" fill-opacity=""##)
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap()
            .parse()
            .unwrap();
        assert!((opacity - 128.0 / 255.0).abs() < 1e-6);

        let reimported = IconDefinition::from_svg("Badge", &document).unwrap();
        let rendered = render(&icon, &options).unwrap();
        assert_eq!(reimported.groups().len(), rendered.paths.len());
        for (group, path) in reimported.groups().iter().zip(&rendered.paths) {
            assert!(group.geometry().unwrap().approx_eq(&path.geometry, 1e-3));
        }
    }

    #[test]
    fn test_export_tint() {
        let icon = IconDefinition::from_svg("Badge", BADGE).unwrap();
        let document = to_svg_document(&icon, &RenderOptions::new().with_tint(Color::WHITE)).unwrap();
        assert!(!document.contains("#000000"));
        assert!(document.contains(r##"stroke="#FFFFFF""##));
    }
}
