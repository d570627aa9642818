//! Resolving an icon into display-space paths
//!
//! This is the render-time layer: the icon data is never modified. Scaling
//! maps the viewport onto the target size, group alphas are folded into
//! their colors, and an optional tint recolors every painted path while
//! keeping its coverage (alpha).

use crate::color::Color;
use crate::error::PathError;
use crate::geometry::Size;
use crate::icon::{IconDefinition, PathFillType, PathGroup, StrokeCap, StrokeJoin};
use crate::interpret::Geometry;

/// Options for [`render`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Target size; the icon's display size when `None`
    pub size: Option<Size>,
    /// Replace every paint's RGB with this color; authored colors when `None`
    pub tint: Option<Color>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }
}

/// Resolved stroke paint and geometry parameters
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedStroke {
    pub color: Color,
    /// Width in target units
    pub width: f32,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub miter_limit: f32,
}

/// One group, ready to draw
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedPath {
    pub name: Option<String>,
    pub geometry: Geometry,
    pub fill: Option<Color>,
    pub fill_type: PathFillType,
    pub stroke: Option<RenderedStroke>,
}

/// An icon resolved into target-space paths, in paint order
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedIcon {
    pub width: f32,
    pub height: f32,
    pub paths: Vec<RenderedPath>,
}

/// Resolve `icon` for drawing
///
/// Groups that paint nothing (no fill and no visible stroke) are dropped.
pub fn render(icon: &IconDefinition, options: &RenderOptions) -> Result<RenderedIcon, PathError> {
    let target = options.size.unwrap_or_else(|| icon.display_size());
    let viewport = icon.viewport();
    let sx = target.width / viewport.width;
    let sy = target.height / viewport.height;
    // Non-uniform scaling has no single stroke scale; use the geometric mean
    let stroke_scale = (sx * sy).abs().sqrt();

    let mut paths = Vec::with_capacity(icon.groups().len());
    for group in icon.groups() {
        let fill = resolve_paint(group.style.fill, group.style.fill_alpha, options.tint);
        let stroke = resolve_stroke(group, stroke_scale, options.tint);
        if fill.is_none() && stroke.is_none() {
            continue;
        }

        paths.push(RenderedPath {
            name: group.name().map(str::to_owned),
            geometry: group.geometry()?.scale_and_translate(sx, sy, 0.0, 0.0),
            fill,
            fill_type: group.style.fill_type,
            stroke,
        });
    }

    Ok(RenderedIcon {
        width: target.width,
        height: target.height,
        paths,
    })
}

fn resolve_paint(color: Option<Color>, alpha: f32, tint: Option<Color>) -> Option<Color> {
    let color = color?.multiply_alpha(alpha);
    let color = match tint {
        Some(tint) => color.tinted(tint),
        None => color,
    };
    (!color.is_transparent()).then_some(color)
}

fn resolve_stroke(group: &PathGroup, scale: f32, tint: Option<Color>) -> Option<RenderedStroke> {
    let style = &group.style;
    if style.stroke_width <= 0.0 {
        return None;
    }
    let color = resolve_paint(style.stroke, style.stroke_alpha, tint)?;

    Some(RenderedStroke {
        color,
        width: style.stroke_width * scale,
        cap: style.stroke_cap,
        join: style.stroke_join,
        miter_limit: style.stroke_miter_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};
    use crate::icon::PathStyle;

    fn zone_icon() -> IconDefinition {
        IconDefinition::builder("Zones", 48.0, 48.0, 24.0, 24.0)
            .path(
                PathStyle::new()
                    .named("background")
                    .fill(Color::from_argb(0xFFEFC3AD))
                    .stroke(Color::BLACK, 0.5),
                |p| p.move_to(0.0, 0.0).horizontal_line_to(24.0).vertical_line_to(24.0).close(),
            )
            .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)).fill_alpha(0.5), |p| {
                p.move_to(4.0, 4.0).line_to(8.0, 4.0).line_to(8.0, 8.0).close()
            })
            .path(PathStyle::new().stroke(Color::BLACK, 0.0), |p| p.move_to(1.0, 1.0).line_to(2.0, 2.0))
            .build()
    }

    #[test]
    fn test_render_scales_to_display_size() {
        let rendered = render(&zone_icon(), &RenderOptions::new()).unwrap();

        assert_eq!((rendered.width, rendered.height), (48.0, 48.0));
        // zero-width stroke with no fill paints nothing
        assert_eq!(rendered.paths.len(), 2);
        assert_eq!(rendered.paths[0].geometry.bounds(), Some(Rect::new(0.0, 0.0, 48.0, 48.0)));
        assert_eq!(rendered.paths[0].name.as_deref(), Some("background"));

        let stroke = rendered.paths[0].stroke.as_ref().unwrap();
        assert_eq!(stroke.width, 1.0);
        assert_eq!(stroke.color, Color::BLACK);
    }

    #[test]
    fn test_alpha_is_folded_into_fill() {
        let rendered = render(&zone_icon(), &RenderOptions::new()).unwrap();
        assert_eq!(rendered.paths[1].fill, Some(Color::rgba(0x67, 0xDF, 0xE8, 128)));
        assert!(rendered.paths[1].stroke.is_none());
    }

    #[test]
    fn test_tint_replaces_rgb_and_keeps_alpha() {
        let options = RenderOptions::new().with_tint(Color::WHITE).with_size(24.0, 24.0);
        let rendered = render(&zone_icon(), &options).unwrap();

        assert_eq!(rendered.paths[0].fill, Some(Color::WHITE));
        assert_eq!(rendered.paths[0].stroke.as_ref().unwrap().color, Color::WHITE);
        assert_eq!(rendered.paths[1].fill, Some(Color::rgba(0xFF, 0xFF, 0xFF, 128)));
        assert_eq!(
            rendered.paths[1].geometry.subpaths()[0].start(),
            Point::new(4.0, 4.0)
        );
    }

    #[test]
    fn test_transparent_tint_hides_everything() {
        let options = RenderOptions::new().with_tint(Color::TRANSPARENT);
        let rendered = render(&zone_icon(), &options).unwrap();
        assert!(rendered.paths.is_empty());
    }

    #[test]
    fn test_render_leaves_icon_untouched() {
        let icon = zone_icon();
        let before = icon.clone();
        let _ = render(&icon, &RenderOptions::new().with_tint(Color::WHITE)).unwrap();
        assert_eq!(icon, before);
    }
}
