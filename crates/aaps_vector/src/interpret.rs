//! Path interpretation
//!
//! Turns an authored [`DrawCommand`] list into absolute geometry using the
//! standard SVG path rules:
//!
//! - moves start a new subpath; relative commands offset from the current point
//! - horizontal/vertical lines keep the other coordinate
//! - reflective curves mirror the previous curve's last control point through
//!   the current point, or use the current point when the previous segment was
//!   not a curve of the same kind
//! - close returns to the subpath start; drawing after a close continues from
//!   that start point in a fresh subpath

use crate::command::DrawCommand;
use crate::error::PathError;
use crate::geometry::{Point, Rect};

/// One absolute segment of a subpath
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    Line(Point),
    Quad {
        control: Point,
        end: Point,
    },
    Cubic {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl Segment {
    pub fn end(&self) -> Point {
        match *self {
            Segment::Line(end) | Segment::Quad { end, .. } | Segment::Cubic { end, .. } => end,
        }
    }

    fn map(&self, f: &impl Fn(Point) -> Point) -> Segment {
        match *self {
            Segment::Line(end) => Segment::Line(f(end)),
            Segment::Quad { control, end } => Segment::Quad {
                control: f(control),
                end: f(end),
            },
            Segment::Cubic {
                control1,
                control2,
                end,
            } => Segment::Cubic {
                control1: f(control1),
                control2: f(control2),
                end: f(end),
            },
        }
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        let points = match *self {
            Segment::Line(end) => [Some(end), None, None],
            Segment::Quad { control, end } => [Some(control), Some(end), None],
            Segment::Cubic {
                control1,
                control2,
                end,
            } => [Some(control1), Some(control2), Some(end)],
        };
        points.into_iter().flatten()
    }

    fn approx_eq(&self, other: &Segment, tolerance: f32) -> bool {
        match (self, other) {
            (Segment::Line(a), Segment::Line(b)) => a.approx_eq(*b, tolerance),
            (
                Segment::Quad { control: c1, end: e1 },
                Segment::Quad { control: c2, end: e2 },
            ) => c1.approx_eq(*c2, tolerance) && e1.approx_eq(*e2, tolerance),
            (
                Segment::Cubic {
                    control1: a1,
                    control2: a2,
                    end: ae,
                },
                Segment::Cubic {
                    control1: b1,
                    control2: b2,
                    end: be,
                },
            ) => {
                a1.approx_eq(*b1, tolerance)
                    && a2.approx_eq(*b2, tolerance)
                    && ae.approx_eq(*be, tolerance)
            }
            _ => false,
        }
    }
}

/// A connected run of segments starting at a move
#[derive(Clone, Debug, PartialEq)]
pub struct Subpath {
    start: Point,
    segments: Vec<Segment>,
    closed: bool,
}

impl Subpath {
    fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
            closed: false,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// End point of the last explicit segment (the start for an empty subpath)
    pub fn last_point(&self) -> Point {
        self.segments.last().map_or(self.start, Segment::end)
    }

    /// Where the pen rests after this subpath; closed subpaths end at their start
    pub fn end(&self) -> Point {
        if self.closed {
            self.start
        } else {
            self.last_point()
        }
    }

    /// Check the structure and coordinates against another subpath
    pub fn approx_eq(&self, other: &Subpath, tolerance: f32) -> bool {
        self.closed == other.closed
            && self.start.approx_eq(other.start, tolerance)
            && self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

/// Absolute geometry of one command list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    subpaths: Vec<Subpath>,
}

impl Geometry {
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.subpaths.iter().map(|s| s.segments.len()).sum()
    }

    /// Every point of the geometry, control points included
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.subpaths.iter().flat_map(|sub| {
            std::iter::once(sub.start).chain(sub.segments.iter().flat_map(Segment::points))
        })
    }

    /// Bounding box of all points including control points
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.points())
    }

    /// Apply `f` to every point
    pub fn transform(&self, f: impl Fn(Point) -> Point) -> Geometry {
        let subpaths = self
            .subpaths
            .iter()
            .map(|sub| Subpath {
                start: f(sub.start),
                segments: sub.segments.iter().map(|s| s.map(&f)).collect(),
                closed: sub.closed,
            })
            .collect();
        Geometry { subpaths }
    }

    /// Scale about the origin, then translate
    pub fn scale_and_translate(&self, sx: f32, sy: f32, tx: f32, ty: f32) -> Geometry {
        if sx == 1.0 && sy == 1.0 && tx == 0.0 && ty == 0.0 {
            return self.clone();
        }
        self.transform(|p| Point::new(p.x * sx + tx, p.y * sy + ty))
    }

    /// Same subpath structure with every coordinate within `tolerance`
    pub fn approx_eq(&self, other: &Geometry, tolerance: f32) -> bool {
        self.subpaths.len() == other.subpaths.len()
            && self
                .subpaths
                .iter()
                .zip(&other.subpaths)
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

/// Pen state while walking the command list
#[derive(Default)]
struct Pen {
    current: Option<Point>,
    start: Point,
    last_cubic_control: Option<Point>,
    last_quad_control: Option<Point>,
}

/// Interpret a command list into absolute geometry
///
/// Fails when a drawing command (or close) appears before the first move.
pub fn interpret(commands: &[DrawCommand]) -> Result<Geometry, PathError> {
    let mut pen = Pen::default();
    let mut subpaths: Vec<Subpath> = Vec::new();

    for (index, command) in commands.iter().enumerate() {
        let relative = command.is_relative();
        let current = match pen.current {
            Some(current) => current,
            None if command.is_move() => Point::ZERO,
            None => {
                return Err(PathError::MissingMoveTo {
                    index,
                    command: command.name(),
                })
            }
        };
        let resolve = move |p: Point| if relative { current + p } else { p };

        let (segment, cubic_control, quad_control) = match *command {
            DrawCommand::MoveTo(p) | DrawCommand::MoveToRelative(p) => {
                let point = resolve(p);
                subpaths.push(Subpath::new(point));
                pen.current = Some(point);
                pen.start = point;
                pen.last_cubic_control = None;
                pen.last_quad_control = None;
                continue;
            }
            DrawCommand::Close => {
                if let Some(sub) = subpaths.last_mut() {
                    sub.closed = true;
                }
                pen.current = Some(pen.start);
                pen.last_cubic_control = None;
                pen.last_quad_control = None;
                continue;
            }
            DrawCommand::LineTo(p) | DrawCommand::LineToRelative(p) => {
                (Segment::Line(resolve(p)), None, None)
            }
            DrawCommand::HorizontalLineTo(x) => (Segment::Line(Point::new(x, current.y)), None, None),
            DrawCommand::HorizontalLineToRelative(dx) => {
                (Segment::Line(Point::new(current.x + dx, current.y)), None, None)
            }
            DrawCommand::VerticalLineTo(y) => (Segment::Line(Point::new(current.x, y)), None, None),
            DrawCommand::VerticalLineToRelative(dy) => {
                (Segment::Line(Point::new(current.x, current.y + dy)), None, None)
            }
            DrawCommand::CurveTo {
                control1,
                control2,
                end,
            }
            | DrawCommand::CurveToRelative {
                control1,
                control2,
                end,
            } => {
                let control2 = resolve(control2);
                let segment = Segment::Cubic {
                    control1: resolve(control1),
                    control2,
                    end: resolve(end),
                };
                (segment, Some(control2), None)
            }
            DrawCommand::ReflectiveCurveTo { control2, end }
            | DrawCommand::ReflectiveCurveToRelative { control2, end } => {
                let control1 = pen
                    .last_cubic_control
                    .map_or(current, |c| current.reflect(c));
                let control2 = resolve(control2);
                let segment = Segment::Cubic {
                    control1,
                    control2,
                    end: resolve(end),
                };
                (segment, Some(control2), None)
            }
            DrawCommand::QuadTo { control, end } | DrawCommand::QuadToRelative { control, end } => {
                let control = resolve(control);
                let segment = Segment::Quad {
                    control,
                    end: resolve(end),
                };
                (segment, None, Some(control))
            }
            DrawCommand::ReflectiveQuadTo(end) | DrawCommand::ReflectiveQuadToRelative(end) => {
                let control = pen
                    .last_quad_control
                    .map_or(current, |c| current.reflect(c));
                let segment = Segment::Quad {
                    control,
                    end: resolve(end),
                };
                (segment, None, Some(control))
            }
        };

        // Drawing after a close continues from the closed subpath's start
        if subpaths.last().map_or(true, Subpath::is_closed) {
            subpaths.push(Subpath::new(current));
        }
        if let Some(sub) = subpaths.last_mut() {
            sub.segments.push(segment);
        }

        pen.current = Some(segment.end());
        pen.last_cubic_control = cubic_control;
        pen.last_quad_control = quad_control;
    }

    Ok(Geometry { subpaths })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::PathBuilder;

    #[test]
    fn test_reflective_curve_mirrors_previous_control() {
        let commands = PathBuilder::new()
            .move_to(0.0, 0.0)
            .curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 5.0)
            .reflective_curve_to(8.0, 9.0, 10.0, 10.0)
            .build();

        let geometry = interpret(&commands).unwrap();
        let segments = geometry.subpaths()[0].segments();

        // 2 * (5, 5) - (3, 4)
        assert_eq!(
            segments[1],
            Segment::Cubic {
                control1: Point::new(7.0, 6.0),
                control2: Point::new(8.0, 9.0),
                end: Point::new(10.0, 10.0),
            }
        );
    }

    #[test]
    fn test_reflective_curve_after_line_uses_current_point() {
        let commands = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(4.0, 0.0)
            .reflective_curve_to_relative(1.0, 1.0, 2.0, 2.0)
            .build();

        let geometry = interpret(&commands).unwrap();
        assert_eq!(
            geometry.subpaths()[0].segments()[1],
            Segment::Cubic {
                control1: Point::new(4.0, 0.0),
                control2: Point::new(5.0, 1.0),
                end: Point::new(6.0, 2.0),
            }
        );
    }

    #[test]
    fn test_relative_reflective_curve() {
        let commands = PathBuilder::new()
            .move_to(10.0, 10.0)
            .curve_to_relative(0.0, -2.0, 2.0, -2.0, 2.0, 0.0)
            .reflective_curve_to_relative(2.0, 2.0, 2.0, 0.0)
            .build();

        let geometry = interpret(&commands).unwrap();
        assert_eq!(
            geometry.subpaths()[0].segments()[1],
            Segment::Cubic {
                control1: Point::new(12.0, 12.0),
                control2: Point::new(14.0, 12.0),
                end: Point::new(14.0, 10.0),
            }
        );
    }

    #[test]
    fn test_reflective_quad() {
        let commands = PathBuilder::new()
            .move_to(0.0, 0.0)
            .quad_to(1.0, 1.0, 2.0, 0.0)
            .reflective_quad_to(4.0, 0.0)
            .reflective_quad_to_relative(2.0, 0.0)
            .build();

        let segments = interpret(&commands).unwrap().subpaths()[0].segments().to_vec();
        assert_eq!(
            segments[1],
            Segment::Quad {
                control: Point::new(3.0, -1.0),
                end: Point::new(4.0, 0.0),
            }
        );
        assert_eq!(
            segments[2],
            Segment::Quad {
                control: Point::new(5.0, 1.0),
                end: Point::new(6.0, 0.0),
            }
        );
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let commands = PathBuilder::new()
            .move_to(1.0, 2.0)
            .horizontal_line_to(5.0)
            .vertical_line_to_relative(3.0)
            .horizontal_line_to_relative(-4.0)
            .vertical_line_to(2.0)
            .build();

        let ends: Vec<_> = interpret(&commands).unwrap().subpaths()[0]
            .segments()
            .iter()
            .map(Segment::end)
            .collect();
        assert_eq!(
            ends,
            [
                Point::new(5.0, 2.0),
                Point::new(5.0, 5.0),
                Point::new(1.0, 5.0),
                Point::new(1.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_close_returns_to_start() {
        let commands = PathBuilder::new()
            .move_to(1.0, 1.0)
            .line_to(4.0, 1.0)
            .line_to(4.0, 4.0)
            .close()
            .move_to_relative(10.0, 0.0)
            .line_to_relative(1.0, 1.0)
            .build();

        let geometry = interpret(&commands).unwrap();
        let first = &geometry.subpaths()[0];
        let second = &geometry.subpaths()[1];

        assert!(first.is_closed());
        assert_eq!(first.end(), Point::new(1.0, 1.0));
        assert_eq!(first.last_point(), Point::new(4.0, 4.0));
        // relative move resolves against the closed subpath's start
        assert_eq!(second.start(), Point::new(11.0, 1.0));
        assert!(!second.is_closed());
        assert_eq!(second.end(), Point::new(12.0, 2.0));
    }

    #[test]
    fn test_drawing_after_close_opens_new_subpath() {
        let commands = PathBuilder::new()
            .move_to(2.0, 2.0)
            .line_to(6.0, 2.0)
            .close()
            .line_to_relative(0.0, 4.0)
            .close()
            .close()
            .build();

        let geometry = interpret(&commands).unwrap();
        assert_eq!(geometry.subpaths().len(), 2);
        assert_eq!(geometry.subpaths()[1].start(), Point::new(2.0, 2.0));
        assert_eq!(geometry.subpaths()[1].last_point(), Point::new(2.0, 6.0));
        assert!(geometry.subpaths()[1].is_closed());
    }

    #[test]
    fn test_leading_relative_move_is_absolute() {
        let commands = PathBuilder::new().move_to_relative(3.0, 4.0).line_to_relative(1.0, 0.0).build();

        let geometry = interpret(&commands).unwrap();
        assert_eq!(geometry.subpaths()[0].start(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_missing_move_to() {
        let commands = PathBuilder::new().line_to(1.0, 1.0).move_to(0.0, 0.0).build();
        assert_eq!(
            interpret(&commands),
            Err(PathError::MissingMoveTo {
                index: 0,
                command: "line_to",
            })
        );

        let commands = PathBuilder::new().close().build();
        assert!(matches!(
            interpret(&commands),
            Err(PathError::MissingMoveTo { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_and_move_only() {
        assert!(interpret(&[]).unwrap().is_empty());

        let geometry = interpret(&PathBuilder::new().move_to(1.0, 1.0).build()).unwrap();
        assert_eq!(geometry.subpaths().len(), 1);
        assert_eq!(geometry.segment_count(), 0);
    }

    #[test]
    fn test_interpretation_is_pure() {
        let commands = PathBuilder::new()
            .move_to(19.004, 12.345)
            .curve_to_relative(1.388, 0.0, 2.518, -1.129, 2.518, -2.518)
            .curve_to_relative(0.0, -1.389, -1.13, -2.518, -2.518, -2.518)
            .reflective_curve_to_relative(-2.518, 1.13, -2.518, 2.518)
            .curve_to(16.486, 11.216, 17.616, 12.345, 19.004, 12.345)
            .close()
            .build();

        let a = interpret(&commands).unwrap();
        let b = interpret(&commands).unwrap();
        assert_eq!(a, b);

        let bits = |g: &Geometry| g.points().map(|p| (p.x.to_bits(), p.y.to_bits())).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_bounds_and_scale() {
        let commands = PathBuilder::new()
            .move_to(2.0, 2.0)
            .curve_to(2.0, 0.0, 6.0, 0.0, 6.0, 2.0)
            .build();
        let geometry = interpret(&commands).unwrap();

        assert_eq!(geometry.bounds(), Some(Rect::new(2.0, 0.0, 4.0, 2.0)));

        let scaled = geometry.scale_and_translate(2.0, 2.0, 1.0, 0.0);
        assert_eq!(scaled.bounds(), Some(Rect::new(5.0, 0.0, 8.0, 4.0)));
        assert!(!scaled.approx_eq(&geometry, 1e-3));
        assert!(geometry.scale_and_translate(1.0, 1.0, 0.0, 0.0).approx_eq(&geometry, 0.0));
    }
}
