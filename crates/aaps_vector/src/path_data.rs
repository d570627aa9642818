//! SVG path data (`d` attribute) conversion
//!
//! Parsing goes through `svgtypes`, so every path-data quirk SVG allows
//! (implicit line-tos, packed numbers, exponent notation) is accepted.

use std::fmt::Write;

use svgtypes::{PathParser, PathSegment};

use crate::command::DrawCommand;
use crate::error::PathDataError;
use crate::geometry::Point;
use crate::interpret::{Geometry, Segment};

/// Serialize interpreted geometry as absolute `M`/`L`/`Q`/`C`/`Z` path data
///
/// Numbers use the shortest form that parses back to the same `f32`.
pub fn to_path_data(geometry: &Geometry) -> String {
    let mut out = String::new();
    for subpath in geometry.subpaths() {
        push_op(&mut out, 'M', &[subpath.start()]);
        for segment in subpath.segments() {
            match *segment {
                Segment::Line(end) => push_op(&mut out, 'L', &[end]),
                Segment::Quad { control, end } => push_op(&mut out, 'Q', &[control, end]),
                Segment::Cubic {
                    control1,
                    control2,
                    end,
                } => push_op(&mut out, 'C', &[control1, control2, end]),
            }
        }
        if subpath.is_closed() {
            push_op(&mut out, 'Z', &[]);
        }
    }
    out
}

/// Serialize commands as authored, keeping relative and reflective forms
pub fn commands_to_path_data(commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        match *command {
            DrawCommand::MoveTo(p) => push_op(&mut out, 'M', &[p]),
            DrawCommand::MoveToRelative(p) => push_op(&mut out, 'm', &[p]),
            DrawCommand::LineTo(p) => push_op(&mut out, 'L', &[p]),
            DrawCommand::LineToRelative(p) => push_op(&mut out, 'l', &[p]),
            DrawCommand::HorizontalLineTo(x) => push_scalar(&mut out, 'H', x),
            DrawCommand::HorizontalLineToRelative(dx) => push_scalar(&mut out, 'h', dx),
            DrawCommand::VerticalLineTo(y) => push_scalar(&mut out, 'V', y),
            DrawCommand::VerticalLineToRelative(dy) => push_scalar(&mut out, 'v', dy),
            DrawCommand::CurveTo {
                control1,
                control2,
                end,
            } => push_op(&mut out, 'C', &[control1, control2, end]),
            DrawCommand::CurveToRelative {
                control1,
                control2,
                end,
            } => push_op(&mut out, 'c', &[control1, control2, end]),
            DrawCommand::ReflectiveCurveTo { control2, end } => {
                push_op(&mut out, 'S', &[control2, end])
            }
            DrawCommand::ReflectiveCurveToRelative { control2, end } => {
                push_op(&mut out, 's', &[control2, end])
            }
            DrawCommand::QuadTo { control, end } => push_op(&mut out, 'Q', &[control, end]),
            DrawCommand::QuadToRelative { control, end } => push_op(&mut out, 'q', &[control, end]),
            DrawCommand::ReflectiveQuadTo(end) => push_op(&mut out, 'T', &[end]),
            DrawCommand::ReflectiveQuadToRelative(end) => push_op(&mut out, 't', &[end]),
            DrawCommand::Close => push_op(&mut out, 'Z', &[]),
        }
    }
    out
}

fn push_op(out: &mut String, op: char, points: &[Point]) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push(op);
    for p in points {
        // Writing to a String cannot fail
        let _ = write!(out, "{},{}", p.x, p.y);
        out.push(' ');
    }
    if !points.is_empty() {
        out.pop();
    }
}

fn push_scalar(out: &mut String, op: char, value: f32) {
    if !out.is_empty() {
        out.push(' ');
    }
    let _ = write!(out, "{op}{value}");
}

/// Parse SVG path data into draw commands
///
/// Elliptical arcs have no command equivalent and are rejected.
pub fn parse_path_data(data: &str) -> Result<Vec<DrawCommand>, PathDataError> {
    let pt = |x: f64, y: f64| Point::new(x as f32, y as f32);

    let mut commands = Vec::new();
    for segment in PathParser::from(data) {
        let segment = segment.map_err(|e| PathDataError::Syntax(e.to_string()))?;
        let command = match segment {
            PathSegment::MoveTo { abs, x, y } => {
                if abs {
                    DrawCommand::MoveTo(pt(x, y))
                } else {
                    DrawCommand::MoveToRelative(pt(x, y))
                }
            }
            PathSegment::LineTo { abs, x, y } => {
                if abs {
                    DrawCommand::LineTo(pt(x, y))
                } else {
                    DrawCommand::LineToRelative(pt(x, y))
                }
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                if abs {
                    DrawCommand::HorizontalLineTo(x as f32)
                } else {
                    DrawCommand::HorizontalLineToRelative(x as f32)
                }
            }
            PathSegment::VerticalLineTo { abs, y } => {
                if abs {
                    DrawCommand::VerticalLineTo(y as f32)
                } else {
                    DrawCommand::VerticalLineToRelative(y as f32)
                }
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let (control1, control2, end) = (pt(x1, y1), pt(x2, y2), pt(x, y));
                if abs {
                    DrawCommand::CurveTo {
                        control1,
                        control2,
                        end,
                    }
                } else {
                    DrawCommand::CurveToRelative {
                        control1,
                        control2,
                        end,
                    }
                }
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let (control2, end) = (pt(x2, y2), pt(x, y));
                if abs {
                    DrawCommand::ReflectiveCurveTo { control2, end }
                } else {
                    DrawCommand::ReflectiveCurveToRelative { control2, end }
                }
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let (control, end) = (pt(x1, y1), pt(x, y));
                if abs {
                    DrawCommand::QuadTo { control, end }
                } else {
                    DrawCommand::QuadToRelative { control, end }
                }
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                if abs {
                    DrawCommand::ReflectiveQuadTo(pt(x, y))
                } else {
                    DrawCommand::ReflectiveQuadToRelative(pt(x, y))
                }
            }
            PathSegment::EllipticalArc { .. } => {
                return Err(PathDataError::Unsupported("elliptical arc"));
            }
            PathSegment::ClosePath { .. } => DrawCommand::Close,
        };
        commands.push(command);
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::PathBuilder;
    use crate::interpret::interpret;

    fn sample() -> Vec<DrawCommand> {
        PathBuilder::new()
            .move_to(12.107, 3.666)
            .curve_to_relative(-4.603, 0.0, -8.335, 3.732, -8.335, 8.335)
            .reflective_curve_to_relative(3.732, 8.335, 8.335, 8.335)
            .horizontal_line_to_relative(0.5)
            .vertical_line_to(2.0)
            .quad_to(1.0, 1.0, 2.0, 0.25)
            .reflective_quad_to(3.0, 3.0)
            .close()
            .line_to_relative(1.0, -1.0)
            .close()
            .build()
    }

    #[test]
    fn test_parse_keeps_command_forms() {
        let commands = parse_path_data("M1 2 l3 4 h5 V6 c1 1 2 2 3 3 S7 8 9 10 q1 0 2 0 t1 1 z").unwrap();
        assert_eq!(
            commands,
            PathBuilder::new()
                .move_to(1.0, 2.0)
                .line_to_relative(3.0, 4.0)
                .horizontal_line_to_relative(5.0)
                .vertical_line_to(6.0)
                .curve_to_relative(1.0, 1.0, 2.0, 2.0, 3.0, 3.0)
                .reflective_curve_to(7.0, 8.0, 9.0, 10.0)
                .quad_to_relative(1.0, 0.0, 2.0, 0.0)
                .reflective_quad_to_relative(1.0, 1.0)
                .close()
                .build()
        );
    }

    #[test]
    fn test_implicit_line_to_after_move() {
        let commands = parse_path_data("M0 0 10 0 10 10").unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2], DrawCommand::LineTo(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_arcs_are_unsupported() {
        assert_eq!(
            parse_path_data("M0 0 A5 5 0 0 1 10 10"),
            Err(PathDataError::Unsupported("elliptical arc"))
        );
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(parse_path_data("M0 0 L"), Err(PathDataError::Syntax(_))));
    }

    #[test]
    fn test_authored_round_trip() {
        let commands = sample();
        let data = commands_to_path_data(&commands);
        assert!(data.starts_with("M12.107,3.666 c-4.603,0 "));
        assert_eq!(parse_path_data(&data).unwrap(), commands);
    }

    #[test]
    fn test_geometry_round_trip() {
        let geometry = interpret(&sample()).unwrap();
        let data = to_path_data(&geometry);
        let reparsed = interpret(&parse_path_data(&data).unwrap()).unwrap();

        assert_eq!(reparsed.subpaths().len(), 2);
        assert!(reparsed.approx_eq(&geometry, 1e-6));
    }

    #[test]
    fn test_to_path_data_format() {
        let commands = PathBuilder::new()
            .move_to(1.0, 2.5)
            .line_to(3.0, 4.0)
            .close()
            .build();
        let data = to_path_data(&interpret(&commands).unwrap());
        assert_eq!(data, "M1,2.5 L3,4 Z");
    }
}
