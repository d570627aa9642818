//! Path drawing commands and the builder used to author them
//!
//! Commands keep the exact form they were authored in (absolute or relative,
//! explicit or reflective control points). Turning them into absolute
//! geometry is the job of [`crate::interpret`].

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One instruction of the SVG-style path mini-language
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawCommand {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Start a new subpath offset from the current point
    MoveToRelative(Point),
    /// Straight line to a point
    LineTo(Point),
    LineToRelative(Point),
    /// Horizontal line to an absolute x
    HorizontalLineTo(f32),
    HorizontalLineToRelative(f32),
    /// Vertical line to an absolute y
    VerticalLineTo(f32),
    VerticalLineToRelative(f32),
    /// Cubic Bézier curve
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    CurveToRelative {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Cubic Bézier whose first control point mirrors the previous curve's last one
    ReflectiveCurveTo { control2: Point, end: Point },
    ReflectiveCurveToRelative { control2: Point, end: Point },
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    QuadToRelative { control: Point, end: Point },
    /// Quadratic Bézier whose control point mirrors the previous quadratic's
    ReflectiveQuadTo(Point),
    ReflectiveQuadToRelative(Point),
    /// Close the current subpath
    Close,
}

impl DrawCommand {
    /// Stable snake_case name, used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::MoveTo(_) => "move_to",
            DrawCommand::MoveToRelative(_) => "move_to_relative",
            DrawCommand::LineTo(_) => "line_to",
            DrawCommand::LineToRelative(_) => "line_to_relative",
            DrawCommand::HorizontalLineTo(_) => "horizontal_line_to",
            DrawCommand::HorizontalLineToRelative(_) => "horizontal_line_to_relative",
            DrawCommand::VerticalLineTo(_) => "vertical_line_to",
            DrawCommand::VerticalLineToRelative(_) => "vertical_line_to_relative",
            DrawCommand::CurveTo { .. } => "curve_to",
            DrawCommand::CurveToRelative { .. } => "curve_to_relative",
            DrawCommand::ReflectiveCurveTo { .. } => "reflective_curve_to",
            DrawCommand::ReflectiveCurveToRelative { .. } => "reflective_curve_to_relative",
            DrawCommand::QuadTo { .. } => "quad_to",
            DrawCommand::QuadToRelative { .. } => "quad_to_relative",
            DrawCommand::ReflectiveQuadTo(_) => "reflective_quad_to",
            DrawCommand::ReflectiveQuadToRelative(_) => "reflective_quad_to_relative",
            DrawCommand::Close => "close",
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, DrawCommand::MoveTo(_) | DrawCommand::MoveToRelative(_))
    }

    /// Whether coordinates are offsets from the current point
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            DrawCommand::MoveToRelative(_)
                | DrawCommand::LineToRelative(_)
                | DrawCommand::HorizontalLineToRelative(_)
                | DrawCommand::VerticalLineToRelative(_)
                | DrawCommand::CurveToRelative { .. }
                | DrawCommand::ReflectiveCurveToRelative { .. }
                | DrawCommand::QuadToRelative { .. }
                | DrawCommand::ReflectiveQuadToRelative(_)
        )
    }
}

/// Builder for a command list
///
/// Methods consume and return the builder so commands chain in authoring
/// order, mirroring the order they appear in the source drawable.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    commands: Vec<DrawCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn move_to(self, x: f32, y: f32) -> Self {
        self.push(DrawCommand::MoveTo(Point::new(x, y)))
    }

    pub fn move_to_relative(self, dx: f32, dy: f32) -> Self {
        self.push(DrawCommand::MoveToRelative(Point::new(dx, dy)))
    }

    pub fn line_to(self, x: f32, y: f32) -> Self {
        self.push(DrawCommand::LineTo(Point::new(x, y)))
    }

    pub fn line_to_relative(self, dx: f32, dy: f32) -> Self {
        self.push(DrawCommand::LineToRelative(Point::new(dx, dy)))
    }

    pub fn horizontal_line_to(self, x: f32) -> Self {
        self.push(DrawCommand::HorizontalLineTo(x))
    }

    pub fn horizontal_line_to_relative(self, dx: f32) -> Self {
        self.push(DrawCommand::HorizontalLineToRelative(dx))
    }

    pub fn vertical_line_to(self, y: f32) -> Self {
        self.push(DrawCommand::VerticalLineTo(y))
    }

    pub fn vertical_line_to_relative(self, dy: f32) -> Self {
        self.push(DrawCommand::VerticalLineToRelative(dy))
    }

    /// Cubic Bézier curve
    pub fn curve_to(self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> Self {
        self.push(DrawCommand::CurveTo {
            control1: Point::new(x1, y1),
            control2: Point::new(x2, y2),
            end: Point::new(x3, y3),
        })
    }

    pub fn curve_to_relative(
        self,
        dx1: f32,
        dy1: f32,
        dx2: f32,
        dy2: f32,
        dx3: f32,
        dy3: f32,
    ) -> Self {
        self.push(DrawCommand::CurveToRelative {
            control1: Point::new(dx1, dy1),
            control2: Point::new(dx2, dy2),
            end: Point::new(dx3, dy3),
        })
    }

    /// Smooth cubic Bézier (SVG `S`)
    pub fn reflective_curve_to(self, x2: f32, y2: f32, x3: f32, y3: f32) -> Self {
        self.push(DrawCommand::ReflectiveCurveTo {
            control2: Point::new(x2, y2),
            end: Point::new(x3, y3),
        })
    }

    pub fn reflective_curve_to_relative(self, dx2: f32, dy2: f32, dx3: f32, dy3: f32) -> Self {
        self.push(DrawCommand::ReflectiveCurveToRelative {
            control2: Point::new(dx2, dy2),
            end: Point::new(dx3, dy3),
        })
    }

    /// Quadratic Bézier curve
    pub fn quad_to(self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.push(DrawCommand::QuadTo {
            control: Point::new(x1, y1),
            end: Point::new(x2, y2),
        })
    }

    pub fn quad_to_relative(self, dx1: f32, dy1: f32, dx2: f32, dy2: f32) -> Self {
        self.push(DrawCommand::QuadToRelative {
            control: Point::new(dx1, dy1),
            end: Point::new(dx2, dy2),
        })
    }

    /// Smooth quadratic Bézier (SVG `T`)
    pub fn reflective_quad_to(self, x: f32, y: f32) -> Self {
        self.push(DrawCommand::ReflectiveQuadTo(Point::new(x, y)))
    }

    pub fn reflective_quad_to_relative(self, dx: f32, dy: f32) -> Self {
        self.push(DrawCommand::ReflectiveQuadToRelative(Point::new(dx, dy)))
    }

    pub fn close(self) -> Self {
        self.push(DrawCommand::Close)
    }

    /// Append an already built command
    pub fn push(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn build(self) -> Vec<DrawCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_authoring_order() {
        let commands = PathBuilder::new()
            .move_to(1.0, 2.0)
            .line_to_relative(3.0, 0.0)
            .vertical_line_to(8.0)
            .reflective_curve_to(1.0, 1.0, 2.0, 2.0)
            .close()
            .build();

        let names: Vec<_> = commands.iter().map(DrawCommand::name).collect();
        assert_eq!(
            names,
            ["move_to", "line_to_relative", "vertical_line_to", "reflective_curve_to", "close"]
        );
        assert!(commands[0].is_move());
        assert!(commands[1].is_relative());
        assert!(!commands[2].is_relative());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&[
            DrawCommand::MoveTo(Point::new(1.0, 2.0)),
            DrawCommand::HorizontalLineToRelative(-0.5),
            DrawCommand::Close,
        ])
        .unwrap();

        assert_eq!(
            json,
            r#"[{"move_to":{"x":1.0,"y":2.0}},{"horizontal_line_to_relative":-0.5},"close"]"#
        );
    }
}
