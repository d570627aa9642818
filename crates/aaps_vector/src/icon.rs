//! Icon definitions: size, viewport and styled path groups

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::command::{DrawCommand, PathBuilder};
use crate::error::PathError;
use crate::geometry::{Rect, Size};
use crate::interpret::{interpret, Geometry};

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

impl StrokeCap {
    /// SVG `stroke-linecap` keyword
    pub fn as_svg(self) -> &'static str {
        match self {
            StrokeCap::Butt => "butt",
            StrokeCap::Round => "round",
            StrokeCap::Square => "square",
        }
    }
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

impl StrokeJoin {
    /// SVG `stroke-linejoin` keyword
    pub fn as_svg(self) -> &'static str {
        match self {
            StrokeJoin::Miter => "miter",
            StrokeJoin::Round => "round",
            StrokeJoin::Bevel => "bevel",
        }
    }
}

/// Fill rule used to decide which regions of a path are inside
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathFillType {
    #[default]
    NonZero,
    EvenOdd,
}

impl PathFillType {
    /// SVG `fill-rule` keyword
    pub fn as_svg(self) -> &'static str {
        match self {
            PathFillType::NonZero => "nonzero",
            PathFillType::EvenOdd => "evenodd",
        }
    }
}

/// Fill and stroke styling of a path group
///
/// Defaults follow the vector drawable conventions: no fill, no stroke,
/// opaque alphas, hairline width, butt caps, miter joins with limit 4.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    /// Semantic tag, e.g. a body zone such as `BACK_LEFT_UPPER_ARM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    pub fill_alpha: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    pub stroke_alpha: f32,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub stroke_miter_limit: f32,
    pub fill_type: PathFillType,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStyle {
    pub const fn new() -> Self {
        Self {
            name: None,
            fill: None,
            fill_alpha: 1.0,
            stroke: None,
            stroke_alpha: 1.0,
            stroke_width: 0.0,
            stroke_cap: StrokeCap::Butt,
            stroke_join: StrokeJoin::Miter,
            stroke_miter_limit: 4.0,
            fill_type: PathFillType::NonZero,
        }
    }

    /// Tag the group so host code can find it by name
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha;
        self
    }

    /// Outline with a color and line width
    pub fn stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn stroke_alpha(mut self, alpha: f32) -> Self {
        self.stroke_alpha = alpha;
        self
    }

    pub fn stroke_cap(mut self, cap: StrokeCap) -> Self {
        self.stroke_cap = cap;
        self
    }

    pub fn stroke_join(mut self, join: StrokeJoin) -> Self {
        self.stroke_join = join;
        self
    }

    pub fn stroke_miter(mut self, limit: f32) -> Self {
        self.stroke_miter_limit = limit;
        self
    }

    pub fn fill_type(mut self, fill_type: PathFillType) -> Self {
        self.fill_type = fill_type;
        self
    }

    /// Whether anything is painted at all
    pub fn is_visible(&self) -> bool {
        let fill = self.fill.is_some_and(|c| !c.is_transparent()) && self.fill_alpha > 0.0;
        let stroke = self.stroke.is_some_and(|c| !c.is_transparent())
            && self.stroke_alpha > 0.0
            && self.stroke_width > 0.0;
        fill || stroke
    }
}

/// One styled sub-shape of an icon
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathGroup {
    #[serde(flatten)]
    pub style: PathStyle,
    pub commands: Vec<DrawCommand>,
}

impl PathGroup {
    pub fn new(style: PathStyle, commands: Vec<DrawCommand>) -> Self {
        Self { style, commands }
    }

    /// Semantic tag, if any
    pub fn name(&self) -> Option<&str> {
        self.style.name.as_deref()
    }

    /// Interpret the commands into absolute geometry
    pub fn geometry(&self) -> Result<Geometry, PathError> {
        interpret(&self.commands)
    }
}

/// An immutable named vector graphic
///
/// Groups are kept in paint order: later groups draw over earlier ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconDefinition {
    name: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<Cow<'static, str>>,
    display_width: f32,
    display_height: f32,
    viewport_width: f32,
    viewport_height: f32,
    groups: Vec<PathGroup>,
}

impl IconDefinition {
    /// Start building an icon
    ///
    /// `width`/`height` are the intended display size in dp; all path
    /// coordinates are expressed in the `viewport_width` x `viewport_height`
    /// space.
    pub fn builder(
        name: impl Into<Cow<'static, str>>,
        width: f32,
        height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> IconBuilder {
        IconBuilder {
            icon: IconDefinition {
                name: name.into(),
                description: None,
                display_width: width,
                display_height: height,
                viewport_width,
                viewport_height,
                groups: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Intended rendering size
    pub fn display_size(&self) -> Size {
        Size::new(self.display_width, self.display_height)
    }

    /// Logical coordinate space of the path data
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport_width, self.viewport_height)
    }

    pub fn groups(&self) -> &[PathGroup] {
        &self.groups
    }

    /// First group carrying the given tag
    pub fn group(&self, name: &str) -> Option<&PathGroup> {
        self.groups.iter().find(|g| g.name() == Some(name))
    }

    /// Tags of all named groups, in paint order
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().filter_map(PathGroup::name)
    }

    /// Interpreted geometry of every group, in paint order
    pub fn geometry(&self) -> Result<Vec<Geometry>, PathError> {
        self.groups.iter().map(PathGroup::geometry).collect()
    }

    /// Total number of drawing commands
    pub fn command_count(&self) -> usize {
        self.groups.iter().map(|g| g.commands.len()).sum()
    }
}

/// Builder returned by [`IconDefinition::builder`]
#[derive(Debug)]
pub struct IconBuilder {
    icon: IconDefinition,
}

impl IconBuilder {
    pub fn description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.icon.description = Some(description.into());
        self
    }

    /// Add a path group drawn with `style`
    pub fn path(mut self, style: PathStyle, f: impl FnOnce(PathBuilder) -> PathBuilder) -> Self {
        let commands = f(PathBuilder::new()).build();
        self.icon.groups.push(PathGroup::new(style, commands));
        self
    }

    /// Add a prebuilt group
    pub fn group(mut self, group: PathGroup) -> Self {
        self.icon.groups.push(group);
        self
    }

    pub fn build(self) -> IconDefinition {
        self.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IconDefinition {
        IconDefinition::builder("Sample", 48.0, 48.0, 24.0, 24.0)
            .description("Two squares")
            .path(PathStyle::new().fill(Color::BLACK), |p| {
                p.move_to(2.0, 2.0)
                    .horizontal_line_to(10.0)
                    .vertical_line_to(10.0)
                    .horizontal_line_to(2.0)
                    .close()
            })
            .path(
                PathStyle::new()
                    .named("FRONT_LEFT_UPPER_THIGH")
                    .fill(Color::from_argb(0xFFEF6A4C))
                    .stroke(Color::BLACK, 0.2835)
                    .stroke_miter(10.0),
                |p| p.move_to(12.0, 12.0).line_to_relative(8.0, 0.0).line_to_relative(0.0, 8.0).close(),
            )
            .build()
    }

    #[test]
    fn test_builder() {
        let icon = sample();

        assert_eq!(icon.name(), "Sample");
        assert_eq!(icon.description(), Some("Two squares"));
        assert_eq!(icon.display_size(), Size::new(48.0, 48.0));
        assert_eq!(icon.viewport(), Size::new(24.0, 24.0));
        assert_eq!(icon.groups().len(), 2);
        assert_eq!(icon.command_count(), 9);
    }

    #[test]
    fn test_named_group_lookup() {
        let icon = sample();

        let group = icon.group("FRONT_LEFT_UPPER_THIGH").unwrap();
        assert_eq!(group.style.stroke_width, 0.2835);
        assert_eq!(group.style.stroke_miter_limit, 10.0);
        assert!(icon.group("BACK_LEFT_BUTTOCK").is_none());
        assert_eq!(icon.group_names().collect::<Vec<_>>(), ["FRONT_LEFT_UPPER_THIGH"]);
    }

    #[test]
    fn test_style_defaults() {
        let style = PathStyle::default();

        assert_eq!(style.fill_alpha, 1.0);
        assert_eq!(style.stroke_width, 0.0);
        assert_eq!(style.stroke_cap, StrokeCap::Butt);
        assert_eq!(style.stroke_join, StrokeJoin::Miter);
        assert_eq!(style.stroke_miter_limit, 4.0);
        assert_eq!(style.fill_type, PathFillType::NonZero);
        assert!(!style.is_visible());
        assert!(style.clone().fill(Color::WHITE).is_visible());
        assert!(!style.fill(Color::TRANSPARENT).is_visible());
    }

    #[test]
    fn test_json_round_trip() {
        let icon = sample();
        let json = serde_json::to_string(&icon).unwrap();
        let back: IconDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(back, icon);
        assert!(json.contains(r##""fill":"#EF6A4C""##));
    }
}
