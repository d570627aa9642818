//! Data-integrity checks for icon definitions

use std::fmt;

use crate::icon::{IconDefinition, PathGroup};
use crate::interpret::{interpret, Geometry};
use crate::path_data::{parse_path_data, to_path_data};

/// How far geometry may stray outside the viewport, as a fraction of its size
const VIEWPORT_MARGIN: f32 = 0.1;

const ROUND_TRIP_TOLERANCE: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found in one group of an icon
#[derive(Clone, Debug, PartialEq)]
pub struct Issue {
    pub severity: Severity,
    /// Index of the group in paint order
    pub group: usize,
    pub message: String,
}

impl Issue {
    fn warning(group: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            group,
            message: message.into(),
        }
    }

    fn error(group: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            group,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: group {}: {}", self.group, self.message)
    }
}

/// Run every check over `icon`
pub fn validate(icon: &IconDefinition) -> Vec<Issue> {
    let mut issues = Vec::new();
    let allowed = {
        let viewport = icon.viewport_rect();
        viewport.outset(viewport.width() * VIEWPORT_MARGIN, viewport.height() * VIEWPORT_MARGIN)
    };

    for (index, group) in icon.groups().iter().enumerate() {
        if group.commands.is_empty() {
            issues.push(Issue::warning(index, "group has no commands"));
            continue;
        }
        if !group.style.is_visible() {
            issues.push(Issue::warning(index, "group paints nothing"));
        }

        let geometry = match group.geometry() {
            Ok(geometry) => geometry,
            Err(e) => {
                issues.push(Issue::error(index, e.to_string()));
                continue;
            }
        };

        if let Some(outside) = geometry.points().find(|p| !allowed.contains(*p)) {
            issues.push(Issue::warning(
                index,
                format!("point ({}, {}) lies outside the viewport", outside.x, outside.y),
            ));
        }

        if let Err(message) = check_round_trip(group, &geometry) {
            issues.push(Issue::error(index, message));
        }
    }

    issues
}

fn check_round_trip(group: &PathGroup, geometry: &Geometry) -> Result<(), String> {
    let data = to_path_data(geometry);
    let commands = parse_path_data(&data).map_err(|e| format!("path data does not re-parse: {e}"))?;
    let reparsed = interpret(&commands).map_err(|e| e.to_string())?;

    if reparsed.approx_eq(geometry, ROUND_TRIP_TOLERANCE) {
        Ok(())
    } else {
        Err(format!(
            "path data round trip changed the geometry ({} commands)",
            group.commands.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::command::PathBuilder;
    use crate::icon::PathStyle;

    #[test]
    fn test_clean_icon() {
        let icon = IconDefinition::builder("Clean", 24.0, 24.0, 24.0, 24.0)
            .path(PathStyle::new().fill(Color::BLACK), |p| {
                p.move_to(2.0, 2.0).horizontal_line_to(22.0).reflective_curve_to(22.0, 22.0, 12.0, 22.0).close()
            })
            .build();
        assert!(validate(&icon).is_empty());
    }

    #[test]
    fn test_reports_problems() {
        let icon = IconDefinition::builder("Broken", 24.0, 24.0, 24.0, 24.0)
            .group(PathGroup::new(PathStyle::new().fill(Color::BLACK), Vec::new()))
            .group(PathGroup::new(
                PathStyle::new().fill(Color::BLACK),
                PathBuilder::new().line_to(1.0, 1.0).build(),
            ))
            .path(PathStyle::new(), |p| p.move_to(1.0, 1.0).line_to(2.0, 2.0))
            .path(PathStyle::new().fill(Color::BLACK), |p| p.move_to(0.0, 0.0).line_to(40.0, 1.0))
            .build();

        let issues = validate(&icon);
        let summary: Vec<_> = issues.iter().map(|i| (i.group, i.severity)).collect();
        assert_eq!(
            summary,
            [
                (0, Severity::Warning),
                (1, Severity::Error),
                (2, Severity::Warning),
                (3, Severity::Warning),
            ]
        );
        assert!(issues[1].to_string().starts_with("error: group 1: command 0 (line_to)"));
    }
}
