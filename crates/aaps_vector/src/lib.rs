//! Vector icon model for AAPS
//!
//! Icons are authored as immutable [`IconDefinition`]s: a display size, a
//! viewport, and styled [`PathGroup`]s whose [`DrawCommand`]s follow SVG
//! path semantics. This crate carries no drawing backend; it interprets
//! commands into absolute geometry and resolves icons for a target size
//! and tint so any renderer can consume them.
//!
//! # Example
//!
//! ```
//! use aaps_vector::{Color, IconDefinition, PathStyle, RenderOptions};
//!
//! let dot = IconDefinition::builder("Dot", 48.0, 48.0, 24.0, 24.0)
//!     .path(PathStyle::new().fill(Color::from_argb(0xFF67DFE8)), |p| {
//!         p.move_to(10.0, 12.0)
//!             .curve_to_relative(0.0, -2.667, 4.0, -2.667, 4.0, 0.0)
//!             .reflective_curve_to_relative(-4.0, 2.667, -4.0, 0.0)
//!             .close()
//!     })
//!     .build();
//!
//! let rendered = aaps_vector::render(&dot, &RenderOptions::new().with_tint(Color::WHITE)).unwrap();
//! assert_eq!(rendered.width, 48.0);
//! assert_eq!(rendered.paths[0].fill, Some(Color::WHITE));
//! ```

mod color;
mod command;
mod error;
mod geometry;
mod icon;
mod interpret;
mod path_data;
mod render;
mod svg;
mod validate;

pub use color::Color;
pub use command::{DrawCommand, PathBuilder};
pub use error::{ParseColorError, PathDataError, PathError, SvgError};
pub use geometry::{Point, Rect, Size};
pub use icon::{IconBuilder, IconDefinition, PathFillType, PathGroup, PathStyle, StrokeCap, StrokeJoin};
pub use interpret::{interpret, Geometry, Segment, Subpath};
pub use path_data::{commands_to_path_data, parse_path_data, to_path_data};
pub use render::{render, RenderOptions, RenderedIcon, RenderedPath, RenderedStroke};
pub use svg::to_svg_document;
pub use validate::{validate, Issue, Severity};
