//! The AAPS icon set
//!
//! Every icon is a lazily built `static` [`IconDefinition`], so using one
//! icon never constructs the others. Icons can be referenced directly
//! (`aaps_icons::IC_ACTIVITY`) or resolved by name through the registry.
//!
//! # Example
//!
//! ```
//! use aaps_icons::BodyZone;
//!
//! let icon = aaps_icons::get("ManBack").unwrap();
//! assert_eq!(icon.viewport().height, 128.0);
//!
//! let arm = aaps_icons::zone("ManBack", BodyZone::BackLeftUpperArm).unwrap();
//! assert_eq!(arm.name(), Some("BACK_LEFT_UPPER_ARM"));
//! ```

mod error;
mod icons;
mod registry;
mod zone;

pub use aaps_vector::IconDefinition;
pub use error::IconError;
pub use icons::*;
pub use registry::{all, contains, get, names, zone, zones};
pub use zone::BodyZone;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use aaps_vector::{
        interpret, parse_path_data, to_path_data, validate, Color, DrawCommand, Geometry, Point,
        Segment, Severity,
    };
    use walkdir::WalkDir;

    use super::*;

    #[test]
    fn test_every_group_starts_with_a_move() {
        for icon in all() {
            for (index, group) in icon.groups().iter().enumerate() {
                assert!(
                    group.commands.first().is_some_and(DrawCommand::is_move),
                    "{} group {index} does not start with a move",
                    icon.name()
                );
                assert!(group.geometry().is_ok(), "{} group {index}", icon.name());
            }
        }
    }

    #[test]
    fn test_no_integrity_errors() {
        for icon in all() {
            let errors: Vec<_> = validate(icon)
                .into_iter()
                .filter(|issue| issue.severity == Severity::Error)
                .collect();
            assert!(errors.is_empty(), "{}: {errors:?}", icon.name());
        }
    }

    #[test]
    fn test_path_data_round_trip() {
        for icon in all() {
            for geometry in icon.geometry().unwrap() {
                let data = to_path_data(&geometry);
                let reparsed = interpret(&parse_path_data(&data).unwrap()).unwrap();
                assert!(reparsed.approx_eq(&geometry, 1e-6), "{}", icon.name());
            }
        }
    }

    #[test]
    fn test_ic_activity() {
        let icon = &*IC_ACTIVITY;
        assert_eq!(icon.name(), "IcActivity");
        assert_eq!((icon.viewport().width, icon.viewport().height), (24.0, 24.0));
        assert_eq!(icon.groups().len(), 1);

        let group = &icon.groups()[0];
        assert_eq!(group.style.fill, Some(Color::from_argb(0xFF67DFE8)));
        assert_eq!(group.style.fill.unwrap().to_string(), "#67DFE8");
        assert!(group.style.stroke.is_none());
        assert_eq!(group.commands[0], DrawCommand::MoveTo(Point::new(19.004, 12.345)));

        let geometry = group.geometry().unwrap();
        let first = &geometry.subpaths()[0];
        let start = Point::new(19.004, 12.345);
        assert!(first.is_closed());
        assert_eq!(first.start(), start);
        assert!(first.last_point().approx_eq(start, 1e-4));
        assert!(first.end().approx_eq(start, 1e-4));
    }

    #[test]
    fn test_zone_tags_are_known() {
        for icon in all() {
            for name in icon.group_names() {
                if name != "background" {
                    assert!(name.parse::<BodyZone>().is_ok(), "{}: {name}", icon.name());
                }
            }
        }
    }

    #[test]
    fn test_settings_off_uses_even_odd() {
        let group = &IC_SETTINGS_OFF.groups()[0];
        assert_eq!(group.style.fill_type, aaps_vector::PathFillType::EvenOdd);
    }

    /// Subpath starts, closes and segment end points; control points are not
    /// compared since the drawables may spell the same curve differently
    fn outline(geometry: &[Geometry]) -> Vec<(Point, Vec<Point>, bool)> {
        geometry
            .iter()
            .flat_map(Geometry::subpaths)
            .map(|sub| {
                let ends = sub.segments().iter().map(Segment::end).collect();
                (sub.start(), ends, sub.is_closed())
            })
            .collect()
    }

    fn svg_geometry(path: &Path) -> Vec<Geometry> {
        let text = std::fs::read_to_string(path).unwrap();
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(&text, options).unwrap();

        doc.descendants()
            .filter(|node| node.has_tag_name("path"))
            .filter_map(|node| node.attribute("d"))
            .map(|d| interpret(&parse_path_data(d).unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn test_geometry_matches_source_drawables() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("svg");
        let mut checked = 0;

        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.unwrap();
            if entry.path().extension().and_then(|ext| ext.to_str()) != Some("svg") {
                continue;
            }
            let name = entry.path().file_stem().unwrap().to_str().unwrap();
            let icon = get(name).unwrap();

            let expected = outline(&svg_geometry(entry.path()));
            let actual = outline(&icon.geometry().unwrap());
            assert_eq!(expected.len(), actual.len(), "{name}: subpath count");

            for (i, (e, a)) in expected.iter().zip(&actual).enumerate() {
                assert_eq!(e.2, a.2, "{name} subpath {i}: closed");
                assert!(e.0.approx_eq(a.0, 2e-3), "{name} subpath {i}: start");
                assert_eq!(e.1.len(), a.1.len(), "{name} subpath {i}: segment count");
                for (pe, pa) in e.1.iter().zip(&a.1) {
                    assert!(pe.approx_eq(*pa, 2e-3), "{name} subpath {i}: {pe:?} vs {pa:?}");
                }
            }
            checked += 1;
        }

        assert_eq!(checked, 60);
    }
}
