//! Name-based icon lookup
//!
//! The table is built once on first use and never mutated afterwards, so
//! lookups from any thread need no locking.

use std::sync::LazyLock;

use aaps_vector::{IconDefinition, PathGroup};
use rustc_hash::FxHashMap;

use crate::error::IconError;
use crate::icons::ICONS;
use crate::zone::BodyZone;

type IconMap = FxHashMap<&'static str, &'static LazyLock<IconDefinition>>;

static REGISTRY: LazyLock<IconMap> = LazyLock::new(|| {
    let map: IconMap = ICONS.iter().copied().collect();
    tracing::debug!(icons = map.len(), "built icon registry");
    map
});

/// Resolve an icon by its registered name (e.g. `"IcActivity"`)
pub fn get(name: &str) -> Result<&'static IconDefinition, IconError> {
    REGISTRY
        .get(name)
        .map(|icon| LazyLock::force(*icon))
        .ok_or_else(|| IconError::UnknownIcon(name.to_string()))
}

pub fn contains(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// Registered names, sorted
pub fn names() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(name, _)| *name)
}

/// Every icon, sorted by name
pub fn all() -> impl Iterator<Item = &'static IconDefinition> {
    ICONS.iter().map(|(_, icon)| LazyLock::force(*icon))
}

/// The group tagged with `zone` inside the named icon
pub fn zone(icon: &str, zone: BodyZone) -> Result<&'static PathGroup, IconError> {
    get(icon)?.group(zone.as_str()).ok_or_else(|| IconError::UnknownZone {
        icon: icon.to_string(),
        zone,
    })
}

/// Body zones drawn by the named icon, in paint order
pub fn zones(icon: &str) -> Result<Vec<BodyZone>, IconError> {
    Ok(get(icon)?
        .group_names()
        .filter_map(|name| name.parse().ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_sorted_and_unique() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 83);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(names.iter().all(|name| contains(name)));
    }

    #[test]
    fn test_registered_name_matches_definition() {
        for name in names() {
            assert_eq!(get(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_unknown_icon() {
        assert_eq!(get("IcNope"), Err(IconError::UnknownIcon("IcNope".to_string())));
        assert!(!contains("IcNope"));
    }

    #[test]
    fn test_get_returns_the_static() {
        let icon = get("IcActivity").unwrap();
        assert!(std::ptr::eq(icon, &*crate::IC_ACTIVITY));
    }

    #[test]
    fn test_zone_lookup() {
        let group = zone("ManBack", BodyZone::BackLeftUpperArm).unwrap();
        assert_eq!(group.name(), Some("BACK_LEFT_UPPER_ARM"));
        assert!(group.style.fill.is_some());

        assert_eq!(
            zone("ManBack", BodyZone::FrontLeftUpperThigh),
            Err(IconError::UnknownZone {
                icon: "ManBack".to_string(),
                zone: BodyZone::FrontLeftUpperThigh,
            })
        );
        assert!(matches!(zone("Missing", BodyZone::BackLeftButtock), Err(IconError::UnknownIcon(_))));
    }

    #[test]
    fn test_zones_of_back_silhouette() {
        let tags = zones("ManBack").unwrap();
        assert!(tags.contains(&BodyZone::BackLeftUpperArm));
        assert!(tags.contains(&BodyZone::BackRightButtock));
        assert!(zones("IcActivity").unwrap().is_empty());
    }
}
