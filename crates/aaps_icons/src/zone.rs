//! Injection-site zones tagged on the body silhouettes

use std::fmt;
use std::str::FromStr;

use crate::error::IconError;

macro_rules! body_zones {
    ($($variant:ident => $tag:literal,)*) => {
        /// A named region of a body silhouette
        ///
        /// Silhouette icons (`ManBack`, `WomanFront`, `ChildBack`, ...) tag the
        /// group drawing each region with the zone's [`as_str`](Self::as_str)
        /// name, so a host can recolor or hit-test individual sites.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BodyZone {
            $($variant,)*
        }

        impl BodyZone {
            /// Every zone, in declaration order
            pub const ALL: &'static [BodyZone] = &[$(BodyZone::$variant,)*];

            /// The tag used on path groups
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(BodyZone::$variant => $tag,)*
                }
            }
        }

        impl FromStr for BodyZone {
            type Err = IconError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(BodyZone::$variant),)*
                    _ => Err(IconError::InvalidZone(s.to_string())),
                }
            }
        }
    };
}

body_zones! {
    FrontLeftUpperAbdomen => "FRONT_LEFT_UPPER_ABDOMEN",
    FrontRightUpperAbdomen => "FRONT_RIGHT_UPPER_ABDOMEN",
    FrontLeftLowerAbdomen => "FRONT_LEFT_LOWER_ABDOMEN",
    FrontRightLowerAbdomen => "FRONT_RIGHT_LOWER_ABDOMEN",
    FrontLeftUpperThigh => "FRONT_LEFT_UPPER_THIGH",
    FrontRightUpperThigh => "FRONT_RIGHT_UPPER_THIGH",
    FrontLeftLowerThigh => "FRONT_LEFT_LOWER_THIGH",
    FrontRightLowerThigh => "FRONT_RIGHT_LOWER_THIGH",
    BackLeftUpperArm => "BACK_LEFT_UPPER_ARM",
    BackRightUpperArm => "BACK_RIGHT_UPPER_ARM",
    BackLeftButtock => "BACK_LEFT_BUTTOCK",
    BackRightButtock => "BACK_RIGHT_BUTTOCK",
    SideLeftUpperArm => "SIDE_LEFT_UPPER_ARM",
    SideRightUpperArm => "SIDE_RIGHT_UPPER_ARM",
    SideLeftUpperAbdomen => "SIDE_LEFT_UPPER_ABDOMEN",
    SideRightUpperAbdomen => "SIDE_RIGHT_UPPER_ABDOMEN",
    SideLeftLowerAbdomen => "SIDE_LEFT_LOWER_ABDOMEN",
    SideRightLowerAbdomen => "SIDE_RIGHT_LOWER_ABDOMEN",
    SideLeftUpperThigh => "SIDE_LEFT_UPPER_THIGH",
    SideRightUpperThigh => "SIDE_RIGHT_UPPER_THIGH",
    SideLeftLowerThigh => "SIDE_LEFT_LOWER_THIGH",
    SideRightLowerThigh => "SIDE_RIGHT_LOWER_THIGH",
}

impl fmt::Display for BodyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_tags_round_trip() {
        assert_eq!(BodyZone::ALL.len(), 22);
        for zone in BodyZone::ALL {
            assert_eq!(zone.as_str().parse::<BodyZone>().unwrap(), *zone);
            assert_eq!(zone.to_string(), zone.as_str());
        }
    }

    #[test]
    fn test_invalid_zone() {
        assert!(matches!(
            "LEFT_ELBOW".parse::<BodyZone>(),
            Err(IconError::InvalidZone(tag)) if tag == "LEFT_ELBOW"
        ));
    }
}
