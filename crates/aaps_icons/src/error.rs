//! Error types

use thiserror::Error;

use crate::zone::BodyZone;

/// Errors returned by registry lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// No icon is registered under this name
    #[error("unknown icon '{0}'")]
    UnknownIcon(String),

    /// The icon exists but has no group tagged with this zone
    #[error("icon '{icon}' has no zone {zone}")]
    UnknownZone { icon: String, zone: BodyZone },

    /// The tag is not a body zone name
    #[error("invalid body zone '{0}'")]
    InvalidZone(String),
}
