//! Error types

use std::io;
use thiserror::Error;

/// Errors produced while interpreting a command list into geometry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A drawing command appeared before any move established a current point
    #[error("command {index} ({command}) has no current point; paths must start with a move")]
    MissingMoveTo { index: usize, command: &'static str },
}

/// Errors produced while parsing SVG path data (`d` attributes)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathDataError {
    /// Malformed path data
    #[error("invalid path data: {0}")]
    Syntax(String),

    /// Valid SVG, but not representable as icon commands
    #[error("unsupported path command: {0}")]
    Unsupported(&'static str),
}

/// Errors that can occur when importing or exporting SVG documents
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// The document parsed but holds nothing an icon can carry
    #[error("unsupported SVG content: {0}")]
    Unsupported(String),

    /// The icon geometry could not be interpreted
    #[error(transparent)]
    Path(#[from] PathError),
}

/// A color string that is not `#RRGGBB` or `#RRGGBBAA`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(pub String);
