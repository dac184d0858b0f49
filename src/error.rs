//! Configuration errors
//!
//! The simulation itself is total; only building a game from settings can fail.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// Field dimensions are non-finite, non-positive or larger than supported
    InvalidField { width: f32, height: f32 },
    /// A sprite bounding box is non-finite or non-positive
    InvalidSprite {
        what: &'static str,
        width: f32,
        height: f32,
    },
    /// The craft cannot be placed inside the field
    CraftDoesNotFit {
        craft: (f32, f32),
        field: (f32, f32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "failed to parse settings: {e}"),
            Self::InvalidField { width, height } => {
                write!(f, "invalid field size: {width}x{height}")
            }
            Self::InvalidSprite {
                what,
                width,
                height,
            } => write!(f, "invalid {what} size: {width}x{height}"),
            Self::CraftDoesNotFit { craft, field } => write!(
                f,
                "craft {}x{} does not fit in field {}x{}",
                craft.0, craft.1, field.0, field.1
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
