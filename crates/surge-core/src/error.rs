//! Error types for the Surge simulation.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a simulation configuration.
///
/// Raised at construction time and surfaced to the caller immediately;
/// an invalid floor plan is never returned. Stepping a constructed
/// simulation cannot fail, so this is the only error type in the core.
///
/// A negative population is unrepresentable: the population parameter is
/// unsigned, so that constraint is enforced by the type system rather
/// than a runtime check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `width` must be at least 2: row 0 is the stage, and at least one
    /// floor row must remain for the crowd.
    WidthTooSmall {
        /// The rejected width.
        value: u32,
    },
    /// `height` must be at least 1.
    EmptyFloor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTooSmall { value } => {
                write!(
                    f,
                    "width {value} too small: need at least the stage row plus one floor row"
                )
            }
            Self::EmptyFloor => write!(f, "height must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_parameter() {
        let err = ConfigError::WidthTooSmall { value: 1 };
        assert!(err.to_string().contains("width 1"));
        assert!(ConfigError::EmptyFloor.to_string().contains("height"));
    }
}
