//! Custom error types for the crate.
//!
//! This module defines the primary error type, `PanelError`, using the
//! `thiserror` crate. The taxonomy is deliberately small:
//!
//! - **`UnknownParameter`**: a by-name [`set`](crate::ParamPanel::set) did not
//!   match any declared parameter. Caller-recoverable (log and ignore, or
//!   surface to the user).
//! - **`DuplicateParameter`**: two descriptors on the same object share a
//!   name. Caught at panel construction so by-name addressing stays
//!   unambiguous.
//! - **`InvalidDescriptor`**: a descriptor is structurally malformed
//!   (non-finite or inverted bounds, non-positive step). Construction
//!   fails fast; the partial panel is dropped.
//! - **`InvalidLayout`**: a non-positive panel width or a zero width divisor
//!   was requested.
//!
//! Out-of-range *index* addressing is not represented here: passing a bad
//! index to [`set`](crate::ParamPanel::set) is a caller bug and panics via
//! slice indexing rather than returning a recoverable error.

use thiserror::Error;

/// Convenience alias for results using the crate error type.
pub type PanelResult<T> = std::result::Result<T, PanelError>;

/// Errors produced while building or addressing a parameter panel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("no parameter named '{0}'")]
    UnknownParameter(String),

    #[error("duplicate parameter name '{0}'")]
    DuplicateParameter(String),

    #[error("invalid descriptor '{name}': {reason}")]
    InvalidDescriptor {
        /// Name of the offending descriptor.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    #[error("invalid panel layout: {0}")]
    InvalidLayout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_parameter_carries_the_offending_name() {
        let err = PanelError::UnknownParameter("speeed".into());
        assert_eq!(err.to_string(), "no parameter named 'speeed'");
    }

    #[test]
    fn invalid_descriptor_names_the_parameter() {
        let err = PanelError::InvalidDescriptor {
            name: "radius".into(),
            reason: "min is not finite".into(),
        };
        assert!(err.to_string().contains("radius"));
        assert!(err.to_string().contains("not finite"));
    }
}
