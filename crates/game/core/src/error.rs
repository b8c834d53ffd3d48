//! Common error infrastructure for tabletop-core.
//!
//! Domain-specific errors (`PointError`, `PositionError`, `OperationError`)
//! live next to the code that raises them. This module only provides the
//! shared classification used by all of them.

/// Severity level of an error, used by callers to decide how to report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, the call should not be retried without changes.
    ///
    /// Examples: non-integral coordinate, unsupported position shape
    Validation,

    /// Out-of-bounds access while inspecting the call.
    ///
    /// Raised for a trailing bare integer with no partner argument.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Returns true if this error points at an access outside the argument list.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all tabletop-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on the cause, not on the impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
