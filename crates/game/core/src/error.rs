//! Common error infrastructure for duel-core.
//!
//! Domain-specific errors (`LoadoutError`, `ActError`, `SessionError`) live
//! next to the operations they validate. This module holds the shared
//! classification so callers can decide how to surface a rejection.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **No Partial Mutation**: Every error is raised before state is touched
//! - **Severity Classification**: Errors are categorized for presentation strategies

/// Severity level of an error, used for categorization.
///
/// - **Validation**: the caller asked for something the rules forbid
///   (not your turn, over budget). Show a notice; do not retry.
/// - **Recoverable**: the request raced with another transition (the duel
///   just finished, the challenge expired). Refreshing the view resolves it.
/// - **Internal**: catalog or snapshot inconsistency. Indicates a bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Recoverable,
    Internal,
}

impl ErrorSeverity {
    /// Returns true if refreshing state and trying again may succeed.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all duel-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Derive `strum::IntoStaticStr` with `serialize_all = "snake_case"` so
///   `error_code` is stable across releases
/// - Classify severity based on how the caller should react, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Used by the outer layer to pick a localized notice.
    fn error_code(&self) -> &'static str;
}
