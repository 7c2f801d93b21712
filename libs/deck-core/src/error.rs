//! # Error Types
//!
//! Error taxonomy shared by every deck crate. All errors are programmer-input
//! errors: they fail synchronously at the point of violation, before any
//! state mutation, and propagate to the caller.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when validation fails
//! - Validation precedes mutation: on error the prior state is unchanged
//! - Messages echo the invalid input for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a problem definition.
///
/// ## Example
///
/// ```rust
/// use deck_core::{DeckError, Identity};
///
/// match Identity::new("") {
///     Err(DeckError::Naming(msg)) => assert!(msg.contains("empty")),
///     other => panic!("expected a naming error, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeckError {
    /// A mutually exclusive or out-of-domain option was supplied.
    ///
    /// Examples: a surface set to both reflecting and white, a non-positive
    /// cylinder radius, a region node reused in a second combination.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A transform violates a primitive's symmetry or ordering invariant.
    ///
    /// Examples: an off-axis cylinder shift, an anisotropic perpendicular
    /// cylinder stretch, a bound pair with min above max.
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// An empty name, or a name that duplicates one already in a collection.
    #[error("Naming error: {0}")]
    Naming(String),

    /// A mutation of a unique (singleton) card's read-only identity.
    #[error("Immutability error: {0}")]
    Immutability(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for deck operations.
///
/// ## Example
///
/// ```rust
/// use deck_core::{DeckResult, Identity};
///
/// fn fuel_identity() -> DeckResult<Identity> {
///     Identity::new("fuel")
/// }
/// # fuel_identity().unwrap();
/// ```
pub type DeckResult<T> = Result<T, DeckError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let geom = DeckError::Geometry("off-axis shift".to_string());
        assert!(geom.to_string().contains("Geometry error"));
        assert!(geom.to_string().contains("off-axis shift"));

        let naming = DeckError::Naming("name cannot be empty".to_string());
        assert!(naming.to_string().contains("Naming error"));
    }

    /// Test error types are Send + Sync for downstream compatibility.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DeckError>();
    }
}
