//! # Card Identity
//!
//! The naming contract shared by every card kind: surfaces, regions, cells,
//! tallies, sources, and detectors all carry an [`Identity`].
//!
//! Cards are referenced from other cards by name, so names must be non-empty
//! and unique within their collection (collections enforce uniqueness on
//! insert). Unique card kinds exist at most once per problem and keep the
//! name they were constructed with.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

// =============================================================================
// IDENTITY
// =============================================================================

/// A validated card name, plus the unique-card flag.
///
/// ## Example
///
/// ```rust
/// use deck_core::Identity;
///
/// let mut id = Identity::new("fuel-pin").unwrap();
/// assert!(!id.is_unique());
/// id.rename("clad").unwrap();
///
/// // Unique cards are read-only after construction.
/// let mut kcode = Identity::unique("criticality").unwrap();
/// assert!(kcode.rename("other").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    unique: bool,
}

impl Identity {
    /// Create an identity for an ordinary (renamable) card.
    ///
    /// Fails with [`DeckError::Naming`] when the name is empty.
    pub fn new(name: impl Into<String>) -> DeckResult<Self> {
        let name = name.into();
        Self::check_name(&name)?;
        Ok(Self {
            name,
            unique: false,
        })
    }

    /// Create an identity for a unique (singleton) card.
    ///
    /// The name is fixed for the lifetime of the card; [`Identity::rename`]
    /// always fails with [`DeckError::Immutability`].
    pub fn unique(name: impl Into<String>) -> DeckResult<Self> {
        let name = name.into();
        Self::check_name(&name)?;
        Ok(Self { name, unique: true })
    }

    /// The card's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this identity belongs to a unique (singleton) card.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Rename the card. The change is visible immediately.
    ///
    /// Fails with [`DeckError::Immutability`] for unique cards and with
    /// [`DeckError::Naming`] for empty names; in both cases the current
    /// name is left unchanged.
    pub fn rename(&mut self, name: impl Into<String>) -> DeckResult<()> {
        if self.unique {
            return Err(DeckError::Immutability(format!(
                "card '{}' is unique; only one card of this kind exists per \
                 problem and its name is read-only",
                self.name
            )));
        }
        let name = name.into();
        Self::check_name(&name)?;
        self.name = name;
        Ok(())
    }

    fn check_name(name: &str) -> DeckResult<()> {
        if name.is_empty() {
            return Err(DeckError::Naming(
                "card name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// CAPABILITY TRAITS
// =============================================================================

/// Name access for cards.
///
/// Implemented by every card via its embedded [`Identity`]; dispatch is by
/// pattern match on closed unions, never by downcasting.
pub trait Named {
    /// The card's name.
    fn name(&self) -> &str;

    /// Rename the card, subject to the identity contract.
    fn rename(&mut self, name: &str) -> DeckResult<()>;
}

impl Named for Identity {
    fn name(&self) -> &str {
        Identity::name(self)
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        Identity::rename(self, name)
    }
}

/// Canonical diagnostic rendering for cards.
///
/// The returned string is a human-readable description, not the wire format
/// of any particular transport code; wire rendering belongs to the
/// serialization layer.
pub trait Commentable {
    /// A diagnostic one-line description of the card's content.
    fn comment(&self) -> String;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        match Identity::new("") {
            Err(DeckError::Naming(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected naming error, got {:?}", other),
        }
        assert!(Identity::unique("").is_err());
    }

    #[test]
    fn test_rename_visible_immediately() {
        let mut id = Identity::new("a").unwrap();
        id.rename("b").unwrap();
        assert_eq!(id.name(), "b");
    }

    #[test]
    fn test_rename_to_empty_keeps_old_name() {
        let mut id = Identity::new("a").unwrap();
        assert!(id.rename("").is_err());
        assert_eq!(id.name(), "a");
    }

    #[test]
    fn test_unique_rename_always_fails() {
        let mut id = Identity::unique("criticality").unwrap();
        match id.rename("other") {
            Err(DeckError::Immutability(msg)) => {
                assert!(msg.contains("criticality"));
            }
            other => panic!("expected immutability error, got {:?}", other),
        }
        assert_eq!(id.name(), "criticality");
    }

    #[test]
    fn test_named_trait_dispatch() {
        fn rename_card(card: &mut dyn Named) {
            card.rename("renamed").unwrap();
        }
        let mut id = Identity::new("original").unwrap();
        rename_card(&mut id);
        assert_eq!(id.name(), "renamed");
    }
}
