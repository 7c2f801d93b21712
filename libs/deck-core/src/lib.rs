//! # Deck Core
//!
//! Shared contracts for every card in a transport-code problem definition:
//! the naming/identity rules and the error taxonomy.
//!
//! ## Architecture
//!
//! ```text
//! deck-core (Identity, DeckError) → deck-geometry (surfaces, regions)
//!                                 → deck-cards (cells, tallies, sources)
//! ```
//!
//! Every card carries an [`Identity`]: a non-empty name that is unique
//! within its collection. Some card kinds are singletons ("unique" cards);
//! their name is fixed at construction and any rename fails.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::{Identity, Named};
//!
//! let mut id = Identity::new("fuel-pin").unwrap();
//! id.rename("moderator").unwrap();
//! assert_eq!(id.name(), "moderator");
//!
//! let unique = Identity::unique("criticality").unwrap();
//! assert!(unique.is_unique());
//! ```

pub mod error;
pub mod identity;

// Re-export public API
pub use error::{DeckError, DeckResult};
pub use identity::{Commentable, Identity, Named};
