//! Card catalog and context profiles for the Tianji divination engine.
//!
//! The deck is a fixed set of weighted cards partitioned into four
//! categories (Sky, Earth, Human, Variable). Context profiles bias
//! situational draws toward a life domain. Both catalogs are static data,
//! validated once at load time and never mutated afterwards.

pub mod card;
pub mod catalog;
pub mod category;
pub mod error;
pub mod hand;
pub mod profile;
pub mod random;

pub use card::{Card, Intensity};
pub use catalog::{BUILTIN_PARTITION, Deck, ProfileCatalog};
pub use category::{Category, PerCategory};
pub use error::{DeckError, DeckResult};
pub use hand::FortuneHand;
pub use profile::{AttributeRange, ContextProfile, Emphasis, PreferredRanges};
pub use random::{RandomSource, ScriptedSource};
