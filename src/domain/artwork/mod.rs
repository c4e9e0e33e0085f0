//! Artwork Invariants:
//!
//! 1. Ids are unique and stable across fetches
//! 2. Records are immutable once fetched
//! 3. A page never holds more records than the page size
//! 4. A page never repeats an id

pub mod entity;
pub mod invariants;

pub use entity::{Artwork, ArtworkId, ArtworkPage};
pub use invariants::validate_artwork_page;
