// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO selection logic
// - NO event emission
// - A page is returned whole or not at all

pub mod artwork_page_source;

pub use artwork_page_source::{ArtworkPageSource, ArticPageSource};

#[cfg(test)]
pub use artwork_page_source::MockArtworkPageSource;
