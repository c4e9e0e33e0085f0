// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod artwork;
pub mod selection;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Artwork Domain
pub use artwork::{validate_artwork_page, Artwork, ArtworkId, ArtworkPage};

// Selection Domain
pub use selection::{
    last_page_for, BulkPhase, BulkSelectCount, BulkSelection, BulkSelectionOutcome, PageWindow,
    SelectionDelta, SelectionSet, PAGE_SIZE,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid row count: {0}")]
    InvalidCount(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
