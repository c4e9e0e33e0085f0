// src/lib.rs
// Artworks Table - paginated artwork listing with cross-page row selection
//
// Architecture:
// - Domain-centric: selection rules live in `domain::selection`
// - Single writer: the selection service serializes every mutation
// - Event-driven: committed changes are announced on the event bus
// - Application layer: DTO boundary for the rendering layer

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod logging;
pub mod repositories;
pub mod services;

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    Artwork, ArtworkId, ArtworkPage, BulkPhase, BulkSelectCount, BulkSelection,
    BulkSelectionOutcome, PageWindow, SelectionDelta, SelectionSet, PAGE_SIZE,
};

// ============================================================================
// PUBLIC API - Errors, Config
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    BulkSelectionCompleted, DomainEvent, EventBus, EventLogEntry, PageLoadFailed, PageLoaded,
    RowClickModeChanged, SelectionChanged,
};

// ============================================================================
// PUBLIC API - Sources & Services
// ============================================================================

pub use integrations::ArticClient;
pub use repositories::{ArticPageSource, ArtworkPageSource};
pub use services::{SelectionService, TableSnapshot};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
pub use application::commands;
pub use application::dto;
