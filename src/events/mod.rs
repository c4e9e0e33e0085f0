// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Selection
    BulkSelectionCompleted,
    // Paging
    PageLoadFailed,
    PageLoaded,
    // Preferences
    RowClickModeChanged,
    SelectionChanged,
};

pub use bus::{EventBus, EventLogEntry};
