// events/types.rs
//
// All table events.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are emitted only after state is committed
// - Events carry only the data needed to re-render

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// PAGING EVENTS
// ============================================================================

/// Emitted when a page window was replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub page: u32,
    pub total_count: u64,
    pub record_count: usize,
    pub visible_selected: usize,
}

impl PageLoaded {
    pub fn new(page: u32, total_count: u64, record_count: usize, visible_selected: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            page,
            total_count,
            record_count,
            visible_selected,
        }
    }
}

impl_domain_event!(PageLoaded);

/// Emitted when a page fetch failed; the previous window stays in place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub page: u32,
    pub reason: String,
}

impl PageLoadFailed {
    pub fn new(page: u32, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            page,
            reason,
        }
    }
}

impl_domain_event!(PageLoadFailed);

// ============================================================================
// SELECTION EVENTS
// ============================================================================

/// Emitted when checkboxes on the current page changed the selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub page: u32,
    pub added: usize,
    pub removed: usize,
    pub selected_total: usize,
}

impl SelectionChanged {
    pub fn new(page: u32, added: usize, removed: usize, selected_total: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            page,
            added,
            removed,
            selected_total,
        }
    }
}

impl_domain_event!(SelectionChanged);

/// Emitted when a bulk "select first N rows" walk committed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSelectionCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub requested: usize,
    pub pages_visited: u32,
    pub last_page_touched: Option<u32>,
    pub newly_selected: usize,
    pub deselected: usize,
    pub selected_total: usize,
}

impl BulkSelectionCompleted {
    pub fn new(
        requested: usize,
        pages_visited: u32,
        last_page_touched: Option<u32>,
        newly_selected: usize,
        deselected: usize,
        selected_total: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            requested,
            pages_visited,
            last_page_touched,
            newly_selected,
            deselected,
            selected_total,
        }
    }
}

impl_domain_event!(BulkSelectionCompleted);

/// Emitted when the row-click preference was toggled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowClickModeChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub enabled: bool,
}

impl RowClickModeChanged {
    pub fn new(enabled: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            enabled,
        }
    }
}

impl_domain_event!(RowClickModeChanged);
