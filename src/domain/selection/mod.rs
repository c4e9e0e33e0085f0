//! Critical Selection Invariants:
//!
//! 1. The selection set only holds ids observed on a fetched page
//! 2. Changing one page's checkboxes never touches another page's ids
//! 3. The visible selection is always the intersection of window and set
//! 4. A page window is replaced whole, never patched

pub mod bulk;
pub mod page_window;
pub mod selection_set;
pub mod value_objects;

pub use bulk::{BulkPhase, BulkSelection, BulkSelectionOutcome};
pub use page_window::{last_page_for, PageWindow, PAGE_SIZE};
pub use selection_set::{SelectionDelta, SelectionSet};
pub use value_objects::BulkSelectCount;
