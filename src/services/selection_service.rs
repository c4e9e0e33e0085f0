// src/services/selection_service.rs
//
// Selection Service - Cross-page row selection
//
// Owns the selection set, the displayed page window and the row-click
// preference. Every operation that mutates the selection set or the window
// runs behind a single-writer gate:
// - go_to_page
// - set_visible_selection
// - select_first_n
//
// The gate is a FIFO async mutex, so overlapping calls queue in arrival
// order and none is aborted. Committed state sits behind a separate RwLock
// that is never held across an await, so snapshots (including the loading
// flag) stay readable while a writer waits on the network.
//
// State is committed only after every fetch of an operation succeeded.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::domain::{
    Artwork, ArtworkId, BulkSelectCount, BulkSelection, BulkSelectionOutcome, PageWindow,
    SelectionDelta, SelectionSet,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    BulkSelectionCompleted, EventBus, PageLoadFailed, PageLoaded, RowClickModeChanged,
    SelectionChanged,
};
use crate::repositories::ArtworkPageSource;

/// Read-only view handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    /// `None` until the first page has loaded
    pub page: Option<u32>,
    pub page_size: usize,
    pub total_count: u64,
    pub last_page: u32,
    pub loading: bool,
    pub row_click: bool,
    pub artworks: Vec<Artwork>,
    /// Records of the current page that are selected, in page order
    pub visible_selection: Vec<Artwork>,
    pub selected_total: usize,
}

#[derive(Debug)]
struct SelectionState {
    window: Option<PageWindow>,
    selection: SelectionSet,
    loading: bool,
    row_click: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            window: None,
            selection: SelectionSet::new(),
            loading: false,
            row_click: true,
        }
    }
}

/// Raises the loading flag for the lifetime of a page fetch.
/// Dropping it clears the flag, also when the fetching future is dropped.
struct LoadingFlag<'a> {
    state: &'a RwLock<SelectionState>,
}

impl<'a> LoadingFlag<'a> {
    fn raise(state: &'a RwLock<SelectionState>) -> Self {
        state.write().unwrap_or_else(PoisonError::into_inner).loading = true;
        Self { state }
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = false;
    }
}

pub struct SelectionService {
    source: Arc<dyn ArtworkPageSource>,
    event_bus: Arc<EventBus>,
    writer: Mutex<()>,
    state: RwLock<SelectionState>,
}

impl SelectionService {
    pub fn new(source: Arc<dyn ArtworkPageSource>, event_bus: Arc<EventBus>) -> Self {
        Self {
            source,
            event_bus,
            writer: Mutex::new(()),
            state: RwLock::new(SelectionState::default()),
        }
    }

    pub fn page_size(&self) -> usize {
        self.source.page_size()
    }

    // ========================================================================
    // READS
    // ========================================================================

    pub fn snapshot(&self) -> TableSnapshot {
        let state = self.read_state();
        let page_size = self.page_size();

        match &state.window {
            Some(window) => TableSnapshot {
                page: Some(window.page),
                page_size,
                total_count: window.total_count,
                last_page: window.last_page(),
                loading: state.loading,
                row_click: state.row_click,
                artworks: window.artworks.clone(),
                visible_selection: window.visible_selection(&state.selection),
                selected_total: state.selection.len(),
            },
            None => TableSnapshot {
                page: None,
                page_size,
                total_count: 0,
                last_page: 0,
                loading: state.loading,
                row_click: state.row_click,
                artworks: Vec::new(),
                visible_selection: Vec::new(),
                selected_total: state.selection.len(),
            },
        }
    }

    /// Selected records on the current page, derived on every call
    pub fn visible_selection(&self) -> Vec<Artwork> {
        let state = self.read_state();
        state
            .window
            .as_ref()
            .map(|w| w.visible_selection(&state.selection))
            .unwrap_or_default()
    }

    /// Every selected id across all pages, ascending
    pub fn selected_ids(&self) -> Vec<ArtworkId> {
        self.read_state().selection.sorted_ids()
    }

    pub fn current_page(&self) -> Option<u32> {
        self.read_state().window.as_ref().map(|w| w.page)
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    // ========================================================================
    // WRITES
    // ========================================================================

    /// Fetch page `page` and make it the displayed window.
    ///
    /// On failure the previous window and selection stay as they were.
    pub async fn go_to_page(&self, page: u32) -> AppResult<TableSnapshot> {
        let _writer = self.writer.lock().await;

        self.check_page_bounds(page)?;

        info!("Loading page {}", page);
        let loading = LoadingFlag::raise(&self.state);
        let fetched = self.source.fetch_page(page).await;
        drop(loading);

        let loaded = fetched.and_then(|fetched| {
            let window = PageWindow::from_page(fetched, self.page_size());
            // Before the first load there is no total to check against up front
            if !window.is_valid_page(page) {
                return Err(AppError::InvalidPage(page));
            }

            let mut state = self.write_state();
            let visible = window.visible_selection(&state.selection).len();
            let loaded = PageLoaded::new(
                window.page,
                window.total_count,
                window.artworks.len(),
                visible,
            );
            state.window = Some(window);
            Ok(loaded)
        });

        match loaded {
            Ok(event) => {
                debug!(
                    "Page {} loaded: {} records, {} selected on page",
                    event.page, event.record_count, event.visible_selected
                );
                self.event_bus.emit(event);
                Ok(self.snapshot())
            }
            Err(e) => {
                warn!("Failed to load page {}: {}", page, e);
                self.event_bus.emit(PageLoadFailed::new(page, e.to_string()));
                Err(e)
            }
        }
    }

    /// Replace the current page's checkbox state with `checked`.
    ///
    /// Checked ids on the page are selected, unchecked page ids are
    /// deselected, and ids on every other page are left alone. Ids not on the
    /// current page are ignored.
    pub async fn set_visible_selection(&self, checked: &[ArtworkId]) -> AppResult<SelectionDelta> {
        let _writer = self.writer.lock().await;

        let chosen: HashSet<ArtworkId> = checked.iter().copied().collect();

        let (page, delta, selected_total) = {
            let mut guard = self.write_state();
            let state = &mut *guard;

            let Some(window) = state.window.as_ref() else {
                if !chosen.is_empty() {
                    warn!("Ignoring selection of {} rows: no page loaded", chosen.len());
                }
                return Ok(SelectionDelta::default());
            };

            let foreign = chosen.iter().filter(|id| !window.contains(**id)).count();
            if foreign > 0 {
                warn!(
                    "Ignoring {} selected ids that are not on page {}",
                    foreign, window.page
                );
            }

            let delta = state.selection.apply_page_selection(&window.artworks, &chosen);
            (window.page, delta, state.selection.len())
        };

        if !delta.is_empty() {
            debug!(
                "Page {} selection: +{} -{} ({} total)",
                page, delta.added, delta.removed, selected_total
            );
            self.event_bus.emit(SelectionChanged::new(
                page,
                delta.added,
                delta.removed,
                selected_total,
            ));
        }

        Ok(delta)
    }

    /// Select the first `count` rows across all pages.
    ///
    /// Pages are fetched one at a time from page 1. The walk runs on a copy
    /// of the selection set and is committed only after the last fetch, so a
    /// failed fetch leaves the selection untouched. The displayed window is
    /// never replaced.
    pub async fn select_first_n(&self, count: BulkSelectCount) -> AppResult<BulkSelectionOutcome> {
        let _writer = self.writer.lock().await;

        let (known_last_page, mut working) = {
            let state = self.read_state();
            (
                state.window.as_ref().map(PageWindow::last_page),
                state.selection.clone(),
            )
        };

        info!("Selecting first {} rows", count);
        let mut walk = BulkSelection::new(count, known_last_page, self.page_size());

        while let Some(page) = walk.next_page() {
            let fetched = match self.source.fetch_page(page).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    warn!("Bulk selection aborted at page {}: {}", page, e);
                    self.event_bus.emit(PageLoadFailed::new(page, e.to_string()));
                    return Err(e);
                }
            };

            let phase = walk.apply_page(&mut working, &fetched)?;
            debug!(
                "Bulk selection page {}: {:?}, {} rows left",
                page,
                phase,
                walk.remaining()
            );
        }

        let outcome = walk.outcome(&working);
        self.write_state().selection = working;

        info!(
            "Bulk selection done: {} pages, +{} -{} ({} total)",
            outcome.pages_visited, outcome.newly_selected, outcome.deselected, outcome.selected_total
        );
        self.event_bus.emit(BulkSelectionCompleted::new(
            outcome.requested,
            outcome.pages_visited,
            outcome.last_page_touched,
            outcome.newly_selected,
            outcome.deselected,
            outcome.selected_total,
        ));

        Ok(outcome)
    }

    /// Toggle whether row clicks (not only checkboxes) change the selection.
    /// Does not touch the selection set or the window.
    pub fn set_row_click(&self, enabled: bool) {
        let changed = {
            let mut state = self.write_state();
            let changed = state.row_click != enabled;
            state.row_click = enabled;
            changed
        };

        if changed {
            self.event_bus.emit(RowClickModeChanged::new(enabled));
        }
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Pages are 1-based and, once the total is known, bounded by it.
    fn check_page_bounds(&self, page: u32) -> AppResult<()> {
        let in_range = match &self.read_state().window {
            Some(window) => window.is_valid_page(page),
            None => page >= 1,
        };
        if in_range {
            Ok(())
        } else {
            Err(AppError::InvalidPage(page))
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SelectionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SelectionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
