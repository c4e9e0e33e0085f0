// src/domain/selection/bulk.rs
//
// Bulk "select the first N rows across all pages".
//
// The walk is pure: the service feeds it one fetched page at a time and
// owns all I/O. Pages are consumed strictly in order because each step
// depends on the budget left by the previous one.
//
// State machine per invocation:
//   Idle -> Fetching(p) -> Trimming(p) -> Done
//                       -> Accumulating(p) -> Fetching(p + 1) | Done

use serde::{Deserialize, Serialize};

use super::page_window::last_page_for;
use super::selection_set::SelectionSet;
use super::value_objects::BulkSelectCount;
use crate::domain::artwork::{ArtworkId, ArtworkPage};
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkPhase {
    Idle,
    Fetching(u32),
    Trimming(u32),
    Accumulating(u32),
    Done,
}

/// Summary of a finished bulk selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSelectionOutcome {
    pub requested: usize,
    pub pages_visited: u32,
    /// Last page the walk touched, `None` when nothing was fetched
    pub last_page_touched: Option<u32>,
    pub newly_selected: usize,
    pub deselected: usize,
    pub selected_total: usize,
}

#[derive(Debug, Clone)]
pub struct BulkSelection {
    requested: usize,
    remaining: usize,
    cursor: u32,
    last_page: Option<u32>,
    page_size: usize,
    phase: BulkPhase,
    pages_visited: u32,
    last_page_touched: Option<u32>,
    newly_selected: usize,
    deselected: usize,
}

impl BulkSelection {
    /// `known_last_page` comes from the displayed page window, if any page has
    /// been loaded. Without it the first fetched page establishes the bound.
    pub fn new(count: BulkSelectCount, known_last_page: Option<u32>, page_size: usize) -> Self {
        Self {
            requested: count.get(),
            remaining: count.get(),
            cursor: 1,
            last_page: known_last_page,
            page_size,
            phase: BulkPhase::Idle,
            pages_visited: 0,
            last_page_touched: None,
            newly_selected: 0,
            deselected: 0,
        }
    }

    pub fn phase(&self) -> BulkPhase {
        self.phase
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Page to fetch next, or `None` once the walk is over.
    pub fn next_page(&mut self) -> Option<u32> {
        if self.phase == BulkPhase::Done {
            return None;
        }

        let within_bounds = self.last_page.map_or(true, |last| self.cursor <= last);
        if self.remaining > 0 && within_bounds {
            self.phase = BulkPhase::Fetching(self.cursor);
            Some(self.cursor)
        } else {
            self.phase = BulkPhase::Done;
            None
        }
    }

    /// Applies the page fetched for the current cursor to `selection`.
    pub fn apply_page(
        &mut self,
        selection: &mut SelectionSet,
        page: &ArtworkPage,
    ) -> DomainResult<BulkPhase> {
        let expected = match self.phase {
            BulkPhase::Fetching(p) => p,
            other => {
                return Err(DomainError::InvalidStateTransition(format!(
                    "page {} applied while {:?}",
                    page.page, other
                )))
            }
        };
        if page.page != expected {
            return Err(DomainError::InvalidStateTransition(format!(
                "expected page {}, got page {}",
                expected, page.page
            )));
        }

        self.pages_visited += 1;
        self.last_page_touched = Some(page.page);
        self.last_page = Some(last_page_for(page.total_count, self.page_size));

        let already_selected: Vec<ArtworkId> = selection.selected_on(&page.artworks);

        if already_selected.len() > self.remaining {
            self.phase = BulkPhase::Trimming(page.page);
            for id in &already_selected[self.remaining..] {
                if selection.remove(*id) {
                    self.deselected += 1;
                }
            }
            self.phase = BulkPhase::Done;
            return Ok(self.phase);
        }

        if page.artworks.is_empty() {
            self.phase = BulkPhase::Done;
            return Ok(self.phase);
        }

        self.phase = BulkPhase::Accumulating(page.page);
        let take = self.remaining.min(page.artworks.len());
        for artwork in &page.artworks[..take] {
            if selection.insert(artwork.id) {
                self.newly_selected += 1;
            }
        }
        self.remaining -= take;
        self.cursor += 1;
        Ok(self.phase)
    }

    pub fn outcome(&self, selection: &SelectionSet) -> BulkSelectionOutcome {
        BulkSelectionOutcome {
            requested: self.requested,
            pages_visited: self.pages_visited,
            last_page_touched: self.last_page_touched,
            newly_selected: self.newly_selected,
            deselected: self.deselected,
            selected_total: selection.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::Artwork;
    use crate::domain::selection::PAGE_SIZE;

    /// 97 records, ids 1..=97, ten per page
    fn page(n: u32) -> ArtworkPage {
        let first = (n as i64 - 1) * 10 + 1;
        let last = (first + 9).min(97);
        ArtworkPage {
            page: n,
            artworks: (first..=last).map(|id| Artwork::new(id, "Untitled")).collect(),
            total_count: 97,
        }
    }

    fn run(selection: &mut SelectionSet, count: usize) -> BulkSelectionOutcome {
        let mut walk = BulkSelection::new(BulkSelectCount::new(count), Some(10), PAGE_SIZE);
        while let Some(p) = walk.next_page() {
            walk.apply_page(selection, &page(p)).unwrap();
        }
        walk.outcome(selection)
    }

    #[test]
    fn test_zero_never_fetches() {
        let mut walk = BulkSelection::new(BulkSelectCount::ZERO, Some(10), PAGE_SIZE);
        assert_eq!(walk.next_page(), None);
        assert_eq!(walk.phase(), BulkPhase::Done);
    }

    #[test]
    fn test_spans_pages() {
        let mut selection = SelectionSet::new();
        let outcome = run(&mut selection, 25);

        assert_eq!(selection.len(), 25);
        assert_eq!(outcome.last_page_touched, Some(3));
        assert!((1..=25).all(|id| selection.contains(id)));
        assert!(!selection.contains(26));
    }

    #[test]
    fn test_trims_overfull_page() {
        let mut selection = SelectionSet::new();
        for id in [2, 3, 4, 5, 6, 7, 8, 9] {
            selection.insert(id);
        }

        let outcome = run(&mut selection, 3);

        assert_eq!(selection.sorted_ids(), vec![2, 3, 4]);
        assert_eq!(outcome.pages_visited, 1);
        assert_eq!(outcome.deselected, 5);
    }

    #[test]
    fn test_unknown_bound_uses_first_page_total() {
        let mut selection = SelectionSet::new();
        let mut walk = BulkSelection::new(BulkSelectCount::new(500), None, PAGE_SIZE);
        while let Some(p) = walk.next_page() {
            walk.apply_page(&mut selection, &page(p)).unwrap();
        }

        assert_eq!(selection.len(), 97);
        assert_eq!(walk.outcome(&selection).pages_visited, 10);
    }

    #[test]
    fn test_rejects_out_of_order_page() {
        let mut selection = SelectionSet::new();
        let mut walk = BulkSelection::new(BulkSelectCount::new(5), Some(10), PAGE_SIZE);
        walk.next_page();
        assert!(walk.apply_page(&mut selection, &page(2)).is_err());
    }
}
