use serde::{Deserialize, Serialize};

use super::selection_set::SelectionSet;
use crate::domain::artwork::{Artwork, ArtworkId, ArtworkPage};

/// Rows per page. The remote collection is always queried with this limit.
pub const PAGE_SIZE: usize = 10;

/// Last valid 1-based page for `total_count` records, `ceil(total / page_size)`.
/// Zero when there are no records at all.
pub fn last_page_for(total_count: u64, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(page_size as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The currently displayed page plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: usize,
    pub artworks: Vec<Artwork>,
    pub total_count: u64,
}

impl PageWindow {
    pub fn from_page(page: ArtworkPage, page_size: usize) -> Self {
        Self {
            page: page.page,
            page_size,
            artworks: page.artworks,
            total_count: page.total_count,
        }
    }

    pub fn last_page(&self) -> u32 {
        last_page_for(self.total_count, self.page_size)
    }

    /// An empty collection still has a page 1.
    pub fn is_valid_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.last_page().max(1)
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.artworks.iter().any(|a| a.id == id)
    }

    /// Records on this page whose id is selected, in page order.
    /// Always derived; never cache the result.
    pub fn visible_selection(&self, selection: &SelectionSet) -> Vec<Artwork> {
        self.artworks
            .iter()
            .filter(|a| selection.contains(a.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(page: u32, ids: &[i64], total: u64) -> PageWindow {
        PageWindow::from_page(
            ArtworkPage {
                page,
                artworks: ids.iter().map(|id| Artwork::new(*id, "Untitled")).collect(),
                total_count: total,
            },
            PAGE_SIZE,
        )
    }

    #[test]
    fn test_last_page_rounds_up() {
        assert_eq!(last_page_for(97, 10), 10);
        assert_eq!(last_page_for(100, 10), 10);
        assert_eq!(last_page_for(101, 10), 11);
        assert_eq!(last_page_for(0, 10), 0);
    }

    #[test]
    fn test_valid_page_bounds() {
        let w = window(1, &[1, 2], 97);
        assert!(!w.is_valid_page(0));
        assert!(w.is_valid_page(10));
        assert!(!w.is_valid_page(11));

        let empty = window(1, &[], 0);
        assert!(empty.is_valid_page(1));
        assert!(!empty.is_valid_page(2));
    }

    #[test]
    fn test_visible_selection_is_intersection() {
        let w = window(2, &[11, 12, 13], 30);
        let mut selection = SelectionSet::new();
        selection.insert(12);
        selection.insert(1);

        let visible: Vec<i64> = w.visible_selection(&selection).iter().map(|a| a.id).collect();
        assert_eq!(visible, vec![12]);
    }
}
