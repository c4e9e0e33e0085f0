use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::artwork::{Artwork, ArtworkId};

/// Durable set of selected artwork ids, independent of pagination.
///
/// Lives for the session only. Callers must only insert ids they observed
/// on a successfully fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<ArtworkId>,
}

/// What a page-scoped update changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    pub added: usize,
    pub removed: usize,
}

impl SelectionDelta {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns true if the id was not selected before
    pub fn insert(&mut self, id: ArtworkId) -> bool {
        self.ids.insert(id)
    }

    /// Returns true if the id was selected before
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        self.ids.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.ids.iter().copied()
    }

    /// Selected ids sorted ascending, for stable output
    pub fn sorted_ids(&self) -> Vec<ArtworkId> {
        let mut ids: Vec<ArtworkId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of `artworks` that are selected, in page order
    pub fn selected_on(&self, artworks: &[Artwork]) -> Vec<ArtworkId> {
        artworks
            .iter()
            .map(|a| a.id)
            .filter(|id| self.ids.contains(id))
            .collect()
    }

    /// Replaces the selection of one page with `chosen`.
    ///
    /// Ids in `chosen` that belong to the page are added, page ids missing
    /// from `chosen` are removed. Ids outside `page` are never touched, which
    /// keeps every other page's selection intact.
    pub fn apply_page_selection(
        &mut self,
        page: &[Artwork],
        chosen: &HashSet<ArtworkId>,
    ) -> SelectionDelta {
        let mut delta = SelectionDelta::default();
        for artwork in page {
            if chosen.contains(&artwork.id) {
                if self.ids.insert(artwork.id) {
                    delta.added += 1;
                }
            } else if self.ids.remove(&artwork.id) {
                delta.removed += 1;
            }
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artworks(ids: &[i64]) -> Vec<Artwork> {
        ids.iter().map(|id| Artwork::new(*id, format!("Artwork {}", id))).collect()
    }

    #[test]
    fn test_apply_page_selection_leaves_other_pages() {
        let mut set = SelectionSet::new();
        set.insert(100);
        set.insert(1);

        let page = artworks(&[1, 2, 3]);
        let chosen: HashSet<i64> = [2, 3].into_iter().collect();
        let delta = set.apply_page_selection(&page, &chosen);

        assert_eq!(delta, SelectionDelta { added: 2, removed: 1 });
        assert_eq!(set.sorted_ids(), vec![2, 3, 100]);
    }

    #[test]
    fn test_apply_page_selection_ignores_foreign_ids() {
        let mut set = SelectionSet::new();
        let page = artworks(&[1, 2]);
        let chosen: HashSet<i64> = [1, 999].into_iter().collect();
        set.apply_page_selection(&page, &chosen);

        assert!(set.contains(1));
        assert!(!set.contains(999));
    }

    #[test]
    fn test_selected_on_keeps_page_order() {
        let mut set = SelectionSet::new();
        set.insert(30);
        set.insert(10);
        assert_eq!(set.selected_on(&artworks(&[30, 20, 10])), vec![30, 10]);
    }
}
