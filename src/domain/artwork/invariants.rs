use std::collections::HashSet;

use super::entity::ArtworkPage;
use crate::domain::{DomainError, DomainResult};

/// Validates a fetched page before it may enter the table.
/// A page that fails here is treated as malformed and never partially applied.
pub fn validate_artwork_page(page: &ArtworkPage, page_size: usize) -> DomainResult<()> {
    validate_page_number(page.page)?;
    validate_page_length(page, page_size)?;
    validate_unique_ids(page)?;
    Ok(())
}

/// Pages are 1-based
fn validate_page_number(page: u32) -> DomainResult<()> {
    if page == 0 {
        return Err(DomainError::InvariantViolation(
            "Page numbers start at 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_page_length(page: &ArtworkPage, page_size: usize) -> DomainResult<()> {
    if page.artworks.len() > page_size {
        return Err(DomainError::InvariantViolation(format!(
            "Page {} holds {} records, more than the page size {}",
            page.page,
            page.artworks.len(),
            page_size
        )));
    }
    Ok(())
}

/// Ids key the selection set, so a page may not repeat one
fn validate_unique_ids(page: &ArtworkPage) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(page.artworks.len());
    for id in page.ids() {
        if !seen.insert(id) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate artwork id {} on page {}",
                id, page.page
            )));
        }
    }
    Ok(())
}
