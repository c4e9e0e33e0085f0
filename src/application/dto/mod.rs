// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain/service types only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Artwork, BulkSelectionOutcome, SelectionDelta};
use crate::services::TableSnapshot;

// ============================================================================
// ARTWORK DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkDto {
    pub id: i64,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
    /// Display form of the date range, empty when unknown
    pub dates: String,
}

// ============================================================================
// TABLE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePageDto {
    /// 0 until the first page has loaded
    pub page: u32,
    pub rows: usize,
    pub total_records: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub row_click: bool,
    pub artworks: Vec<ArtworkDto>,
    /// Ids to render as checked on this page
    pub selected_ids: Vec<i64>,
    pub selected_total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePageSelectionDto {
    pub checked_ids: Vec<i64>,
}

// ============================================================================
// SELECTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionChangeDto {
    pub added: usize,
    pub removed: usize,
    pub table: TablePageDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSelectionDto {
    pub requested: usize,
    pub pages_visited: u32,
    pub last_page_touched: Option<u32>,
    pub newly_selected: usize,
    pub deselected: usize,
    pub selected_total: usize,
    pub table: TablePageDto,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Artwork> for ArtworkDto {
    fn from(artwork: Artwork) -> Self {
        let dates = artwork.date_range().unwrap_or_default();
        Self {
            id: artwork.id,
            title: artwork.title,
            place_of_origin: artwork.place_of_origin.unwrap_or_default(),
            artist_display: artwork.artist_display.unwrap_or_default(),
            inscriptions: artwork.inscriptions.unwrap_or_default(),
            date_start: artwork.date_start,
            date_end: artwork.date_end,
            dates,
        }
    }
}

impl From<TableSnapshot> for TablePageDto {
    fn from(snapshot: TableSnapshot) -> Self {
        Self {
            page: snapshot.page.unwrap_or(0),
            rows: snapshot.page_size,
            total_records: snapshot.total_count,
            total_pages: snapshot.last_page,
            loading: snapshot.loading,
            row_click: snapshot.row_click,
            selected_ids: snapshot.visible_selection.iter().map(|a| a.id).collect(),
            artworks: snapshot.artworks.into_iter().map(ArtworkDto::from).collect(),
            selected_total: snapshot.selected_total,
        }
    }
}

impl SelectionChangeDto {
    pub fn new(delta: SelectionDelta, snapshot: TableSnapshot) -> Self {
        Self {
            added: delta.added,
            removed: delta.removed,
            table: TablePageDto::from(snapshot),
        }
    }
}

impl BulkSelectionDto {
    pub fn new(outcome: BulkSelectionOutcome, snapshot: TableSnapshot) -> Self {
        Self {
            requested: outcome.requested,
            pages_visited: outcome.pages_visited,
            last_page_touched: outcome.last_page_touched,
            newly_selected: outcome.newly_selected,
            deselected: outcome.deselected,
            selected_total: outcome.selected_total,
            table: TablePageDto::from(snapshot),
        }
    }
}
