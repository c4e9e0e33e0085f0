// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the rendering layer and services
// - Commands accept DTOs, return DTOs
// - Commands convert errors into serialized ErrorResponse strings
// - Commands NEVER contain selection logic

pub mod page_commands;
pub mod selection_commands;

pub use page_commands::*;
pub use selection_commands::*;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::application::{dto::UpdatePageSelectionDto, ErrorResponse, ErrorType};
    use crate::application::state::AppState;
    use crate::domain::{Artwork, ArtworkPage, PAGE_SIZE};
    use crate::error::AppResult;
    use crate::events::EventBus;
    use crate::repositories::ArtworkPageSource;
    use crate::services::SelectionService;

    /// 35 artworks, ids 1..=35
    struct SmallCollection;

    #[async_trait]
    impl ArtworkPageSource for SmallCollection {
        async fn fetch_page(&self, page: u32) -> AppResult<ArtworkPage> {
            let first = (page as i64 - 1) * PAGE_SIZE as i64 + 1;
            let last = (first + PAGE_SIZE as i64 - 1).min(35);
            Ok(ArtworkPage {
                page,
                artworks: (first..=last).map(|id| Artwork::new(id, "Untitled")).collect(),
                total_count: 35,
            })
        }

        fn page_size(&self) -> usize {
            PAGE_SIZE
        }
    }

    fn app_state() -> AppState {
        let bus = Arc::new(EventBus::new());
        let service = Arc::new(SelectionService::new(Arc::new(SmallCollection), bus.clone()));
        AppState::new(bus, service)
    }

    fn error_type(raw: &str) -> ErrorType {
        serde_json::from_str::<ErrorResponse>(raw).unwrap().error_type
    }

    #[tokio::test]
    async fn test_paging_commands() {
        let state = app_state();

        let table = next_page(&state).await.unwrap();
        assert_eq!(table.page, 1);
        assert_eq!(table.total_pages, 4);

        let table = previous_page(&state).await.unwrap();
        assert_eq!(table.page, 1);

        let table = load_page(4, &state).await.unwrap();
        assert_eq!(table.artworks.len(), 5);

        let err = next_page(&state).await.unwrap_err();
        assert_eq!(error_type(&err), ErrorType::InvalidPage);
        assert_eq!(get_table_state(&state).await.unwrap().page, 4);
    }

    #[tokio::test]
    async fn test_update_page_selection_reports_checked_rows() {
        let state = app_state();
        load_page(2, &state).await.unwrap();

        let change = update_page_selection(
            UpdatePageSelectionDto { checked_ids: vec![11, 14] },
            &state,
        )
        .await
        .unwrap();

        assert_eq!(change.added, 2);
        assert_eq!(change.table.selected_ids, vec![11, 14]);
    }

    #[tokio::test]
    async fn test_select_rows_parses_input() {
        let state = app_state();
        load_page(1, &state).await.unwrap();

        let bulk = select_rows(" 12 ".to_string(), &state).await.unwrap();
        assert_eq!(bulk.selected_total, 12);
        assert_eq!(bulk.last_page_touched, Some(2));
        assert_eq!(bulk.table.selected_ids.len(), 10);
    }

    #[tokio::test]
    async fn test_select_rows_rejects_bad_input() {
        let state = app_state();

        for input in ["-4", "many"] {
            let err = select_rows(input.to_string(), &state).await.unwrap_err();
            assert_eq!(error_type(&err), ErrorType::InvalidCount);
        }
        assert_eq!(get_table_state(&state).await.unwrap().selected_total, 0);
    }

    #[tokio::test]
    async fn test_set_row_click() {
        let state = app_state();
        let table = set_row_click(false, &state).await.unwrap();
        assert!(!table.row_click);
    }
}
