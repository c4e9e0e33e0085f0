// src/application/commands/selection_commands.rs
//
// Selection Command Handlers
//
// RULES:
// - Accept plain values / DTOs
// - Call the selection service
// - Return DTOs
// - Never contain selection logic

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::domain::BulkSelectCount;
use crate::error::AppError;

/// Checkbox state of the current page changed
pub async fn update_page_selection(
    dto: UpdatePageSelectionDto,
    state: &AppState,
) -> Result<SelectionChangeDto, String> {
    let delta = state
        .selection_service
        .set_visible_selection(&dto.checked_ids)
        .await
        .to_error_response()?;

    Ok(SelectionChangeDto::new(delta, state.selection_service.snapshot()))
}

/// "Select N rows" confirmation. `count` is the raw text of the input field.
pub async fn select_rows(count: String, state: &AppState) -> Result<BulkSelectionDto, String> {
    let count: BulkSelectCount = count
        .parse()
        .map_err(AppError::from)
        .to_error_response()?;

    let outcome = state
        .selection_service
        .select_first_n(count)
        .await
        .to_error_response()?;

    Ok(BulkSelectionDto::new(outcome, state.selection_service.snapshot()))
}

/// Toggle row-click selection
pub async fn set_row_click(enabled: bool, state: &AppState) -> Result<TablePageDto, String> {
    state.selection_service.set_row_click(enabled);
    Ok(TablePageDto::from(state.selection_service.snapshot()))
}
