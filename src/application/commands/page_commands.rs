// src/application/commands/page_commands.rs
//
// Paging Command Handlers
//
// RULES:
// - Accept plain values / DTOs
// - Call the selection service
// - Return DTOs
// - Never contain selection logic

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};

/// Load a 1-based page
pub async fn load_page(page: u32, state: &AppState) -> Result<TablePageDto, String> {
    let snapshot = state
        .selection_service
        .go_to_page(page)
        .await
        .to_error_response()?;

    Ok(TablePageDto::from(snapshot))
}

/// Load the page after the current one (page 1 if nothing is loaded yet)
pub async fn next_page(state: &AppState) -> Result<TablePageDto, String> {
    let target = state
        .selection_service
        .current_page()
        .map_or(1, |page| page.saturating_add(1));

    load_page(target, state).await
}

/// Load the page before the current one, staying on page 1
pub async fn previous_page(state: &AppState) -> Result<TablePageDto, String> {
    let target = state
        .selection_service
        .current_page()
        .map_or(1, |page| page.saturating_sub(1).max(1));

    load_page(target, state).await
}

/// Current table state, without fetching
pub async fn get_table_state(state: &AppState) -> Result<TablePageDto, String> {
    Ok(TablePageDto::from(state.selection_service.snapshot()))
}
