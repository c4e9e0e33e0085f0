// src/main.rs
//
// Terminal front end for the artworks table.
// Reads one command per line and renders the current page after each one.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use artworks_table::application::commands::*;
use artworks_table::application::dto::{TablePageDto, UpdatePageSelectionDto};
use artworks_table::application::ErrorResponse;
use artworks_table::config::AppConfig;
use artworks_table::events::{BulkSelectionCompleted, PageLoadFailed};
use artworks_table::logging::init_logging;
use artworks_table::AppState;

const HELP: &str = "\
commands:
  n | next              next page
  p | prev              previous page
  page <N>              go to page N
  check <ID> [ID...]    check exactly these rows on this page
  toggle <ID>           flip one row on this page (row-click mode)
  all | none            check every / no row on this page
  select <N>            select the first N rows across all pages
  rowclick on|off       toggle row-click mode
  show                  redraw the table
  help                  this text
  q | quit              exit";

#[derive(Debug, Parser)]
#[command(name = "artworks-table", version, about = "Browse artworks and select rows across pages")]
struct Args {
    /// JSON config file (defaults to the per-user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to show first
    #[arg(short, long, default_value_t = 1)]
    page: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 1. CONFIGURATION & LOGGING
    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_logging(&config.log_level).context("initializing logging")?;
    info!("Using collection API at {}", config.artworks_url());

    // 2. APPLICATION STATE
    let state = Arc::new(AppState::from_config(&config).context("building application state")?);

    // 3. EVENT WIRING
    state.event_bus.subscribe::<PageLoadFailed, _>(|event| {
        eprintln!("! page {} could not be loaded: {}", event.page, event.reason);
    });
    state.event_bus.subscribe::<BulkSelectionCompleted, _>(|event| {
        println!(
            "selected first {} rows across {} page(s): +{} -{}",
            event.requested, event.pages_visited, event.newly_selected, event.deselected
        );
    });

    // 4. INITIAL LOAD
    match load_page(args.page, &state).await {
        Ok(table) => render(&table),
        Err(e) => report(&e),
    }
    println!("{}", HELP);

    // 5. COMMAND LOOP
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();

        let result = match command {
            "q" | "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "n" | "next" => next_page(&state).await,
            "p" | "prev" => previous_page(&state).await,
            "show" => get_table_state(&state).await,
            "page" => match rest.first().and_then(|raw| raw.parse::<u32>().ok()) {
                Some(page) => load_page(page, &state).await,
                None => {
                    eprintln!("usage: page <N>");
                    continue;
                }
            },
            "check" => match parse_ids(&rest) {
                Some(ids) => check(ids, &state).await,
                None => {
                    eprintln!("usage: check <ID> [ID...]");
                    continue;
                }
            },
            "toggle" => match parse_ids(&rest).as_deref() {
                Some([id]) => toggle(*id, &state).await,
                _ => {
                    eprintln!("usage: toggle <ID>");
                    continue;
                }
            },
            "all" => {
                let ids: Vec<i64> = match get_table_state(&state).await {
                    Ok(table) => table.artworks.iter().map(|a| a.id).collect(),
                    Err(e) => {
                        report(&e);
                        continue;
                    }
                };
                check(ids, &state).await
            }
            "none" => check(Vec::new(), &state).await,
            "select" => {
                let raw = rest.first().copied().unwrap_or_default().to_string();
                select_rows(raw, &state).await.map(|bulk| bulk.table)
            }
            "rowclick" => match rest.first().copied() {
                Some("on") => set_row_click(true, &state).await,
                Some("off") => set_row_click(false, &state).await,
                _ => {
                    eprintln!("usage: rowclick on|off");
                    continue;
                }
            },
            other => {
                eprintln!("unknown command '{}', type 'help'", other);
                continue;
            }
        };

        match result {
            Ok(table) => render(&table),
            Err(e) => report(&e),
        }
    }

    info!("Bye");
    Ok(())
}

fn parse_ids(words: &[&str]) -> Option<Vec<i64>> {
    if words.is_empty() {
        return None;
    }
    words.iter().map(|w| w.trim_matches(',').parse().ok()).collect()
}

async fn check(checked_ids: Vec<i64>, state: &AppState) -> Result<TablePageDto, String> {
    update_page_selection(UpdatePageSelectionDto { checked_ids }, state)
        .await
        .map(|change| change.table)
}

/// Row-click toggling only applies when row-click mode is on
async fn toggle(id: i64, state: &AppState) -> Result<TablePageDto, String> {
    let table = get_table_state(state).await?;
    if !table.row_click {
        return Err("row-click mode is off; use 'check' instead".to_string());
    }

    let mut checked = table.selected_ids.clone();
    match checked.iter().position(|selected| *selected == id) {
        Some(index) => {
            checked.remove(index);
        }
        None => checked.push(id),
    }
    check(checked, state).await
}

fn render(table: &TablePageDto) {
    if table.page == 0 {
        println!("(no page loaded)");
        return;
    }

    println!();
    println!(
        "{:<3} {:>8}  {:<40}  {:<16}  {:<28}  {:<11}",
        "", "ID", "Title", "Origin", "Artist", "Dates"
    );
    for artwork in &table.artworks {
        let mark = if table.selected_ids.contains(&artwork.id) { "[x]" } else { "[ ]" };
        println!(
            "{:<3} {:>8}  {:<40}  {:<16}  {:<28}  {:<11}",
            mark,
            artwork.id,
            clip(&artwork.title, 40),
            clip(&artwork.place_of_origin, 16),
            clip(first_line(&artwork.artist_display), 28),
            artwork.dates,
        );
    }
    println!(
        "page {}/{} · {} records · {} selected in total{}{}",
        table.page,
        table.total_pages,
        table.total_records,
        table.selected_total,
        if table.row_click { " · row-click on" } else { "" },
        if table.loading { " · loading…" } else { "" },
    );
}

fn report(raw: &str) {
    match serde_json::from_str::<ErrorResponse>(raw) {
        Ok(error) => match error.details {
            Some(details) => eprintln!("! {} ({})", error.message, details),
            None => eprintln!("! {}", error.message),
        },
        Err(_) => eprintln!("! {}", raw),
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
