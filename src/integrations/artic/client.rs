// src/integrations/artic/client.rs
//
// Art Institute of Chicago collection API client
//
// ARCHITECTURE:
// - REST client for the public `/artworks` listing
// - No authentication
// - Maps the wire format → `ArtworkPage` (NO selection state)
// - Used by `ArticPageSource`
//
// RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Any transport, status or decode failure is a single `FetchFailed`
// - Never returns a partial page

use std::time::Duration;

use log::debug;
use reqwest::{header, Client};
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::AppConfig;
use crate::domain::{Artwork, ArtworkPage};
use crate::error::{AppError, AppResult};

/// Only the columns the table shows are requested
const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Listing response wrapper
#[derive(Debug, Deserialize)]
struct ListingResponse {
    pagination: PaginationData,
    data: Vec<ArtworkData>,
}

#[derive(Debug, Deserialize)]
struct PaginationData {
    total: u64,
}

/// Artwork data from the listing. Every column except `id` may be null.
#[derive(Debug, Deserialize)]
struct ArtworkData {
    id: i64,
    title: Option<String>,
    place_of_origin: Option<String>,
    artist_display: Option<String>,
    inscriptions: Option<String>,
    date_start: Option<i32>,
    date_end: Option<i32>,
}

/// Rate limiter state
struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    async fn wait_if_needed(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// Collection API client
pub struct ArticClient {
    artworks_url: String,
    http_client: Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl ArticClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            artworks_url: config.artworks_url(),
            http_client,
            rate_limiter: Mutex::new(RateLimiter::new(Duration::from_millis(
                config.min_request_interval_ms,
            ))),
        })
    }

    pub fn artworks_url(&self) -> &str {
        &self.artworks_url
    }

    /// Fetch one 1-based page of `limit` artworks
    pub async fn fetch_artworks(&self, page: u32, limit: usize) -> AppResult<ArtworkPage> {
        self.rate_limiter.lock().await.wait_if_needed().await;

        debug!("GET {} page={} limit={}", self.artworks_url, page, limit);

        let response = self
            .http_client
            .get(&self.artworks_url)
            .header(header::ACCEPT, "application/json")
            .query(&[
                ("page", page.to_string()),
                ("limit", limit.to_string()),
                ("fields", ARTWORK_FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::FetchFailed(format!("Artworks API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::FetchFailed(format!(
                "Artworks API returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::FetchFailed(format!("Failed to read Artworks API response: {}", e)))?;

        Self::parse_listing(page, &body)
    }

    // ========================================================================
    // INTERNAL: Response mapping
    // ========================================================================

    /// Decode a listing body into a page
    fn parse_listing(page: u32, body: &str) -> AppResult<ArtworkPage> {
        let listing: ListingResponse = serde_json::from_str(body).map_err(|e| {
            AppError::FetchFailed(format!("Failed to parse Artworks API response: {}", e))
        })?;

        Ok(ArtworkPage {
            page,
            artworks: listing.data.into_iter().map(Self::map_artwork).collect(),
            total_count: listing.pagination.total,
        })
    }

    fn map_artwork(data: ArtworkData) -> Artwork {
        Artwork {
            id: data.id,
            title: data.title.unwrap_or_else(|| "Untitled".to_string()),
            place_of_origin: data.place_of_origin,
            artist_display: data.artist_display,
            inscriptions: data.inscriptions,
            date_start: data.date_start,
            date_end: data.date_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "pagination": {"total": 97, "limit": 10, "offset": 10, "total_pages": 10, "current_page": 2},
        "data": [
            {"id": 27992, "title": "A Sunday on La Grande Jatte — 1884", "place_of_origin": "France",
             "artist_display": "Georges Seurat\nFrench, 1859-1891", "inscriptions": null,
             "date_start": 1884, "date_end": 1886},
            {"id": 4, "title": null, "place_of_origin": null, "artist_display": null,
             "inscriptions": null, "date_start": null, "date_end": null}
        ],
        "info": {"license_text": "CC0"}
    }"#;

    #[test]
    fn test_client_creation() {
        let client = ArticClient::new(&AppConfig::default()).unwrap();
        assert_eq!(client.artworks_url(), "https://api.artic.edu/api/v1/artworks");
    }

    #[test]
    fn test_parse_listing() {
        let page = ArticClient::parse_listing(2, LISTING).unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total_count, 97);
        assert_eq!(page.artworks.len(), 2);
        assert_eq!(page.artworks[0].place_of_origin.as_deref(), Some("France"));
        assert_eq!(page.artworks[0].date_end, Some(1886));
        assert_eq!(page.artworks[1].title, "Untitled");
    }

    #[test]
    fn test_parse_failure_is_fetch_failed() {
        let err = ArticClient::parse_listing(1, r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, AppError::FetchFailed(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limiter_spaces_requests() {
        let mut limiter = RateLimiter::new(Duration::from_millis(1000));
        let start = Instant::now();
        limiter.wait_if_needed().await;
        limiter.wait_if_needed().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
