// src/repositories/artwork_page_source.rs

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

#[cfg(test)]
use mockall::automock;

use crate::domain::{validate_artwork_page, ArtworkPage};
use crate::error::{AppError, AppResult};
use crate::integrations::ArticClient;

/// Remote page source: one 1-based page of artworks plus the total count.
///
/// Either the whole page comes back or an error does.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArtworkPageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> AppResult<ArtworkPage>;

    fn page_size(&self) -> usize;
}

pub struct ArticPageSource {
    client: Arc<ArticClient>,
    page_size: usize,
}

impl ArticPageSource {
    pub fn new(client: Arc<ArticClient>, page_size: usize) -> Self {
        Self { client, page_size }
    }
}

#[async_trait]
impl ArtworkPageSource for ArticPageSource {
    async fn fetch_page(&self, page: u32) -> AppResult<ArtworkPage> {
        let fetched = self.client.fetch_artworks(page, self.page_size).await?;

        validate_artwork_page(&fetched, self.page_size).map_err(|e| {
            warn!("Discarding malformed page {}: {}", page, e);
            AppError::FetchFailed(format!("Malformed page {}: {}", page, e))
        })?;

        Ok(fetched)
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}
