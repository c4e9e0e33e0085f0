use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the remote collection.
pub type ArtworkId = i64;

/// One artwork record as fetched from the remote collection.
/// Records are immutable once fetched; the table never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl Artwork {
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Human-readable date range, e.g. `1880–1885` or `1880`
    pub fn date_range(&self) -> Option<String> {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start != end => Some(format!("{}–{}", start, end)),
            (Some(start), _) => Some(start.to_string()),
            (None, Some(end)) => Some(end.to_string()),
            (None, None) => None,
        }
    }
}

impl std::fmt::Display for Artwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.title)
    }
}

/// A single page as reported by the remote collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkPage {
    pub page: u32,
    pub artworks: Vec<Artwork>,
    pub total_count: u64,
}

impl ArtworkPage {
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.artworks.iter().map(|a| a.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_formats() {
        let mut artwork = Artwork::new(1, "Nighthawks");
        assert_eq!(artwork.date_range(), None);

        artwork.date_start = Some(1942);
        artwork.date_end = Some(1942);
        assert_eq!(artwork.date_range().as_deref(), Some("1942"));

        artwork.date_end = Some(1943);
        assert_eq!(artwork.date_range().as_deref(), Some("1942–1943"));
    }
}
