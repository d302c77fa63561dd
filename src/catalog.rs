use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::CatalogError;
use crate::models::{CatalogItem, ItemDraft, ListFilter};
use crate::rating;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2030;

/// Storage seam for the catalog. The in-memory implementation below is the
/// default; a persistent backend slots in behind the same trait without the
/// handlers changing.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn create(&self, draft: ItemDraft) -> Result<CatalogItem, CatalogError>;
    async fn get(&self, id: &str) -> Result<CatalogItem, CatalogError>;
    async fn update(&self, id: &str, draft: ItemDraft) -> Result<CatalogItem, CatalogError>;
    async fn delete(&self, id: &str) -> Result<(), CatalogError>;
    async fn list(&self, filter: ListFilter) -> Result<Vec<CatalogItem>, CatalogError>;
}

/// Rejects malformed non-score fields, then delegates the scores to the
/// rating engine. Runs fully before any mutation so a failed call never
/// leaves the store partially changed.
fn validate_draft(draft: &ItemDraft) -> Result<(), CatalogError> {
    if draft.title.trim().is_empty() {
        return Err(CatalogError::Field("title must not be empty".to_string()));
    }
    if draft.genre.trim().is_empty() {
        return Err(CatalogError::Field("genre must not be empty".to_string()));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&draft.year) {
        return Err(CatalogError::Field(format!(
            "year must be between {MIN_YEAR} and {MAX_YEAR}, got {}",
            draft.year
        )));
    }
    rating::validate(&draft.ratings)
}

/// In-memory catalog. A single mutex guards the collection, so every
/// operation is atomic and id assignment is serialized: concurrent creates
/// cannot collide, and no caller observes a half-applied mutation. Insertion
/// order is preserved for reproducible listings.
#[derive(Default)]
pub struct MemoryCatalog {
    items: Mutex<Vec<CatalogItem>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_item(id: String, draft: ItemDraft) -> CatalogItem {
        let overall_rating = rating::compute_overall(&draft.ratings);
        CatalogItem {
            id,
            title: draft.title,
            content_type: draft.content_type,
            year: draft.year,
            genre: draft.genre,
            streaming_platform: draft.streaming_platform,
            description: draft.description,
            ratings: draft.ratings,
            overall_rating,
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn create(&self, draft: ItemDraft) -> Result<CatalogItem, CatalogError> {
        validate_draft(&draft)?;
        let mut items = self.items.lock().await;
        let id = Uuid::new_v4().to_string();
        let item = Self::build_item(id, draft);
        items.push(item.clone());
        Ok(item)
    }

    async fn get(&self, id: &str) -> Result<CatalogItem, CatalogError> {
        let items = self.items.lock().await;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, draft: ItemDraft) -> Result<CatalogItem, CatalogError> {
        validate_draft(&draft)?;
        let mut items = self.items.lock().await;
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        // Full replacement: id preserved, overall recomputed from the
        // submitted ratings.
        *slot = Self::build_item(id.to_string(), draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let mut items = self.items.lock().await;
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        items.remove(index);
        Ok(())
    }

    async fn list(&self, filter: ListFilter) -> Result<Vec<CatalogItem>, CatalogError> {
        let items = self.items.lock().await;
        let matches = items
            .iter()
            .filter(|item| {
                filter
                    .streaming_platform
                    .map_or(true, |p| item.streaming_platform == p)
                    && filter.content_type.map_or(true, |c| item.content_type == c)
            })
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matches)
    }
}
