use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::db::{Database, StoredValue};
use crate::model::{SearchResultSet, VideoResult};

pub const SEARCH_CACHE_KEY: &str = "searchVideos";

pub trait SlotStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<bool>;
}

impl SlotStore for Database {
    fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        self.get_slot(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.put_slot(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        self.delete_slot(key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedResults {
    pub videos: SearchResultSet,
    pub stored_at: Option<String>,
}

pub struct SearchCache<'a> {
    store: &'a dyn SlotStore,
}

impl<'a> SearchCache<'a> {
    pub fn new(store: &'a dyn SlotStore) -> Self {
        Self { store }
    }

    // Unreadable or malformed slots read as empty.
    pub fn load(&self) -> CachedResults {
        let stored = match self.store.get(SEARCH_CACHE_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return CachedResults::default(),
            Err(err) => {
                warn!("search cache unreadable, treating as empty: {err:#}");
                return CachedResults::default();
            }
        };

        match serde_json::from_str::<Vec<VideoResult>>(&stored.value) {
            Ok(videos) => {
                debug!(count = videos.len(), "loaded cached search results");
                CachedResults {
                    videos,
                    stored_at: Some(stored.updated_at),
                }
            }
            Err(err) => {
                warn!("search cache malformed, treating as empty: {err}");
                CachedResults::default()
            }
        }
    }

    pub fn save(&self, videos: &[VideoResult]) -> Result<()> {
        let encoded =
            serde_json::to_string(videos).context("failed to encode search results")?;
        self.store
            .set(SEARCH_CACHE_KEY, &encoded)
            .context("failed to write search cache")
    }

    pub fn clear(&self) -> Result<bool> {
        self.store
            .remove(SEARCH_CACHE_KEY)
            .context("failed to clear search cache")
    }
}
