//! In-process mapping store
//!
//! Both indexes live behind one lock, so the uniqueness checks and the insert
//! in `create` happen as a single step.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;

use super::{MappingStore, UrlMapping};
use crate::errors::{MinilinkError, Result};

#[derive(Default)]
struct MemoryState {
    by_code: HashMap<String, UrlMapping>,
    /// original_url -> short_code
    by_url: HashMap<String, String>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>> {
        let state = self.state.read();
        Ok(state
            .by_url
            .get(original_url)
            .and_then(|code| state.by_code.get(code))
            .cloned())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>> {
        Ok(self.state.read().by_code.get(short_code).cloned())
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool> {
        Ok(self.state.read().by_code.contains_key(short_code))
    }

    async fn create(&self, original_url: &str, short_code: &str) -> Result<UrlMapping> {
        let mut state = self.state.write();

        if state.by_url.contains_key(original_url) {
            return Err(MinilinkError::duplicate_url(format!(
                "URL already mapped: {}",
                original_url
            )));
        }
        if state.by_code.contains_key(short_code) {
            return Err(MinilinkError::duplicate_code(format!(
                "Short code already taken: {}",
                short_code
            )));
        }

        let mapping = UrlMapping::new(original_url, short_code);
        state
            .by_url
            .insert(original_url.to_string(), short_code.to_string());
        state
            .by_code
            .insert(short_code.to_string(), mapping.clone());

        info!("Url mapping created: {} -> {}", short_code, original_url);
        Ok(mapping)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<UrlMapping>> {
        let mut state = self.state.write();
        Ok(state.by_code.get_mut(short_code).map(|mapping| {
            mapping.click_count += 1;
            mapping.clone()
        }))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().by_code.len() as u64)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
