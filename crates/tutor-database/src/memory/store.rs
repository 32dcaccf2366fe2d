//! In-memory user store backed by `DashMap`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use tutor_core::config::MemoryRowSeed;
use tutor_core::result::AppResult;
use tutor_core::types::LookupHandle;
use tutor_entity::user::UserRecord;

use crate::store::UserStore;

/// User store held entirely in process memory.
///
/// Suitable for development and tests only; rows are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    rows: Arc<DashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with configured rows.
    pub fn from_seeds(seeds: &[MemoryRowSeed]) -> Self {
        let store = Self::new();
        for seed in seeds {
            store.insert(UserRecord::new(seed.id.clone(), seed.credits.clone()));
        }
        store
    }

    /// Inserts or replaces a row.
    pub fn insert(&self, record: UserRecord) {
        self.rows.insert(record.id.clone(), record);
    }

    /// Removes a row, returning it if present.
    pub fn remove(&self, id: &str) -> Option<UserRecord> {
        self.rows.remove(id).map(|(_, record)| record)
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user(&self, handle: &LookupHandle) -> AppResult<Option<UserRecord>> {
        Ok(self
            .rows
            .get(handle.user_id().as_str())
            .map(|entry| entry.value().clone()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tutor_core::types::UserId;

    fn handle(id: &str) -> LookupHandle {
        LookupHandle::new(UserId::parse(id).expect("id"), "token")
    }

    #[tokio::test]
    async fn test_find_existing_row() {
        let store = MemoryUserStore::new();
        store.insert(UserRecord::new("u1", Some(json!(7))));

        let row = store.find_user(&handle("u1")).await.unwrap();
        assert_eq!(row, Some(UserRecord::new("u1", Some(json!(7)))));
    }

    #[tokio::test]
    async fn test_missing_row_is_none() {
        let store = MemoryUserStore::new();
        let row = store.find_user(&handle("nobody")).await.unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn test_from_seeds_keeps_raw_values() {
        let seeds = vec![
            MemoryRowSeed {
                id: "a".to_string(),
                credits: Some(json!("lots")),
            },
            MemoryRowSeed {
                id: "b".to_string(),
                credits: None,
            },
        ];
        let store = MemoryUserStore::from_seeds(&seeds);
        assert_eq!(store.len(), 2);

        let a = store.find_user(&handle("a")).await.unwrap().unwrap();
        assert_eq!(a.credits, Some(json!("lots")));
        let b = store.find_user(&handle("b")).await.unwrap().unwrap();
        assert_eq!(b.credits, None);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryUserStore::new();
        store.insert(UserRecord::new("gone", Some(json!(1))));
        assert!(store.remove("gone").is_some());
        assert!(store.is_empty());
    }
}
