use async_trait::async_trait;

use super::domain::ContentRecord;
use crate::errors::ServiceError;

/// Storage collaborator for content rows.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentRecord>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<ContentRecord>, ServiceError>;
    /// Insert when `record.id` is `None`, otherwise replace the row with that id.
    async fn save(&self, record: ContentRecord) -> Result<ContentRecord, ServiceError>;
    async fn delete(&self, record: &ContentRecord) -> Result<(), ServiceError>;
    /// `None` when the store produced no result container at all.
    async fn find_all_where_year_greater_than(&self, year: i64) -> Result<Option<Vec<ContentRecord>>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i64, ContentRecord>, // key: id
        last_id: i64,
    }

    #[derive(Default)]
    pub struct MockContentRepository {
        inner: Mutex<Inner>,
        year_query_yields_none: bool,
    }

    impl MockContentRepository {
        /// Pre-populate with rows; ids present on the records are kept.
        pub fn seeded(records: impl IntoIterator<Item = ContentRecord>) -> Self {
            let mut inner = Inner::default();
            for mut r in records {
                let id = r.id.unwrap_or(inner.last_id + 1);
                r.id = Some(id);
                inner.last_id = inner.last_id.max(id);
                inner.rows.insert(id, r);
            }
            Self { inner: Mutex::new(inner), year_query_yields_none: false }
        }

        /// Make the year query return no result container.
        pub fn with_empty_year_query(mut self) -> Self {
            self.year_query_yields_none = true;
            self
        }

        pub fn len(&self) -> usize {
            self.inner.lock().map(|g| g.rows.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn lock(&self) -> Result<MutexGuard<'_, Inner>, ServiceError> {
            self.inner.lock().map_err(|_| ServiceError::Db("mock store poisoned".into()))
        }
    }

    #[async_trait]
    impl ContentRepository for MockContentRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<ContentRecord>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<ContentRecord>, ServiceError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn save(&self, mut record: ContentRecord) -> Result<ContentRecord, ServiceError> {
            let mut inner = self.lock()?;
            let id = match record.id {
                Some(id) => id,
                None => inner.last_id + 1,
            };
            inner.last_id = inner.last_id.max(id);
            record.id = Some(id);
            inner.rows.insert(id, record.clone());
            Ok(record)
        }

        async fn delete(&self, record: &ContentRecord) -> Result<(), ServiceError> {
            let id = record.id.ok_or_else(|| ServiceError::not_found("Content"))?;
            self.lock()?.rows.remove(&id);
            Ok(())
        }

        async fn find_all_where_year_greater_than(&self, year: i64) -> Result<Option<Vec<ContentRecord>>, ServiceError> {
            if self.year_query_yields_none {
                return Ok(None);
            }
            let rows = self
                .lock()?
                .rows
                .values()
                .filter(|r| r.year_of_release.is_some_and(|y| y > year))
                .cloned()
                .collect();
            Ok(Some(rows))
        }
    }
}
