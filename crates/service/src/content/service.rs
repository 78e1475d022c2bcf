use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{ContentRecord, ContentTransfer};
use super::repository::ContentRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Content";

/// Content business service independent of web framework.
///
/// Callers are expected to have validated transfers already; the service only
/// refuses a transfer it cannot persist at all (missing or blank title).
pub struct ContentService<R: ContentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ContentRepository + ?Sized> ContentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Every stored row, in storage order.
    pub async fn list_all(&self) -> Result<Vec<ContentTransfer>, ServiceError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Rows with `year_of_release > year`. `None` when storage produced no
    /// result container, which is distinct from an empty list.
    pub async fn list_after_year(&self, year: i64) -> Result<Option<Vec<ContentTransfer>>, ServiceError> {
        let rows = self.repo.find_all_where_year_greater_than(year).await?;
        Ok(rows.map(|rs| rs.into_iter().map(Into::into).collect()))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<ContentTransfer>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?.map(Into::into))
    }

    /// Persist a new row. Any id on the transfer is ignored; storage assigns one.
    ///
    /// # Examples
    /// ```
    /// use service::content::{ContentService, domain::ContentTransfer, repository::mock::MockContentRepository};
    /// use std::sync::Arc;
    /// let svc = ContentService::new(Arc::new(MockContentRepository::default()));
    /// let input = ContentTransfer { title: Some("MI-1".into()), year_of_release: Some(2004), ..Default::default() };
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let created = rt.block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// ```
    #[instrument(skip(self, transfer), fields(title = ?transfer.title))]
    pub async fn create(&self, transfer: ContentTransfer) -> Result<ContentTransfer, ServiceError> {
        let record = to_record(None, transfer)?;
        let saved = self.repo.save(record).await?;
        info!(id = ?saved.id, "content_created");
        Ok(saved.into())
    }

    /// Replace title, description and year of the row `id`. The path id is
    /// authoritative; an id carried by the transfer is ignored.
    #[instrument(skip(self, transfer))]
    pub async fn update(&self, id: i64, transfer: ContentTransfer) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            warn!(id, "update_target_missing");
            return Err(ServiceError::not_found(ENTITY));
        }
        if transfer.id.is_some_and(|tid| tid != id) {
            warn!(id, body_id = ?transfer.id, "body_id_ignored");
        }
        let record = to_record(Some(id), transfer)?;
        self.repo.save(record).await?;
        info!(id, "content_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            warn!(id, "delete_target_missing");
            return Err(ServiceError::not_found(ENTITY));
        };
        self.repo.delete(&existing).await?;
        info!(id, "content_deleted");
        Ok(())
    }
}

fn to_record(id: Option<i64>, t: ContentTransfer) -> Result<ContentRecord, ServiceError> {
    let title = t.title.ok_or_else(|| ServiceError::Validation(models::content::TITLE_REQUIRED.into()))?;
    models::content::validate_title(&title)?;
    Ok(ContentRecord { id, title, description: t.description, year_of_release: t.year_of_release })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repo::seaorm::SeaOrmContentRepository;
    use crate::content::repository::mock::MockContentRepository;
    use crate::test_support::get_db;

    fn transfer(title: &str, year: Option<i64>) -> ContentTransfer {
        ContentTransfer { id: None, title: Some(title.into()), description: None, year_of_release: year }
    }

    fn seeded() -> Arc<MockContentRepository> {
        let rec = |id, title: &str, year| ContentRecord { id: Some(id), title: title.into(), description: None, year_of_release: Some(year) };
        Arc::new(MockContentRepository::seeded([rec(1, "MI-1", 2004), rec(2, "MI-2", 2005), rec(3, "MI-3", 2010)]))
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_fields() {
        let svc = ContentService::new(Arc::new(MockContentRepository::default()));
        let input = ContentTransfer { id: Some(99), title: Some("MI-1".into()), description: Some("spy".into()), year_of_release: Some(2004) };

        let created = svc.create(input.clone()).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.title, input.title);
        assert_eq!(created.description, input.description);
        assert_eq!(created.year_of_release, input.year_of_release);

        let fetched = svc.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_without_title_is_refused() {
        let repo = Arc::new(MockContentRepository::default());
        let svc = ContentService::new(repo.clone());
        let err = svc.create(ContentTransfer::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn blank_title_is_refused_on_any_repository() {
        let repo = seeded();
        let svc = ContentService::new(repo.clone());

        let err = svc.create(transfer("   ", Some(2020))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(models::errors::ModelError::Validation(_))));
        let err = svc.update(1, transfer("", None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(models::errors::ModelError::Validation(_))));

        assert_eq!(repo.len(), 3);
        assert_eq!(svc.get_by_id(1).await.unwrap().unwrap().title.as_deref(), Some("MI-1"));
    }

    #[tokio::test]
    async fn list_after_year_scenario() {
        let svc = ContentService::new(seeded());
        let rows = svc.list_after_year(2004).await.unwrap().unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(2), Some(3)]);
        assert_eq!(svc.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn list_after_year_passes_through_missing_container() {
        let repo = MockContentRepository::default().with_empty_year_query();
        let svc = ContentService::new(Arc::new(repo));
        assert!(svc.list_after_year(2000).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_binds_path_id() {
        let repo = seeded();
        let svc = ContentService::new(repo.clone());
        let body = ContentTransfer { id: Some(3), title: Some("MI-2 (cut)".into()), description: Some("new".into()), year_of_release: None };

        svc.update(2, body).await.unwrap();

        let two = svc.get_by_id(2).await.unwrap().unwrap();
        assert_eq!(two.title.as_deref(), Some("MI-2 (cut)"));
        assert_eq!(two.description.as_deref(), Some("new"));
        assert_eq!(two.year_of_release, None);
        let three = svc.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(three.title.as_deref(), Some("MI-3"));
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id_leave_storage_unchanged() {
        let repo = seeded();
        let svc = ContentService::new(repo.clone());
        let before = svc.list_all().await.unwrap();

        let err = svc.update(10, transfer("x", None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Content not present");

        let err = svc.delete(10).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert_eq!(svc.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let svc = ContentService::new(seeded());
        svc.delete(3).await.unwrap();
        assert!(svc.get_by_id(3).await.unwrap().is_none());
        assert_eq!(svc.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn content_crud_service_on_database() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmContentRepository::new(get_db().await?));
        let svc = ContentService::new(repo);

        let created = svc.create(transfer("MI-1", Some(2004))).await?;
        let id = created.id.expect("id");
        svc.create(transfer("MI-2", Some(2005))).await?;

        let fetched = svc.get_by_id(id).await?.expect("row");
        assert_eq!(fetched.title.as_deref(), Some("MI-1"));
        assert_eq!(fetched.year_of_release, Some(2004));

        svc.update(id, transfer("MI-1 (cut)", Some(2006))).await?;
        let after = svc.list_after_year(2005).await?.expect("container");
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, Some(id));

        svc.delete(id).await?;
        assert!(svc.get_by_id(id).await?.is_none());
        assert!(matches!(svc.delete(id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
