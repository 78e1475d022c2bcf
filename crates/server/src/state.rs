use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::content::{
    repo::seaorm::SeaOrmContentRepository, repository::ContentRepository, ContentService,
};

/// Shared handler state. Cheap to clone; the service sits behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub contents: Arc<ContentService<dyn ContentRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { contents: Arc::new(ContentService::new(repo)) }
    }

    /// State backed by the SeaORM repository on `db`.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmContentRepository::new(db)))
    }
}
