use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use crate::content::domain::ContentRecord;
use crate::content::repository::ContentRepository;
use crate::errors::ServiceError;
use models::content;

fn db_err(e: DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

/// SeaORM-backed repository implementation.
pub struct SeaOrmContentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmContentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ContentRepository for SeaOrmContentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentRecord>, ServiceError> {
        let found = content::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<ContentRecord>, ServiceError> {
        let rows = content::Entity::find()
            .order_by_asc(content::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, record: ContentRecord) -> Result<ContentRecord, ServiceError> {
        let mut am = content::new_active(&record.title, record.description, record.year_of_release)?;
        let Some(id) = record.id else {
            let created = am.insert(&self.db).await.map_err(db_err)?;
            return Ok(created.into());
        };
        am.id = Set(id);
        match am.clone().update(&self.db).await {
            Ok(updated) => Ok(updated.into()),
            // replace semantics: an unknown id is written as a new row
            Err(DbErr::RecordNotUpdated) => Ok(am.insert(&self.db).await.map_err(db_err)?.into()),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn delete(&self, record: &ContentRecord) -> Result<(), ServiceError> {
        let id = record.id.ok_or_else(|| ServiceError::not_found("Content"))?;
        content::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_all_where_year_greater_than(&self, year: i64) -> Result<Option<Vec<ContentRecord>>, ServiceError> {
        let rows = content::find_released_after(&self.db, year).await?;
        Ok(Some(rows.into_iter().map(Into::into).collect()))
    }
}
