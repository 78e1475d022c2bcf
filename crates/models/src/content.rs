use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub year_of_release: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const TITLE_REQUIRED: &str = "Title is mandatory";

/// A title must contain something other than whitespace.
pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() {
        return Err(errors::ModelError::Validation(TITLE_REQUIRED.into()));
    }
    Ok(())
}

/// Active model for a fresh row; `id` is left to the database.
pub fn new_active(title: &str, description: Option<String>, year_of_release: Option<i64>) -> Result<ActiveModel, errors::ModelError> {
    validate_title(title)?;
    Ok(ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        description: Set(description),
        year_of_release: Set(year_of_release),
    })
}

/// Rows released strictly after `year`; rows without a year never match.
pub async fn find_released_after(db: &DatabaseConnection, year: i64) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::YearOfRelease.gt(year))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
