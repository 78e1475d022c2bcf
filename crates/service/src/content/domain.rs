use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// API-facing shape used for requests and responses.
///
/// Wire names are camelCase; unknown fields are ignored. `title` is an
/// `Option` so a missing or `null` title reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentTransfer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(
        required(message = "Title is mandatory"),
        custom(function = "non_blank_title", message = "Title is mandatory")
    )]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year_of_release: Option<i64>,
}

fn non_blank_title(title: &str) -> Result<(), ValidationError> {
    models::content::validate_title(title).map_err(|_| ValidationError::new("blank"))
}

/// Persisted shape exchanged with the repository. `id: None` means the row
/// has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub year_of_release: Option<i64>,
}

impl From<models::content::Model> for ContentRecord {
    fn from(m: models::content::Model) -> Self {
        Self { id: Some(m.id), title: m.title, description: m.description, year_of_release: m.year_of_release }
    }
}

impl From<ContentRecord> for ContentTransfer {
    fn from(r: ContentRecord) -> Self {
        Self { id: r.id, title: Some(r.title), description: r.description, year_of_release: r.year_of_release }
    }
}
