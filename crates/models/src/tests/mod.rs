use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, Set};
use anyhow::Result;

use crate::{content, db, errors::ModelError};

/// Fresh in-memory database with the schema applied
async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert(db: &DatabaseConnection, title: &str, description: Option<String>, year: Option<i64>) -> Result<content::Model> {
    Ok(content::new_active(title, description, year)?.insert(db).await?)
}

#[tokio::test]
async fn test_content_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = insert(&db, "MI-1", Some("first".into()), Some(2004)).await?;
    assert!(created.id > 0);
    assert_eq!(created.title, "MI-1");
    assert_eq!(created.description.as_deref(), Some("first"));
    assert_eq!(created.year_of_release, Some(2004));

    let found = content::Entity::find_by_id(created.id).one(&db).await?.expect("row");
    assert_eq!(found, created);

    let mut am: content::ActiveModel = found.into();
    am.title = Set("MI-1 (remastered)".into());
    am.year_of_release = Set(None);
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.year_of_release, None);

    content::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(content::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_ids_are_assigned_by_storage() -> Result<()> {
    let db = setup_test_db().await?;
    let a = insert(&db, "a", None, None).await?;
    let b = insert(&db, "b", None, None).await?;
    assert_ne!(a.id, b.id);
    Ok(())
}

#[test]
fn test_blank_title_rejected() {
    let err = content::new_active("   ", None, Some(2000)).unwrap_err();
    assert!(matches!(err, ModelError::Validation(ref m) if m == content::TITLE_REQUIRED));
    assert!(content::validate_title("").is_err());
    assert!(content::validate_title(" MI-1 ").is_ok());
}

#[tokio::test]
async fn test_released_after_is_strict_and_skips_null_years() -> Result<()> {
    let db = setup_test_db().await?;
    insert(&db, "MI-1", None, Some(2004)).await?;
    let mi2 = insert(&db, "MI-2", None, Some(2005)).await?;
    let mi3 = insert(&db, "MI-3", None, Some(2010)).await?;
    insert(&db, "undated", None, None).await?;

    let rows = content::find_released_after(&db, 2004).await?;
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![mi2.id, mi3.id]);

    assert!(content::find_released_after(&db, 2010).await?.is_empty());
    Ok(())
}
