//! Database functionality tests
//!
//! Tests for migrations, entity operations and referential integrity

use anyhow::Result;
use blog_project::database::{comments, establish_connection, posts, setup_database, test_models};
use blog_project::database::migrations::Migrator;
use blog_project::server::{migrate_database, MigrateDirection};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use sea_orm_migration::MigratorTrait;
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = establish_connection(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    assert!(posts::Entity::find().all(&db).await?.is_empty());
    assert!(comments::Entity::find().all(&db).await?.is_empty());
    assert!(test_models::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_migrations_fresh_cycle() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    posts::ActiveModel {
        title: Set("Before".to_string()),
        content: Set("Reset".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    Migrator::down(&db, None).await?;
    Migrator::up(&db, None).await?;

    assert!(posts::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_post_crud_operations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let post = posts::ActiveModel {
        title: Set("First".to_string()),
        content: Set("Hello".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    assert_eq!(post.title, "First");

    let found = posts::Entity::find_by_id(post.id)
        .one(&db)
        .await?
        .expect("Post should exist");
    assert_eq!(found.content, "Hello");

    let mut update: posts::ActiveModel = found.into();
    update.title = Set("Renamed".to_string());
    let updated = update.update(&db).await?;
    assert_eq!(updated.title, "Renamed");

    posts::Entity::delete_by_id(updated.id).exec(&db).await?;
    assert!(posts::Entity::find_by_id(updated.id).one(&db).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_comment_requires_existing_post() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let orphan = comments::ActiveModel {
        post_id: Set(4242),
        author: Set("ghost".to_string()),
        content: Set("nobody home".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await;

    assert!(orphan.is_err());

    Ok(())
}

#[tokio::test]
async fn test_foreign_key_cascade() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let post = posts::ActiveModel {
        title: Set("Parent".to_string()),
        content: Set("Body".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    comments::ActiveModel {
        post_id: Set(post.id),
        author: Set("alice".to_string()),
        content: Set("child".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    posts::Entity::delete_by_id(post.id).exec(&db).await?;

    let remaining = comments::Entity::find()
        .filter(comments::Column::PostId.eq(post.id))
        .all(&db)
        .await?;
    assert!(remaining.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_foreign_keys_enforced_on_every_pooled_connection() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let orphan = |author: &'static str| {
        comments::ActiveModel {
            post_id: Set(404),
            author: Set(author.to_string()),
            content: Set("orphan".to_string()),
            ..Default::default()
        }
        .insert(&db)
    };

    let (a, b, c, d) = tokio::join!(orphan("a"), orphan("b"), orphan("c"), orphan("d"));
    assert!(a.is_err() && b.is_err() && c.is_err() && d.is_err());
    assert!(comments::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_migrate_command_fresh_resets_data() -> Result<()> {
    let temp_file = NamedTempFile::new()?;
    let path = temp_file.path().display().to_string();

    migrate_database(&path, MigrateDirection::Up).await?;

    let db = establish_connection(&format!("sqlite://{}?mode=rwc", path)).await?;
    test_models::ActiveModel {
        title: Set("Survivor?".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    drop(db);

    migrate_database(&path, MigrateDirection::Fresh).await?;

    let db = establish_connection(&format!("sqlite://{}?mode=rwc", path)).await?;
    assert!(test_models::Entity::find().all(&db).await?.is_empty());
    assert!(posts::Entity::find().all(&db).await?.is_empty());

    Ok(())
}
