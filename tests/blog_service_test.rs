use anyhow::Result;
use blog_project::database::{establish_connection, setup_database};
use blog_project::errors::BlogError;
use blog_project::services::{CommentPatch, CommentService, NewComment, PostService};
use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;

async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = establish_connection(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

fn new_comment(post_id: i32, author: &str, content: &str) -> NewComment {
    NewComment {
        post_id,
        author: author.to_string(),
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_post_lookup_or_fail() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let posts = PostService::new(db);

    let created = posts.create("Title".into(), "Body".into()).await?;
    assert_eq!(posts.get_required(created.id).await?, created);

    let missing = posts.get_required(created.id + 100).await;
    assert!(matches!(missing, Err(BlogError::PostNotFound(_))));

    Ok(())
}

#[tokio::test]
async fn test_update_missing_post_fails() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let posts = PostService::new(db);

    let result = posts.update(77, "New".into(), "Text".into()).await;
    assert!(matches!(result, Err(BlogError::PostNotFound(77))));
    assert!(posts.list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_delete_post_removes_comments() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let posts = PostService::new(db.clone());
    let comments = CommentService::new(db);

    let keep = posts.create("Keep".into(), "Stays".into()).await?;
    let doomed = posts.create("Doomed".into(), "Goes".into()).await?;

    comments.create(new_comment(doomed.id, "a", "one")).await?;
    comments.create(new_comment(doomed.id, "b", "two")).await?;
    let survivor = comments.create(new_comment(keep.id, "c", "three")).await?;

    posts.delete(doomed.id).await?;

    assert!(comments.list_by_post(doomed.id).await?.is_empty());
    assert_eq!(comments.list_by_post(keep.id).await?, vec![survivor]);
    assert!(matches!(
        posts.delete(doomed.id).await,
        Err(BlogError::PostNotFound(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_create_comment_requires_post() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let comments = CommentService::new(db);

    let result = comments.create(new_comment(5, "a", "b")).await;
    assert!(matches!(result, Err(BlogError::PostNotFound(5))));

    Ok(())
}

#[tokio::test]
async fn test_partial_comment_update() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let posts = PostService::new(db.clone());
    let comments = CommentService::new(db);

    let post = posts.create("Post".into(), "Body".into()).await?;
    let comment = comments.create(new_comment(post.id, "alice", "old")).await?;

    let updated = comments
        .update(
            comment.id,
            CommentPatch::new(None, Some(String::new()), Some("new".into())),
        )
        .await?;

    assert_eq!(updated.author, "alice");
    assert_eq!(updated.post_id, post.id);
    assert_eq!(updated.content, "new");

    let untouched = comments.update(comment.id, CommentPatch::default()).await?;
    assert_eq!(untouched, updated);

    Ok(())
}

#[tokio::test]
async fn test_comment_reassignment_checks_target_post() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let posts = PostService::new(db.clone());
    let comments = CommentService::new(db);

    let first = posts.create("First".into(), "1".into()).await?;
    let second = posts.create("Second".into(), "2".into()).await?;
    let comment = comments.create(new_comment(first.id, "bob", "hi")).await?;

    let moved = comments
        .update(comment.id, CommentPatch::new(Some(second.id), None, None))
        .await?;
    assert_eq!(moved.post_id, second.id);

    let result = comments
        .update(
            comment.id,
            CommentPatch::new(Some(999), Some("mallory".into()), None),
        )
        .await;
    assert!(matches!(result, Err(BlogError::PostNotFound(999))));

    let reloaded = comments.get_required(comment.id).await?;
    assert_eq!(reloaded.post_id, second.id);
    assert_eq!(reloaded.author, "bob");

    Ok(())
}

#[tokio::test]
async fn test_delete_missing_comment_fails() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let comments = CommentService::new(db);

    let result = comments.delete(12).await;
    assert!(matches!(result, Err(BlogError::CommentNotFound(12))));

    Ok(())
}
