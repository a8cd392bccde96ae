use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};

use crate::database::entities::comments;
use crate::errors::{BlogError, BlogResult};
use crate::services::PostService;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i32,
    pub author: String,
    pub content: String,
}

/// Fields to change on an existing comment.
///
/// Empty strings and a zero post id count as "not supplied", so they leave
/// the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPatch {
    pub post_id: Option<i32>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl CommentPatch {
    pub fn new(post_id: Option<i32>, author: Option<String>, content: Option<String>) -> Self {
        Self {
            post_id: post_id.filter(|id| *id != 0),
            author: author.filter(|value| !value.is_empty()),
            content: content.filter(|value| !value.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.post_id.is_none() && self.author.is_none() && self.content.is_none()
    }
}

#[derive(Clone)]
pub struct CommentService {
    db: DatabaseConnection,
    posts: PostService,
}

impl CommentService {
    pub fn new(db: DatabaseConnection) -> Self {
        let posts = PostService::new(db.clone());
        Self { db, posts }
    }

    pub async fn get_required(&self, id: i32) -> BlogResult<comments::Model> {
        debug!("Looking up comment {}", id);
        comments::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(BlogError::CommentNotFound(id))
    }

    /// Comments attached to a post; an unknown post simply has none
    pub async fn list_by_post(&self, post_id: i32) -> BlogResult<Vec<comments::Model>> {
        let comments = comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .order_by_asc(comments::Column::Id)
            .all(&self.db)
            .await?;
        Ok(comments)
    }

    pub async fn create(&self, input: NewComment) -> BlogResult<comments::Model> {
        let post = self.posts.get_required(input.post_id).await?;

        let comment = comments::ActiveModel {
            post_id: Set(post.id),
            author: Set(input.author),
            content: Set(input.content),
            ..Default::default()
        };

        let comment = comment.insert(&self.db).await?;
        info!("Created comment {} on post {}", comment.id, post.id);
        Ok(comment)
    }

    pub async fn update(&self, id: i32, patch: CommentPatch) -> BlogResult<comments::Model> {
        let existing = self.get_required(id).await?;

        if patch.is_empty() {
            debug!("Comment {} update carried no changes", id);
            return Ok(existing);
        }

        let mut comment: comments::ActiveModel = existing.into();
        if let Some(author) = patch.author {
            comment.author = Set(author);
        }
        if let Some(content) = patch.content {
            comment.content = Set(content);
        }
        if let Some(post_id) = patch.post_id {
            let post = self.posts.get_required(post_id).await?;
            comment.post_id = Set(post.id);
        }

        let comment = comment.update(&self.db).await?;
        info!("Updated comment {}", comment.id);
        Ok(comment)
    }

    pub async fn delete(&self, id: i32) -> BlogResult<()> {
        let comment = self.get_required(id).await?;
        comments::Entity::delete_by_id(comment.id)
            .exec(&self.db)
            .await?;
        info!("Deleted comment {}", comment.id);
        Ok(())
    }
}
