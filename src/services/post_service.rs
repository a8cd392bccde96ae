use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};

use crate::database::entities::{comments, posts};
use crate::errors::{BlogError, BlogResult};

#[derive(Clone)]
pub struct PostService {
    db: DatabaseConnection,
}

impl PostService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> BlogResult<Vec<posts::Model>> {
        let posts = posts::Entity::find()
            .order_by_asc(posts::Column::Id)
            .all(&self.db)
            .await?;
        Ok(posts)
    }

    pub async fn get(&self, id: i32) -> BlogResult<Option<posts::Model>> {
        Ok(posts::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Lookup-or-fail; every write that references a post goes through here
    pub async fn get_required(&self, id: i32) -> BlogResult<posts::Model> {
        debug!("Looking up post {}", id);
        self.get(id).await?.ok_or(BlogError::PostNotFound(id))
    }

    pub async fn create(&self, title: String, content: String) -> BlogResult<posts::Model> {
        let post = posts::ActiveModel {
            title: Set(title),
            content: Set(content),
            ..Default::default()
        };

        let post = post.insert(&self.db).await?;
        info!("Created post {}", post.id);
        Ok(post)
    }

    /// Replace both title and content
    pub async fn update(
        &self,
        id: i32,
        title: String,
        content: String,
    ) -> BlogResult<posts::Model> {
        let post = self.get_required(id).await?;

        let mut post: posts::ActiveModel = post.into();
        post.title = Set(title);
        post.content = Set(content);

        let post = post.update(&self.db).await?;
        info!("Updated post {}", post.id);
        Ok(post)
    }

    /// Delete a post together with its comments.
    ///
    /// Comments are removed first so the cascade does not depend on the
    /// backend enforcing the foreign key.
    pub async fn delete(&self, id: i32) -> BlogResult<()> {
        let post = self.get_required(id).await?;

        let removed = comments::Entity::delete_many()
            .filter(comments::Column::PostId.eq(post.id))
            .exec(&self.db)
            .await?;

        posts::Entity::delete_by_id(post.id).exec(&self.db).await?;

        info!(
            "Deleted post {} and {} comment(s)",
            post.id, removed.rows_affected
        );
        Ok(())
    }
}
