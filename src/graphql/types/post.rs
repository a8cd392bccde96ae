use async_graphql::*;

use crate::database::entities::posts;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Comment;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    #[graphql(skip)]
    pub key: i32,
    pub title: String,
    pub content: String,
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            key: model.id,
            title: model.title,
            content: model.content,
        }
    }
}

#[ComplexObject]
impl Post {
    /// Comments attached to this post
    async fn comment_set(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        let context = ctx.data::<GraphQLContext>()?;
        let comments = context
            .comments
            .list_by_post(self.key)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

#[derive(InputObject)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

#[derive(SimpleObject)]
pub struct CreatePostPayload {
    pub post: Option<Post>,
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct UpdatePostPayload {
    pub post: Option<Post>,
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct DeletePostPayload {
    pub success: bool,
}
