use async_graphql::*;

use crate::database::entities::comments;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Post;
use crate::services::{CommentPatch, NewComment};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Comment {
    pub id: ID,
    #[graphql(skip)]
    pub post_id: i32,
    pub author: String,
    pub content: String,
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            post_id: model.post_id,
            author: model.author,
            content: model.content,
        }
    }
}

#[ComplexObject]
impl Comment {
    /// The post this comment belongs to
    async fn post(&self, ctx: &Context<'_>) -> Result<Post> {
        let context = ctx.data::<GraphQLContext>()?;
        let post = context
            .posts
            .get_required(self.post_id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Post::from(post))
    }
}

#[derive(InputObject)]
pub struct CommentInput {
    pub post_id: i32,
    pub author: String,
    pub content: String,
}

impl From<CommentInput> for NewComment {
    fn from(input: CommentInput) -> Self {
        Self {
            post_id: input.post_id,
            author: input.author,
            content: input.content,
        }
    }
}

/// Partial comment update; omitted, null and empty fields keep their value
#[derive(InputObject, Default)]
pub struct UpdateCommentInput {
    pub post_id: Option<i32>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl From<UpdateCommentInput> for CommentPatch {
    fn from(input: UpdateCommentInput) -> Self {
        CommentPatch::new(input.post_id, input.author, input.content)
    }
}

#[derive(SimpleObject)]
pub struct CreateCommentPayload {
    pub comment: Option<Comment>,
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct UpdateCommentPayload {
    pub comment: Option<Comment>,
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct DeleteCommentPayload {
    pub success: bool,
}
