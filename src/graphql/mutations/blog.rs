use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{
    Comment, CommentInput, CreateCommentPayload, CreatePostPayload, DeleteCommentPayload,
    DeletePostPayload, Post, PostInput, UpdateCommentInput, UpdateCommentPayload,
    UpdatePostPayload,
};
use crate::services::CommentPatch;

#[derive(Default)]
pub struct BlogMutation;

#[Object]
impl BlogMutation {
    /// Create a new post
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        input: PostInput,
    ) -> Result<Option<CreatePostPayload>> {
        let context = ctx.data::<GraphQLContext>()?;
        let post = context
            .posts
            .create(input.title, input.content)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(CreatePostPayload {
            post: Some(Post::from(post)),
            success: true,
        }))
    }

    /// Replace the title and content of a post
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: PostInput,
    ) -> Result<Option<UpdatePostPayload>> {
        let context = ctx.data::<GraphQLContext>()?;
        let post = context
            .posts
            .update(id, input.title, input.content)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(UpdatePostPayload {
            post: Some(Post::from(post)),
            success: true,
        }))
    }

    /// Delete a post and its comments
    async fn delete_post(&self, ctx: &Context<'_>, id: i32) -> Result<Option<DeletePostPayload>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .posts
            .delete(id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(DeletePostPayload { success: true }))
    }

    /// Add a comment to an existing post
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        input: CommentInput,
    ) -> Result<Option<CreateCommentPayload>> {
        let context = ctx.data::<GraphQLContext>()?;
        let comment = context
            .comments
            .create(input.into())
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(CreateCommentPayload {
            comment: Some(Comment::from(comment)),
            success: true,
        }))
    }

    /// Update only the comment fields that are supplied and non-empty
    async fn update_comment(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: Option<UpdateCommentInput>,
    ) -> Result<Option<UpdateCommentPayload>> {
        let context = ctx.data::<GraphQLContext>()?;
        let patch = CommentPatch::from(input.unwrap_or_default());
        let comment = context
            .comments
            .update(id, patch)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(UpdateCommentPayload {
            comment: Some(Comment::from(comment)),
            success: true,
        }))
    }

    /// Delete a comment
    async fn delete_comment(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<Option<DeleteCommentPayload>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .comments
            .delete(id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(DeleteCommentPayload { success: true }))
    }
}
