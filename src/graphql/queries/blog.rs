use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Comment, Post};

#[derive(Default)]
pub struct BlogQuery;

// Single-entity fields are nullable so a lookup error nulls only this entry
// of `data` and lands in `errors`.
#[Object]
impl BlogQuery {
    /// Get all posts
    async fn all_posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let context = ctx.data::<GraphQLContext>()?;
        let posts = context
            .posts
            .list()
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Get a specific post by ID; fails when it does not exist
    async fn post_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Post>> {
        let context = ctx.data::<GraphQLContext>()?;
        let post = context
            .posts
            .get_required(id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Some(Post::from(post)))
    }

    /// Get all comments for a post
    async fn comments_by_post(&self, ctx: &Context<'_>, post_id: i32) -> Result<Vec<Comment>> {
        let context = ctx.data::<GraphQLContext>()?;
        let comments = context
            .comments
            .list_by_post(post_id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }
}
