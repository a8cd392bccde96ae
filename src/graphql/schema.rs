use async_graphql::*;
use sea_orm::DatabaseConnection;

use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::{BlogMutation, TestModelMutation};
use crate::graphql::queries::{BlogQuery, TestModelQuery};

pub type BlogSchema = Schema<BlogQuery, BlogMutation, EmptySubscription>;
pub type TestModelSchema = Schema<TestModelQuery, TestModelMutation, EmptySubscription>;

/// Posts and comments
pub fn build_blog_schema(db: DatabaseConnection) -> BlogSchema {
    Schema::build(BlogQuery, BlogMutation, EmptySubscription)
        .data(GraphQLContext::new(db))
        .finish()
}

/// TestModel CRUD
pub fn build_test_model_schema(db: DatabaseConnection) -> TestModelSchema {
    Schema::build(TestModelQuery, TestModelMutation, EmptySubscription)
        .data(GraphQLContext::new(db))
        .finish()
}
