use sea_orm::DatabaseConnection;

use crate::services::{CommentService, PostService, TestModelService};

#[derive(Clone)]
pub struct GraphQLContext {
    pub posts: PostService,
    pub comments: CommentService,
    pub test_models: TestModelService,
}

impl GraphQLContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            posts: PostService::new(db.clone()),
            comments: CommentService::new(db.clone()),
            test_models: TestModelService::new(db),
        }
    }
}
