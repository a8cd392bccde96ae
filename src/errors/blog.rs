//! Blog error types
//!
//! Lookup failures keep the wording the blog API has always returned
//! ("... matching query does not exist.") so existing clients matching on the
//! message keep working.

use thiserror::Error;

/// Errors raised by the post and comment record store
#[derive(Error, Debug)]
pub enum BlogError {
    /// Post not found by ID
    #[error("Post matching query does not exist.")]
    PostNotFound(i32),

    /// Comment not found by ID
    #[error("Comment matching query does not exist.")]
    CommentNotFound(i32),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl BlogError {
    /// Stable code placed in the GraphQL error extensions
    pub fn error_code(&self) -> &'static str {
        match self {
            BlogError::PostNotFound(_) | BlogError::CommentNotFound(_) => "NOT_FOUND",
            BlogError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Resource name and key for not-found errors
    pub fn resource(&self) -> Option<(&'static str, i32)> {
        match self {
            BlogError::PostNotFound(id) => Some(("Post", *id)),
            BlogError::CommentNotFound(id) => Some(("Comment", *id)),
            BlogError::Database(_) => None,
        }
    }
}
