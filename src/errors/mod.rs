//! Domain error types
//!
//! The two domains deliberately handle failures differently:
//!
//! - **BlogError** is raised out of blog resolvers and surfaces in the
//!   response's `errors` list (see [`ToGraphQLError`]).
//! - **TestModelError** never leaves its mutation; it is folded into a
//!   `{ success, message }` payload by the mutation layer.
//!
//! # Examples
//!
//! ```rust
//! use blog_project::errors::{BlogError, TestModelError};
//!
//! let err = BlogError::PostNotFound(42);
//! assert_eq!(err.error_code(), "NOT_FOUND");
//! assert_eq!(err.to_string(), "Post matching query does not exist.");
//!
//! let err = TestModelError::NotFound(7);
//! assert_eq!(err.to_string(), "TestModel not found");
//! ```

pub mod blog;
pub mod common;
pub mod test_model;

pub use blog::BlogError;
pub use common::ToGraphQLError;
pub use test_model::TestModelError;

/// Result type alias for blog record operations
pub type BlogResult<T> = Result<T, BlogError>;

/// Result type alias for test model record operations
pub type TestModelResult<T> = Result<T, TestModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_result_alias() {
        let result: BlogResult<i32> = Err(BlogError::CommentNotFound(3));
        assert!(result.is_err());
    }

    #[test]
    fn test_test_model_result_alias() {
        let result: TestModelResult<()> = Err(TestModelError::NotFound(1));
        assert!(result.is_err());
    }
}
