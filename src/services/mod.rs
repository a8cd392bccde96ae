pub mod comment_service;
pub mod post_service;
pub mod test_model_service;

pub use comment_service::{CommentPatch, CommentService, NewComment};
pub use post_service::PostService;
pub use test_model_service::TestModelService;
