pub mod comment;
pub mod post;
pub mod test_model;

pub use comment::*;
pub use post::*;
pub use test_model::*;
