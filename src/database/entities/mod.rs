pub mod comments;
pub mod posts;
pub mod test_models;
