use thiserror::Error;

/// Errors raised by the test model record store
#[derive(Error, Debug)]
pub enum TestModelError {
    #[error("TestModel not found")]
    NotFound(i32),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Request context was missing the test model service
    #[error("{0}")]
    Unavailable(String),
}

impl TestModelError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TestModelError::NotFound(_))
    }
}
