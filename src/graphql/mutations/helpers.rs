use tracing::warn;

use crate::errors::{TestModelError, TestModelResult};

/// Test model mutation kinds and the messages reported for them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestModelAction {
    Create,
    Update,
    Delete,
}

impl TestModelAction {
    fn verb(self) -> &'static str {
        match self {
            TestModelAction::Create => "creating",
            TestModelAction::Update => "updating",
            TestModelAction::Delete => "deleting",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            TestModelAction::Create => "TestModel created successfully",
            TestModelAction::Update => "TestModel updated successfully",
            TestModelAction::Delete => "TestModel deleted successfully",
        }
    }

    pub fn failure_message(self, err: &TestModelError) -> String {
        if err.is_not_found() {
            err.to_string()
        } else {
            format!("Error {} TestModel: {}", self.verb(), err)
        }
    }
}

/// Result of a mutation that reports failures instead of raising them
#[derive(Debug)]
pub struct MutationOutcome<T> {
    pub entity: Option<T>,
    pub success: bool,
    pub message: String,
}

impl<T> MutationOutcome<T> {
    pub fn report<M>(action: TestModelAction, result: TestModelResult<M>) -> Self
    where
        M: Into<T>,
    {
        match result {
            Ok(value) => Self {
                entity: Some(value.into()),
                success: true,
                message: action.success_message().to_string(),
            },
            Err(err) => {
                let message = action.failure_message(&err);
                warn!("{:?} test model failed: {}", action, message);
                Self {
                    entity: None,
                    success: false,
                    message,
                }
            }
        }
    }
}
