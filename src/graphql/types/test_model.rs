use async_graphql::*;

use crate::database::entities::test_models;
use crate::graphql::mutations::helpers::MutationOutcome;

#[derive(SimpleObject, Clone, Debug)]
pub struct TestModel {
    pub id: ID,
    pub title: String,
}

impl From<test_models::Model> for TestModel {
    fn from(model: test_models::Model) -> Self {
        Self {
            id: ID::from(model.id.to_string()),
            title: model.title,
        }
    }
}

#[derive(SimpleObject)]
pub struct CreateTestModelPayload {
    pub test_model: Option<TestModel>,
    pub success: bool,
    pub message: String,
}

impl From<MutationOutcome<TestModel>> for CreateTestModelPayload {
    fn from(outcome: MutationOutcome<TestModel>) -> Self {
        Self {
            test_model: outcome.entity,
            success: outcome.success,
            message: outcome.message,
        }
    }
}

#[derive(SimpleObject)]
pub struct UpdateTestModelPayload {
    pub test_model: Option<TestModel>,
    pub success: bool,
    pub message: String,
}

impl From<MutationOutcome<TestModel>> for UpdateTestModelPayload {
    fn from(outcome: MutationOutcome<TestModel>) -> Self {
        Self {
            test_model: outcome.entity,
            success: outcome.success,
            message: outcome.message,
        }
    }
}

#[derive(SimpleObject)]
pub struct DeleteTestModelPayload {
    pub success: bool,
    pub message: String,
}

impl From<MutationOutcome<()>> for DeleteTestModelPayload {
    fn from(outcome: MutationOutcome<()>) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
        }
    }
}
