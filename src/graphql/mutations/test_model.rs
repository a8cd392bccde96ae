use async_graphql::*;

use crate::errors::{TestModelError, TestModelResult};
use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::helpers::{MutationOutcome, TestModelAction};
use crate::graphql::types::{
    CreateTestModelPayload, DeleteTestModelPayload, TestModel, UpdateTestModelPayload,
};
use crate::services::TestModelService;

#[derive(Default)]
pub struct TestModelMutation;

fn test_models<'a>(ctx: &Context<'a>) -> TestModelResult<&'a TestModelService> {
    ctx.data::<GraphQLContext>()
        .map(|context| &context.test_models)
        .map_err(|e| TestModelError::Unavailable(e.message))
}

#[Object]
impl TestModelMutation {
    /// Create a new TestModel
    async fn create_test_model(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The title for the new TestModel")] title: String,
    ) -> CreateTestModelPayload {
        let result = match test_models(ctx) {
            Ok(service) => service.create(title).await,
            Err(err) => Err(err),
        };

        MutationOutcome::<TestModel>::report(TestModelAction::Create, result).into()
    }

    /// Change the title of an existing TestModel
    async fn update_test_model(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of the TestModel to update")] id: i32,
        #[graphql(desc = "The new title for the TestModel")] title: String,
    ) -> UpdateTestModelPayload {
        let result = match test_models(ctx) {
            Ok(service) => service.update(id, title).await,
            Err(err) => Err(err),
        };

        MutationOutcome::<TestModel>::report(TestModelAction::Update, result).into()
    }

    /// Delete an existing TestModel
    async fn delete_test_model(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of the TestModel to delete")] id: i32,
    ) -> DeleteTestModelPayload {
        let result = match test_models(ctx) {
            Ok(service) => service.delete(id).await,
            Err(err) => Err(err),
        };

        MutationOutcome::<()>::report(TestModelAction::Delete, result).into()
    }
}
