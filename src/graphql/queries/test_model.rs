use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::TestModel;

#[derive(Default)]
pub struct TestModelQuery;

#[Object]
impl TestModelQuery {
    /// Fetch one TestModel; null when it does not exist
    async fn test_model(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The ID of the TestModel to retrieve")] id: i32,
    ) -> Result<Option<TestModel>> {
        let context = ctx.data::<GraphQLContext>()?;
        let model = context.test_models.get(id).await?;

        Ok(model.map(TestModel::from))
    }

    /// Retrieve all TestModel records
    async fn all_test_models(&self, ctx: &Context<'_>) -> Result<Vec<TestModel>> {
        let context = ctx.data::<GraphQLContext>()?;
        let models = context.test_models.list().await?;

        Ok(models.into_iter().map(TestModel::from).collect())
    }
}
