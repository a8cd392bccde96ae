use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::server::app::{AppState, BLOG_GRAPHQL_PATH, TEST_MODEL_GRAPHQL_PATH};

pub async fn blog_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("Blog GraphQL request received");
    state.blog_schema.execute(req.into_inner()).await.into()
}

pub async fn test_model_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    tracing::debug!("TestModel GraphQL request received");
    state.test_model_schema.execute(req.into_inner()).await.into()
}

pub async fn blog_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(
        BLOG_GRAPHQL_PATH,
    )))
}

pub async fn test_model_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(
        TEST_MODEL_GRAPHQL_PATH,
    )))
}
