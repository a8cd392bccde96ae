use anyhow::{anyhow, Result};
use axum::{http::Method, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{graphql, health};
use crate::graphql::{build_blog_schema, build_test_model_schema, BlogSchema, TestModelSchema};

pub const BLOG_GRAPHQL_PATH: &str = "/graphql/blog";
pub const TEST_MODEL_GRAPHQL_PATH: &str = "/graphql/test-models";

#[derive(Clone)]
pub struct AppState {
    pub blog_schema: BlogSchema,
    pub test_model_schema: TestModelSchema,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState {
        blog_schema: build_blog_schema(db.clone()),
        test_model_schema: build_test_model_schema(db),
    };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<axum::http::HeaderValue>()
                .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route(
            BLOG_GRAPHQL_PATH,
            get(graphql::blog_playground).post(graphql::blog_handler),
        )
        .route(
            TEST_MODEL_GRAPHQL_PATH,
            get(graphql::test_model_playground).post(graphql::test_model_handler),
        )
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
