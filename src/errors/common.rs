//! GraphQL conversion for errors that are allowed to reach the client

use async_graphql::{Error as GraphQLError, ErrorExtensions};

use super::BlogError;

/// Convert domain errors to GraphQL errors with error codes
pub trait ToGraphQLError {
    /// Convert to GraphQL error with structured extensions
    fn to_graphql_error(&self) -> GraphQLError;
}

impl ToGraphQLError for BlogError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            if let Some((resource, id)) = self.resource() {
                e.set("resource", resource);
                e.set("id", id);
            }
        })
    }
}
