/**
 * Error Conversion
 *
 * This module converts `ApiError` into `async_graphql::Error` so resolvers
 * can propagate domain errors with `?`.
 *
 * # Error Format
 *
 * GraphQL errors carry the human-readable message plus a `code` extension:
 * ```json
 * {
 *   "message": "can't find user",
 *   "extensions": { "code": "NOT_FOUND" }
 * }
 * ```
 */

use async_graphql::ErrorExtensions;

use crate::error::types::ApiError;

impl From<ApiError> for async_graphql::Error {
    /// Convert an API error into a GraphQL error
    ///
    /// The message comes from the error's `Display` implementation and the
    /// variant's error code is attached under the `code` extension key.
    fn from(err: ApiError) -> Self {
        let code = err.code();
        async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_preserved() {
        let gql: async_graphql::Error = ApiError::conflict("email already registered").into();
        assert_eq!(gql.message, "email already registered");
    }

    #[test]
    fn test_code_extension_set() {
        let gql: async_graphql::Error = ApiError::unauthorized("missing bearer token").into();
        let extensions = gql.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("UNAUTHENTICATED"))
        );
    }
}
