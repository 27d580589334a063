//! Validated query extractor - Combines query-string parsing with validation.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Query-string extractor that validates the parsed parameters.
///
/// Unparsable parameters (`pageSize=abc`) are rejected as a bad request;
/// parameters that parse but break a rule (`pageSize=0`) as a validation
/// error. Both happen before the handler runs.
///
/// # Example
///
/// ```rust,ignore
/// use employee_api::api::extractors::ValidatedQuery;
/// use employee_api::types::PaginationParams;
///
/// async fn page(ValidatedQuery(params): ValidatedQuery<PaginationParams>) {
///     // params.page_size >= 1 here
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedQuery(value))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
