use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequestParts, Path, Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::schemas::{RequestPart, RequestSchema, Schema, ValidatedRequest, ValidationIssue};

pub const INVALID_JSON: &str = "Request body must be valid JSON.";

/// Validate the declared parts of a request against `S` before the handler runs.
///
/// On success a [`ValidatedRequest<S>`] is inserted into the request extensions
/// and the body is handed on unchanged. On failure the handler is never called
/// and a 400 enumerating every failing field is returned. A body that is not
/// JSON is one body issue with an empty field name. Parts `S` leaves
/// undeclared are not read.
///
/// ```ignore
/// put(update_post).layer(from_fn_with_state(state, validate_request::<UpdatePostRequest>))
/// ```
pub async fn validate_request<S: RequestSchema>(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = request.into_parts();
    let mut issues = Vec::new();

    let params_input = if <S::Params as Schema>::DECLARED {
        let raw = Path::<HashMap<String, String>>::from_request_parts(&mut parts, &state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();
        Value::Object(raw.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
    } else {
        Value::Null
    };
    let params = check::<S::Params>(RequestPart::Params, &params_input, &mut issues);

    let (body, body_input) = if <S::Body as Schema>::DECLARED {
        let bytes = to_bytes(body, state.config.api.max_request_size_bytes)
            .await
            .map_err(|e| {
                tracing::debug!("Failed to read request body: {}", e);
                ApiError::bad_request("Request body could not be read.")
            })?;
        let value = if bytes.is_empty() {
            Some(Value::Object(Map::new()))
        } else {
            serde_json::from_slice(&bytes).ok()
        };
        (Body::from(bytes), value)
    } else {
        (body, Some(Value::Null))
    };
    let validated_body = match body_input {
        Some(input) => check::<S::Body>(RequestPart::Body, &input, &mut issues),
        None => {
            issues.push(ValidationIssue {
                location: RequestPart::Body,
                field: String::new(),
                message: INVALID_JSON.to_string(),
            });
            None
        }
    };

    match (params, validated_body) {
        (Some(params), Some(body_value)) if issues.is_empty() => {
            parts
                .extensions
                .insert(ValidatedRequest::<S>::new(params, body_value));
            Ok(next.run(Request::from_parts(parts, body)).await)
        }
        _ => {
            tracing::debug!(issues = issues.len(), "Request failed validation");
            Err(ApiError::validation_error(issues))
        }
    }
}

fn check<T: Schema>(
    location: RequestPart,
    input: &Value,
    issues: &mut Vec<ValidationIssue>,
) -> Option<T> {
    match T::parse(input) {
        Ok(value) => Some(value),
        Err(field_issues) => {
            issues.extend(
                field_issues
                    .into_iter()
                    .map(|issue| ValidationIssue::from_field(location, issue)),
            );
            None
        }
    }
}
