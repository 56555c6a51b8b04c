use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Success envelope `{data?, message?, success: true}`
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            status_code: None, // Default to 200 OK
        }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            status_code: Some(StatusCode::CREATED),
        }
    }

    /// Attach a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// 200 OK carrying only a message, no data
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: Some(message.into()),
            status_code: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);
        let mut envelope = Map::new();

        if let Some(data) = &self.data {
            match serde_json::to_value(data) {
                Ok(value) => {
                    envelope.insert("data".to_string(), value);
                }
                Err(e) => {
                    tracing::error!("Failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "message": "Failed to serialize response data.",
                            "success": false
                        })),
                    )
                        .into_response();
                }
            }
        }

        if let Some(message) = self.message {
            envelope.insert("message".to_string(), Value::String(message));
        }
        envelope.insert("success".to_string(), Value::Bool(true));

        (status, Json(Value::Object(envelope))).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn render<T: Serialize>(response: ApiResponse<T>) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn success_without_message() {
        let (status, body) = render(ApiResponse::success(vec![1, 2])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"data": [1, 2], "success": true}));
    }

    #[tokio::test]
    async fn created_with_message() {
        let (status, body) =
            render(ApiResponse::created(json!({"id": 1})).with_message("Post created successfully.")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"data": {"id": 1}, "message": "Post created successfully.", "success": true})
        );
    }

    #[tokio::test]
    async fn message_only_has_no_data_key() {
        let (status, body) = render(ApiResponse::message_only("Post deleted successfully.")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Post deleted successfully.", "success": true}));
    }
}
