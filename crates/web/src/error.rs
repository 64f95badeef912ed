use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors. Every variant renders as a JSON body with a `msg` field.
#[derive(Debug)]
pub enum WebError {
    /// `fields` is the payload's field order, used to order the messages.
    Validation {
        errors: ValidationErrors,
        fields: &'static [&'static str],
    },
    BadRequest(String),
    NotFound(String),
    /// Store failure; `msg` says which operation failed.
    Storage { msg: String, source: StorageError },
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { errors, .. } => write!(f, "Validation error: {}", errors),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Storage { msg, source } => write!(f, "{}: {}", msg, source),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            Self::Validation { errors, fields } => (
                StatusCode::BAD_REQUEST,
                json!({ "msg": validation_message(errors, fields) }),
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "msg": msg })),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "msg": msg })),
            Self::Storage { msg, source } => {
                tracing::error!("{}: {:?}", msg, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "msg": msg,
                        "error": source.to_string()
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Field messages in payload order, joined with "; ". Fields missing from
/// `order` go last, by name.
fn validation_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let mut failed: Vec<_> = errors.field_errors().into_iter().collect();
    failed.sort_by_key(|(name, _)| {
        let position = order
            .iter()
            .position(|field| name == field)
            .unwrap_or(usize::MAX);
        (position, name.clone())
    });

    failed
        .into_iter()
        .flat_map(|(_, errors)| {
            errors.iter().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl WebError {
    pub fn validation(errors: ValidationErrors, fields: &'static [&'static str]) -> Self {
        Self::Validation { errors, fields }
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use storage::dto::competition::CompetitionRequest;
    use storage::dto::judge::JudgeRequest;
    use storage::repository::{CompetitionResource, JudgeResource, Resource};

    async fn render(err: WebError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_messages_follow_payload_order() {
        let errors = JudgeRequest::default().normalize().unwrap_err();

        let (status, body) = render(WebError::validation(errors, JudgeResource::FIELDS)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "msg": "Name is required; Email is required" }));

        let errors = CompetitionRequest {
            date: Some("March 3".into()),
            ..Default::default()
        }
        .normalize()
        .unwrap_err();

        let (_, body) = render(WebError::validation(errors, CompetitionResource::FIELDS)).await;

        assert_eq!(
            body["msg"],
            "Name is required; Description is required; Date must be in YYYY-MM-DD format"
        );
    }

    #[tokio::test]
    async fn unordered_fields_fall_back_to_name_order() {
        let errors = JudgeRequest::default().normalize().unwrap_err();

        let (_, body) = render(WebError::validation(errors, &[])).await;

        assert_eq!(body["msg"], "Email is required; Name is required");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = render(WebError::NotFound("Judge not found".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "msg": "Judge not found" }));
    }

    #[tokio::test]
    async fn storage_errors_are_500_with_detail() {
        let err = WebError::Storage {
            msg: "Failed to add judge".into(),
            source: StorageError::Database(sqlx::Error::PoolTimedOut),
        };

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["msg"], "Failed to add judge");
        assert!(body["error"].as_str().unwrap().contains("pool timed out"));
    }
}
