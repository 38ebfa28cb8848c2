use serde::Deserialize;
use thiserror::Error;

use super::validation::ValidationError;

/// Ошибка обращения к backend API.
///
/// `Display` отдаёт текст, который показывается пользователю без изменений.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),
}

/// Тело ошибки backend: `{"detail": ...}` либо `{"message": ...}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// Falls back to `HTTP <status>` when the body carries no readable message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message for a failed load of `subject`; a 404 reads as "<subject> not found".
    pub fn describe(&self, subject: &str) -> String {
        if self.is_not_found() {
            format!("{} not found", subject)
        } else {
            self.to_string()
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if let Some(detail) = parsed.detail {
        match detail {
            serde_json::Value::String(s) if !s.trim().is_empty() => return Some(s),
            // 422 от FastAPI: список {loc, msg, type}
            serde_json::Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .map(str::to_string)
                    .collect();
                if !messages.is_empty() {
                    return Some(messages.join("; "));
                }
            }
            _ => {}
        }
    }
    parsed.message.filter(|m| !m.trim().is_empty())
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_used_verbatim() {
        let err = ApiError::from_status(404, r#"{"detail":"Montaj görevi bulunamadı"}"#);
        assert_eq!(err.to_string(), "Montaj görevi bulunamadı");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_describe_missing_subject() {
        let missing = ApiError::from_status(404, "");
        assert_eq!(missing.describe("Job JOB-9"), "Job JOB-9 not found");
        let failed = ApiError::from_status(500, r#"{"detail":"db down"}"#);
        assert_eq!(failed.describe("Job JOB-9"), "db down");
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = r#"{"detail":[{"loc":["body","item"],"msg":"field required","type":"value_error"},{"loc":["body","faultSource"],"msg":"field required","type":"value_error"}]}"#;
        let err = ApiError::from_status(422, body);
        assert_eq!(err.to_string(), "field required; field required");
    }

    #[test]
    fn test_message_field() {
        let err = ApiError::from_status(400, r#"{"message":"Önce sorunları çözün"}"#);
        assert_eq!(err.to_string(), "Önce sorunları çözün");
    }

    #[test]
    fn test_unreadable_body_falls_back_to_status() {
        assert_eq!(ApiError::from_status(500, "<html>").to_string(), "HTTP 500");
        assert_eq!(ApiError::from_status(502, "").to_string(), "HTTP 502");
        assert_eq!(ApiError::from_status(400, r#"{"detail":""}"#).to_string(), "HTTP 400");
    }

    #[test]
    fn test_validation_conversion() {
        let err: ApiError = ValidationError::MissingFile.into();
        assert_eq!(err, ApiError::Validation(ValidationError::MissingFile.to_string()));
        assert_eq!(err.status(), None);
    }
}
