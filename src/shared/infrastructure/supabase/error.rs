use crate::shared::errors::AppError;
use reqwest::StatusCode;
use serde::Deserialize;

/// Postgres error code for a unique-key violation
pub const UNIQUE_VIOLATION: &str = "23505";

/// Error body returned by the REST layer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostgrestErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestErrorBody {
    /// Parse a raw body; non-JSON bodies become the message
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self {
            message: Some(raw.trim().to_string()).filter(|m| !m.is_empty()),
            ..Self::default()
        })
    }

    fn describe(&self, status: StatusCode) -> String {
        let mut text = self
            .message
            .clone()
            .unwrap_or_else(|| format!("HTTP {}", status));
        if let Some(details) = self.details.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(&format!(" ({})", details));
        }
        text
    }
}

/// Map a failed store response onto the crate error taxonomy
pub fn map_error_response(status: StatusCode, raw_body: &str, table: &str) -> AppError {
    let body = PostgrestErrorBody::parse(raw_body);
    let description = body.describe(status);

    if status == StatusCode::CONFLICT || body.code.as_deref() == Some(UNIQUE_VIOLATION) {
        return AppError::Conflict(format!("{}: {}", table, description));
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::Unauthorized(format!("Access to {} denied: {}", table, description))
        }
        StatusCode::NOT_FOUND => AppError::NotFound(format!("{}: {}", table, description)),
        StatusCode::TOO_MANY_REQUESTS => {
            AppError::RateLimitError(format!("{}: {}", table, description))
        }
        StatusCode::REQUEST_TIMEOUT => {
            AppError::ExternalServiceError(format!("{} request timed out", table))
        }
        s if s.is_server_error() => AppError::ExternalServiceError(format!(
            "Store unavailable while accessing {}: {}",
            table, description
        )),
        _ => AppError::ApiError(format!("{} request failed: {}", table, description)),
    }
}
