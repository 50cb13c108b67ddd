//! Shared response envelope for API handlers.
//!
//! Every endpoint, success or failure, answers with the same
//! `{ success, message?, count?, data?, errors? }` shape. Use
//! [`ApiResponse`] instead of ad-hoc `serde_json::json!` so the
//! envelope stays consistent and type-checked.

use serde::Serialize;

/// Standard response envelope.
///
/// Optional parts are skipped entirely when unset, so a plain success
/// serializes as `{"success":true,"data":...}` with no `null` noise.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope carrying only `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            errors: None,
        }
    }

    /// Success envelope with a human-readable message and `data`.
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
            errors: None,
        }
    }

    /// Failure envelope with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            errors: None,
        }
    }

    /// Attach a result count (list endpoints).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Attach the per-field error list (validation failures).
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_skips_unset_parts() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn failure_with_errors_keeps_the_list() {
        let json = serde_json::to_value(
            ApiResponse::<()>::failure("Validation Error")
                .with_errors(vec!["Client name is required".to_string()]),
        )
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "message": "Validation Error",
                "errors": ["Client name is required"],
            })
        );
    }

    #[test]
    fn list_envelope_carries_count() {
        let json = serde_json::to_value(ApiResponse::success(vec!["a"]).with_count(1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "count": 1, "data": ["a"] })
        );
    }
}
