//! DTOs for feeding documents into the server-side knowledge base.

use serde::{Deserialize, Serialize};

/// Success body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

/// Failure body of `POST /upload` (sent with a non-2xx status).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadError {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_message() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"message":"Document added to knowledge base"}"#).unwrap();
        assert_eq!(response.message, "Document added to knowledge base");
    }

    #[test]
    fn parses_error_detail() {
        let error: UploadError = serde_json::from_str(r#"{"detail":"bad format"}"#).unwrap();
        assert_eq!(error.detail, "bad format");
    }
}
