//! Result envelope handed to callers of the parser

use crate::processing::document::Document;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const SUCCESS_MESSAGE: &str = "Resume processed successfully";
pub const FAILURE_MESSAGE: &str = "Failed to process resume";

/// Success/error wrapper around one parsed document.
///
/// Exactly one of `data` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Document>,

    /// Acquired text, included on request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseOutcome {
    pub fn success(document: Document, raw_text: Option<String>) -> Self {
        Self {
            success: true,
            data: Some(document),
            raw_text,
            message: SUCCESS_MESSAGE.to_string(),
            error: None,
        }
    }

    pub fn failure(error: impl Display) -> Self {
        Self {
            success: false,
            data: None,
            raw_text: None,
            message: FAILURE_MESSAGE.to_string(),
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeParserError;

    #[test]
    fn test_success_envelope_shape() {
        let outcome = ParseOutcome::success(Document::default(), Some("Jane Doe".to_string()));
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], SUCCESS_MESSAGE);
        assert_eq!(json["rawText"], "Jane Doe");
        assert!(json.get("error").is_none());
        assert_eq!(json["data"]["personalInfo"]["name"], "");
        assert!(json["data"]["education"].as_array().unwrap().is_empty());
        assert!(json["data"]["skills"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let outcome = ParseOutcome::failure(ResumeParserError::InvalidInput("File does not exist: cv.pdf".to_string()));
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], FAILURE_MESSAGE);
        assert_eq!(json["error"], "Invalid input: File does not exist: cv.pdf");
        assert!(json.get("data").is_none());
        assert!(json.get("rawText").is_none());
    }
}
