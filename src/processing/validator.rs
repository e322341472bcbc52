//! Minimum-content checks for an extracted document

use crate::processing::document::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check that `document` carries a name, an email and at least one education entry.
pub fn validate(document: &Document) -> ValidationReport {
    let mut errors = Vec::new();

    if document.personal_info.name.trim().is_empty() {
        errors.push("Personal information: Name is required".to_string());
    }
    if document.personal_info.email.trim().is_empty() {
        errors.push("Personal information: Email is required".to_string());
    }
    if document.education.is_empty() {
        errors.push("At least one education entry is required".to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
