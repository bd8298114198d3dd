//! Data Transfer Objects - request/response types for the API.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::patch::{Patch, empty_string_as_none, empty_string_as_null};

/// Request to create a formula.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFormulaRequest {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// Request to partially update a formula. Keys left out of the body leave
/// the stored column untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateFormulaRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_title_patch"))]
    pub title: Patch<String>,
    #[serde(default, deserialize_with = "empty_string_as_null")]
    pub description: Patch<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_content_patch"))]
    pub content: Patch<String>,
}

fn validate_title_patch(title: &Patch<String>) -> Result<(), ValidationError> {
    match title {
        Patch::Unset => Ok(()),
        Patch::Null => Err(null_error("title")),
        Patch::Value(value) => {
            let chars = value.chars().count();
            if chars == 0 || chars > 255 {
                Err(ValidationError::new("length")
                    .with_message(Cow::Borrowed("title must be 1-255 characters")))
            } else {
                Ok(())
            }
        }
    }
}

fn validate_content_patch(content: &Patch<String>) -> Result<(), ValidationError> {
    match content {
        Patch::Unset => Ok(()),
        Patch::Null => Err(null_error("content")),
        Patch::Value(value) if value.is_empty() => Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("content must not be empty"))),
        Patch::Value(_) => Ok(()),
    }
}

fn null_error(field: &'static str) -> ValidationError {
    ValidationError::new("null").with_message(Cow::Owned(format!("{field} must not be null")))
}

/// A stored formula as returned by every read and write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Acknowledgement returned by delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_unknown_fields() {
        let result = serde_json::from_str::<CreateFormulaRequest>(
            r#"{"title": "Euler", "content": "e", "author": "me"}"#,
        );
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn test_create_requires_title_and_content() {
        assert!(serde_json::from_str::<CreateFormulaRequest>(r#"{"title": "Euler"}"#).is_err());
        assert!(serde_json::from_str::<CreateFormulaRequest>(r#"{"content": "e"}"#).is_err());
    }

    #[test]
    fn test_create_empty_description_is_none() {
        let req: CreateFormulaRequest =
            serde_json::from_str(r#"{"title": "Euler", "description": "", "content": "e"}"#)
                .unwrap();
        assert!(req.description.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_empty_title_and_content() {
        let req: CreateFormulaRequest =
            serde_json::from_str(r#"{"title": "", "content": ""}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
    }

    #[test]
    fn test_create_title_limit_counts_characters() {
        let title: String = "π".repeat(255);
        let req = CreateFormulaRequest {
            title,
            description: None,
            content: "c".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = CreateFormulaRequest {
            title: "a".repeat(256),
            ..req
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_title_limit_counts_characters() {
        let req = UpdateFormulaRequest {
            title: Patch::Value("π".repeat(255)),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let req = UpdateFormulaRequest {
            title: Patch::Value("a".repeat(256)),
            ..Default::default()
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_null_description_is_none() {
        let req: CreateFormulaRequest =
            serde_json::from_str(r#"{"title": "Euler", "description": null, "content": "e"}"#)
                .unwrap();
        assert!(req.description.is_none());
    }

    #[test]
    fn test_update_empty_body_is_valid() {
        let req: UpdateFormulaRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.title.is_unset() && req.description.is_unset() && req.content.is_unset());
    }

    #[test]
    fn test_update_rejects_null_or_empty_title() {
        let req: UpdateFormulaRequest = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("title"));

        let req: UpdateFormulaRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_rejects_empty_content() {
        let req: UpdateFormulaRequest = serde_json::from_str(r#"{"content": ""}"#).unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("content"));
    }

    #[test]
    fn test_update_empty_description_clears() {
        let req: UpdateFormulaRequest = serde_json::from_str(r#"{"description": ""}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.description, Patch::Null);
    }

    #[test]
    fn test_update_rejects_unknown_fields() {
        assert!(serde_json::from_str::<UpdateFormulaRequest>(r#"{"id": "x"}"#).is_err());
    }
}
