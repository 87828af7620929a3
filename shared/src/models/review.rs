//! Review Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer review, gated by moderation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub comment: String,
    /// 1-5
    pub rating: i64,
    #[serde(default)]
    pub is_approved: bool,
    /// Epoch millis
    pub created_at: i64,
}

/// Public submission payload
///
/// Any `isApproved` sent by the caller is ignored: new reviews are always
/// stored unapproved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "phone is required"),
        length(min = 1, max = 30, message = "phone must be between 1 and 30 characters")
    )]
    pub phone: Option<String>,
    #[validate(
        required(message = "comment is required"),
        length(min = 1, max = 1000, message = "comment must be between 1 and 1000 characters")
    )]
    pub comment: Option<String>,
    #[validate(
        required(message = "rating is required"),
        range(min = 1, max = 5, message = "rating must be an integer between 1 and 5")
    )]
    pub rating: Option<i64>,
}

impl ReviewInput {
    pub fn normalized(self) -> Self {
        let trim = |v: Option<String>| v.map(|s| s.trim().to_string());
        Self {
            name: trim(self.name),
            phone: trim(self.phone),
            comment: trim(self.comment),
            rating: self.rating,
        }
    }
}

/// PATCH /api/reviews/{id} body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewApproval {
    pub is_approved: bool,
}

/// GET /api/reviews query string
///
/// Kept as raw text: only the exact value `true` narrows the list, any other
/// value (or none) returns every review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<String>,
}

impl ReviewQuery {
    pub fn approved_only() -> Self {
        Self {
            approved: Some("true".to_string()),
        }
    }

    pub fn is_approved_only(&self) -> bool {
        self.approved.as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ali() -> ReviewInput {
        ReviewInput {
            name: Some("Ali".into()),
            phone: Some("123".into()),
            comment: Some("Great".into()),
            rating: Some(5),
        }
    }

    #[test]
    fn test_valid_review() {
        assert!(ali().validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        for rating in [0, 6, -1] {
            let input = ReviewInput {
                rating: Some(rating),
                ..ali()
            };
            let errors = input.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("rating"));
        }
    }

    #[test]
    fn test_missing_fields_reported() {
        let errors = ReviewInput::default().validate().unwrap_err();
        let fields = errors.field_errors();
        for f in ["name", "phone", "comment", "rating"] {
            assert!(fields.contains_key(f), "missing {f}");
        }
    }

    #[test]
    fn test_blank_comment_rejected_after_normalize() {
        let input = ReviewInput {
            comment: Some("  \n ".into()),
            ..ali()
        }
        .normalized();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_fractional_rating_fails_to_parse() {
        let json = r#"{"name":"Ali","phone":"123","comment":"Great","rating":4.5}"#;
        assert!(serde_json::from_str::<ReviewInput>(json).is_err());
    }

    #[test]
    fn test_is_approved_in_input_is_ignored() {
        let json = r#"{"name":"Ali","phone":"123","comment":"Great","rating":5,"isApproved":true}"#;
        let input: ReviewInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, ali());
    }

    #[test]
    fn test_review_query() {
        assert!(!ReviewQuery::default().is_approved_only());
        assert!(ReviewQuery::approved_only().is_approved_only());
        for value in ["false", "1", "yes", "", "TRUE"] {
            let query = ReviewQuery {
                approved: Some(value.to_string()),
            };
            assert!(!query.is_approved_only(), "{value:?}");
        }
    }

    #[test]
    fn test_approval_wire_format() {
        let body: ReviewApproval = serde_json::from_str(r#"{"isApproved":true}"#).unwrap();
        assert!(body.is_approved);
    }
}
