//! Review Model

use serde::{Deserialize, Serialize};
use shared::models::Review;
use surrealdb::RecordId;

use super::record_key;

/// Review record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub phone: String,
    pub comment: String,
    pub rating: i64,
    #[serde(default)]
    pub is_approved: bool,
    pub created_at: i64,
}

impl From<ReviewRecord> for Review {
    fn from(r: ReviewRecord) -> Self {
        Self {
            id: record_key(&r.id),
            name: r.name,
            phone: r.phone,
            comment: r.comment,
            rating: r.rating,
            is_approved: r.is_approved,
            created_at: r.created_at,
        }
    }
}
