//! Database Models
//!
//! Stored shape of each table. Field names are snake_case in the store;
//! conversion to the camelCase wire models lives next to each record.

pub mod product;
pub mod review;

pub use product::{CategoryPair, CustomizationRecord, ProductRecord};
pub use review::ReviewRecord;

use surrealdb::RecordId;

/// Key part of a record id ("product:abc" -> "abc")
pub fn record_key(id: &Option<RecordId>) -> String {
    id.as_ref()
        .map(|id| id.key().to_string())
        .unwrap_or_default()
}
