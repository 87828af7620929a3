//! Review Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::ReviewRecord;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "review";

#[derive(Clone, Debug)]
pub struct ReviewRepository {
    base: BaseRepository,
}

impl ReviewRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All reviews, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ReviewRecord>> {
        let reviews: Vec<ReviewRecord> = self
            .base
            .db()
            .query("SELECT * FROM review ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reviews)
    }

    /// Approved reviews only, newest first
    pub async fn find_approved(&self) -> RepoResult<Vec<ReviewRecord>> {
        let reviews: Vec<ReviewRecord> = self
            .base
            .db()
            .query("SELECT * FROM review WHERE is_approved = true ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reviews)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ReviewRecord>> {
        let key = strip_table_prefix(TABLE, id);
        let review: Option<ReviewRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(review)
    }

    pub async fn create(&self, record: ReviewRecord) -> RepoResult<ReviewRecord> {
        let created: Option<ReviewRecord> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create review".to_string()))
    }

    /// Set the moderation flag, leaving every other field untouched
    pub async fn set_approval(&self, id: &str, is_approved: bool) -> RepoResult<ReviewRecord> {
        let key = strip_table_prefix(TABLE, id);
        // Existence check first: UPDATE on a missing record id is a no-op
        if self.find_by_id(key).await?.is_none() {
            return Err(RepoError::NotFound(format!("Review {} not found", id)));
        }

        let mut result = self
            .base
            .db()
            .query("UPDATE type::thing($tb, $key) SET is_approved = $approved RETURN AFTER")
            .bind(("tb", TABLE))
            .bind(("key", key.to_string()))
            .bind(("approved", is_approved))
            .await?;
        let reviews: Vec<ReviewRecord> = result.take(0)?;
        reviews
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<ReviewRecord> {
        let key = strip_table_prefix(TABLE, id);
        let deleted: Option<ReviewRecord> = self.base.db().delete((TABLE, key)).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Review {} not found", id)))
    }
}
