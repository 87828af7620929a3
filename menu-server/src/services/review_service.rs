//! Review Service - public submission and moderation

use shared::models::{Review, ReviewInput, ReviewQuery};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use validator::Validate;

use crate::db::models::ReviewRecord;
use crate::db::repository::{RepoError, ReviewRepository};

#[derive(Clone, Debug)]
pub struct ReviewService {
    reviews: ReviewRepository,
}

impl ReviewService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            reviews: ReviewRepository::new(db),
        }
    }

    /// Reviews newest first; `approved=true` narrows to approved ones
    pub async fn list(&self, query: ReviewQuery) -> AppResult<Vec<Review>> {
        let records = if query.is_approved_only() {
            self.reviews.find_approved().await?
        } else {
            self.reviews.find_all().await?
        };
        Ok(records.into_iter().map(Review::from).collect())
    }

    /// Store a submission. New reviews always start unapproved.
    pub async fn create(&self, input: ReviewInput) -> AppResult<Review> {
        let input = input.normalized();
        input.validate()?;

        let record = ReviewRecord {
            id: None,
            name: input.name.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            comment: input.comment.unwrap_or_default(),
            rating: input.rating.unwrap_or_default(),
            is_approved: false,
            created_at: now_millis(),
        };
        let created = self.reviews.create(record).await?;
        Ok(created.into())
    }

    pub async fn set_approval(&self, id: &str, is_approved: bool) -> AppResult<Review> {
        let updated = self
            .reviews
            .set_approval(id, is_approved)
            .await
            .map_err(|e| map_not_found(e, id))?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> AppResult<Review> {
        let deleted = self
            .reviews
            .delete(id)
            .await
            .map_err(|e| map_not_found(e, id))?;
        Ok(deleted.into())
    }
}

fn map_not_found(err: RepoError, id: &str) -> AppError {
    match err {
        RepoError::NotFound(_) => {
            AppError::with_message(ErrorCode::ReviewNotFound, format!("Review {} not found", id))
                .with_detail("id", id)
        }
        other => other.into(),
    }
}
