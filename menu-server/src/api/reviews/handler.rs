//! Review API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::MessageResponse;
use shared::models::{Review, ReviewApproval, ReviewInput, ReviewQuery};

use crate::api::{AppJson, AppResult};
use crate::audit_log;
use crate::core::ServerState;

const RESOURCE: &str = "review";

/// GET /api/reviews?approved=true - 获取评价 (approved=true 只返回已审核)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReviewQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.reviews.list(query).await?;
    Ok(Json(reviews))
}

/// POST /api/reviews - 提交评价 (始终为未审核状态)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ReviewInput>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let review = state.reviews.create(payload).await?;
    tracing::info!(review_id = %review.id, rating = review.rating, "Review submitted");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Review submitted successfully")),
    ))
}

/// PATCH /api/reviews/{id} - 审核 / 撤销审核
pub async fn set_approval(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ReviewApproval>,
) -> AppResult<Json<Review>> {
    let review = state.reviews.set_approval(&id, payload.is_approved).await?;

    let action = if review.is_approved { "approve" } else { "reject" };
    audit_log!(action, RESOURCE, &review.id, review.name.as_str());

    Ok(Json(review))
}

/// DELETE /api/reviews/{id} - 删除评价
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let review = state.reviews.delete(&id).await?;

    audit_log!("delete", RESOURCE, &review.id, review.name.as_str());

    Ok(Json(MessageResponse::new("Review deleted successfully")))
}
