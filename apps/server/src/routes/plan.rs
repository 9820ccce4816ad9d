// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan endpoints: generate-and-store and retrieval.

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::extract::{AppJson, AppPath};
use crate::services::generate_plan;
use crate::types::{CreatePlanResponse, PlanRequest, PlanResponse};
use crate::AppState;

/// POST /plan - Generate a new coverage plan and return its identifier.
pub async fn create_plan(
    State(state): State<AppState>,
    AppJson(request): AppJson<PlanRequest>,
) -> Result<Json<CreatePlanResponse>, ApiError> {
    request.validate()?;

    let result = generate_plan(request.to_params(), state.config.max_plan_points).await?;
    let id = state
        .store
        .create_plan(&request.name, &result.plan.points)
        .await?;

    tracing::info!(
        plan_id = id,
        name = %request.name,
        points = result.stats.kept_points,
        "Created plan"
    );

    Ok(Json(CreatePlanResponse { id }))
}

/// GET /plan/:id - Retrieve a stored plan by id.
pub async fn get_plan(
    State(state): State<AppState>,
    AppPath(plan_id): AppPath<i64>,
) -> Result<Json<PlanResponse>, ApiError> {
    let stored = state
        .store
        .get_plan(plan_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Plan {plan_id} not found")))?;

    tracing::debug!(plan_id, points = stored.points.len(), "Plan lookup");

    Ok(Json(PlanResponse {
        id: stored.record.id,
        name: stored.record.name,
        created_at: stored.record.created_at,
        points: stored.points,
    }))
}
