// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coverage planning service, run off the async executor.

use wallcover_planner::{estimate_point_count, plan_coverage, CoveragePlan, PlanParams};

use crate::error::ApiError;

/// Statistics gathered while planning.
#[derive(Debug, Clone, Default)]
pub struct PlanningStats {
    /// Grid candidates before obstacle filtering.
    pub candidate_points: usize,
    /// Points kept in the final path.
    pub kept_points: usize,
    /// Travel distance along the path (metres).
    pub path_length: f64,
    /// Time spent in the sweep (ms).
    pub plan_time_ms: u64,
}

/// Result of planning a single request.
pub struct PlanningResult {
    pub plan: CoveragePlan,
    pub stats: PlanningStats,
}

/// Plan a coverage path on the blocking thread pool.
///
/// Requests whose grid would exceed `max_points` candidates are rejected
/// before any work is done.
pub async fn generate_plan(
    params: PlanParams,
    max_points: usize,
) -> Result<PlanningResult, ApiError> {
    let candidate_points =
        estimate_point_count(params.wall_width, params.wall_height, params.step_size)?;
    if candidate_points > max_points {
        tracing::warn!(candidate_points, max_points, "Rejecting oversized plan");
        return Err(ApiError::PlanTooLarge {
            points: candidate_points,
            max: max_points,
        });
    }

    // CPU-bound sweep; keep it off the async workers
    let (plan, elapsed) = tokio::task::spawn_blocking(move || {
        let start = std::time::Instant::now();
        let plan = plan_coverage(&params);
        (plan, start.elapsed())
    })
    .await?;
    let plan = plan?;

    let stats = PlanningStats {
        candidate_points,
        kept_points: plan.len(),
        path_length: plan.path_length(),
        plan_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    };

    tracing::info!(
        wall_width = plan.params.wall_width,
        wall_height = plan.params.wall_height,
        step_size = plan.params.step_size,
        obstacles = plan.params.obstacles.len(),
        candidate_points = stats.candidate_points,
        kept_points = stats.kept_points,
        path_length = stats.path_length,
        plan_time_ms = stats.plan_time_ms,
        "Generated coverage plan"
    );

    Ok(PlanningResult { plan, stats })
}
