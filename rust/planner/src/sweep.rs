// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boustrophedon (lawn-mower) sweep over a rectangular wall.
//!
//! ```text
//! (0,0) -----------------> +x (width)
//!   |
//!   v
//!   +y (height)
//! ```
//!
//! Rows are visited in increasing `y`. Even rows run left to right, odd rows
//! right to left. Grid samples that fall inside an obstacle are dropped from
//! the path; the sweep does not detour around them.

use crate::error::{Error, Result};
use crate::types::{CoveragePlan, PlanParams, Point2D, Rectangle};

/// Slack allowed past the wall edge so the last row/column survives
/// floating-point error in `k * step`.
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Decimal places kept in every emitted coordinate.
pub const COORDINATE_DECIMALS: i32 = 6;

const MAX_EXACT_INDEX: f64 = (1u64 << 52) as f64;

/// Upper bound on the up-front path reservation; larger paths grow as needed.
const MAX_PREALLOCATED_POINTS: usize = 1 << 20;

/// Plan a coverage path for the given wall and obstacles.
///
/// Returns the ordered list of grid points that survive obstacle filtering.
/// An empty list is a valid result. Fails when `step_size` is not strictly
/// positive, or when it is so small against the wall that grid indices stop
/// being distinct as `f64`.
pub fn plan(
    wall_width: f64,
    wall_height: f64,
    obstacles: &[Rectangle],
    step_size: f64,
) -> Result<Vec<Point2D>> {
    validate_step(step_size)?;

    let columns = axis_count(wall_width, step_size)?;
    let rows = axis_count(wall_height, step_size)?;
    if columns == 0 || rows == 0 {
        return Ok(Vec::new());
    }

    let first_x = axis_sample(0, step_size);
    let last_x = axis_sample(columns - 1, step_size);

    let mut points =
        Vec::with_capacity(columns.saturating_mul(rows).min(MAX_PREALLOCATED_POINTS));
    let mut visit = |x: f64, y: f64| {
        let candidate = Point2D::new(x, y);
        if !obstacles.iter().any(|o| o.contains(&candidate)) {
            points.push(candidate);
        }
    };

    for row in 0..rows {
        let y = axis_sample(row, step_size);

        // Obstacles are convex, so one holding both row ends holds the row.
        let row_blocked = obstacles.iter().any(|o| {
            o.contains(&Point2D::new(first_x, y)) && o.contains(&Point2D::new(last_x, y))
        });
        if row_blocked {
            continue;
        }

        if row % 2 == 0 {
            for k in 0..columns {
                visit(axis_sample(k, step_size), y);
            }
        } else {
            for k in (0..columns).rev() {
                visit(axis_sample(k, step_size), y);
            }
        }
    }

    Ok(points)
}

/// Run [`plan`] over a [`PlanParams`] bundle and keep the inputs with the result.
pub fn plan_coverage(params: &PlanParams) -> Result<CoveragePlan> {
    let points = plan(
        params.wall_width,
        params.wall_height,
        &params.obstacles,
        params.step_size,
    )?;
    Ok(CoveragePlan {
        params: params.clone(),
        points,
    })
}

/// Number of grid candidates (columns x rows) a sweep would visit before
/// obstacle filtering, computed without generating them.
pub fn estimate_point_count(wall_width: f64, wall_height: f64, step_size: f64) -> Result<usize> {
    validate_step(step_size)?;
    let columns = axis_count(wall_width, step_size)?;
    let rows = axis_count(wall_height, step_size)?;
    Ok(columns.saturating_mul(rows))
}

fn validate_step(step_size: f64) -> Result<()> {
    // Written as a negated comparison so NaN is rejected too.
    if !(step_size > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "step_size must be > 0, got {step_size}"
        )));
    }
    Ok(())
}

/// Round to [`COORDINATE_DECIMALS`] places.
#[inline]
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    (value * scale).round() / scale
}

/// Number of samples `k * step` with `k * step <= extent + BOUNDARY_TOLERANCE`.
///
/// Non-positive or non-finite extents yield zero samples.
fn axis_count(extent: f64, step: f64) -> Result<usize> {
    if !(extent > 0.0) || !extent.is_finite() {
        return Ok(0);
    }
    let limit = extent + BOUNDARY_TOLERANCE;
    let ratio = (limit / step).floor();

    // Past 2^52 consecutive indices are no longer distinct as f64.
    if ratio >= MAX_EXACT_INDEX {
        return Err(Error::InvalidParameter(format!(
            "step_size {step} is too small for a wall extent of {extent}"
        )));
    }

    // The float division only seeds the count; the loops settle it against
    // the same `k * step` products the sweep emits.
    let mut count = ratio as usize + 1;
    while count > 0 && ((count - 1) as f64) * step > limit {
        count -= 1;
    }
    while (count as f64) * step <= limit {
        count += 1;
    }
    Ok(count)
}

#[inline]
fn axis_sample(index: usize, step: f64) -> f64 {
    round_coordinate(index as f64 * step)
}
