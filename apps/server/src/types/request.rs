// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use serde::Deserialize;
use wallcover_planner::{PlanParams, Rectangle};

use crate::error::ApiError;

fn default_step_size() -> f64 {
    0.1
}

/// Request payload for a new coverage plan.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// Human-readable name for the plan.
    pub name: String,
    /// Wall width in metres.
    pub wall_width: f64,
    /// Wall height in metres.
    pub wall_height: f64,
    /// Rectangular obstacles as `[x, y, width, height]`.
    #[serde(default)]
    pub obstacles: Vec<[f64; 4]>,
    /// Spacing between coverage points in metres.
    #[serde(default = "default_step_size")]
    pub step_size: f64,
}

impl PlanRequest {
    /// Check field constraints before any planning work is done.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("name must not be empty".into()));
        }
        positive("wall_width", self.wall_width)?;
        positive("wall_height", self.wall_height)?;
        positive("step_size", self.step_size)?;

        if let Some(i) = self
            .obstacles
            .iter()
            .position(|o| o.iter().any(|v| !v.is_finite()))
        {
            return Err(ApiError::Validation(format!(
                "obstacles[{i}] must contain finite numbers"
            )));
        }
        Ok(())
    }

    /// Planner inputs carried by this request.
    pub fn to_params(&self) -> PlanParams {
        PlanParams {
            wall_width: self.wall_width,
            wall_height: self.wall_height,
            obstacles: self.obstacles.iter().copied().map(Rectangle::from).collect(),
            step_size: self.step_size,
        }
    }
}

fn positive(field: &str, value: f64) -> Result<(), ApiError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "{field} must be a finite number > 0, got {value}"
        )))
    }
}
