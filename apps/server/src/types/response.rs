// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use serde::{Deserialize, Serialize};

/// Returned after a plan has been generated and stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanResponse {
    /// Identifier assigned by storage.
    pub id: i64,
}

/// A single point of a stored trajectory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanPoint {
    /// Zero-based position in the trajectory.
    pub seq: i64,
    pub x: f64,
    pub y: f64,
}

/// A stored plan with its points in trajectory order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    /// Creation time (UTC, RFC 3339).
    pub created_at: String,
    pub points: Vec<PlanPoint>,
}
