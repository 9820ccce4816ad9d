// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Wallcover Planner
//!
//! Coverage path planning for a wall-finishing robot.
//!
//! Given the wall dimensions, a list of rectangular obstacles and a step
//! size, [`plan`] sweeps the wall row by row in alternating directions and
//! returns the ordered grid points that do not fall inside any obstacle.
//!
//! The planner is a pure function: no I/O, no shared state, identical inputs
//! always produce identical output. It can be called from any number of
//! threads without coordination.
//!
//! ```
//! use wallcover_planner::{plan, Point2D, Rectangle};
//!
//! let points = plan(1.0, 1.0, &[], 0.5).unwrap();
//! assert_eq!(points.len(), 9);
//! assert_eq!(points[3], Point2D::new(1.0, 0.5));
//!
//! let blocked = plan(1.0, 1.0, &[Rectangle::new(0.0, 0.0, 1.0, 1.0)], 0.5).unwrap();
//! assert!(blocked.is_empty());
//! ```

pub mod error;
pub mod sweep;
pub mod types;

pub use error::{Error, Result};
pub use sweep::{
    estimate_point_count, plan, plan_coverage, round_coordinate, BOUNDARY_TOLERANCE,
    COORDINATE_DECIMALS,
};
pub use types::{CoveragePlan, PlanParams, Point2D, Rectangle};
