// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core value types: wall points, obstacle rectangles and finished plans.

use serde::{Deserialize, Serialize};

/// A point in wall coordinates.
///
/// The origin is the bottom-left corner of the wall, `x` grows to the right
/// and `y` grows towards `+height`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned obstacle rectangle anchored at its bottom-left corner.
///
/// The boundary belongs to the obstacle. Negative extents are kept as given,
/// which makes the rectangle contain nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive containment test on all four edges.
    #[inline]
    pub fn contains(&self, point: &Point2D) -> bool {
        self.x <= point.x
            && point.x <= self.x + self.width
            && self.y <= point.y
            && point.y <= self.y + self.height
    }
}

impl From<[f64; 4]> for Rectangle {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<(f64, f64, f64, f64)> for Rectangle {
    fn from((x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, width, height)
    }
}

/// Inputs of a single planning call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanParams {
    pub wall_width: f64,
    pub wall_height: f64,
    #[serde(default)]
    pub obstacles: Vec<Rectangle>,
    pub step_size: f64,
}

impl PlanParams {
    pub fn new(wall_width: f64, wall_height: f64, step_size: f64) -> Self {
        Self {
            wall_width,
            wall_height,
            obstacles: Vec::new(),
            step_size,
        }
    }

    /// Builder-style obstacle append.
    pub fn with_obstacle(mut self, obstacle: impl Into<Rectangle>) -> Self {
        self.obstacles.push(obstacle.into());
        self
    }
}

/// An ordered coverage path together with the parameters that produced it.
///
/// Plans carry no identity of their own; storage layers assign one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoveragePlan {
    pub params: PlanParams,
    pub points: Vec<Point2D>,
}

impl CoveragePlan {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total straight-line travel distance along the ordered points.
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Split the path into rows of consecutive points sharing a `y` value.
    ///
    /// A row fully covered by obstacles produces no entry.
    pub fn rows(&self) -> Vec<&[Point2D]> {
        let mut rows = Vec::new();
        let mut start = 0;
        for i in 1..=self.points.len() {
            if i == self.points.len() || self.points[i].y != self.points[start].y {
                rows.push(&self.points[start..i]);
                start = i;
            }
        }
        rows
    }
}
