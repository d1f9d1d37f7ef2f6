// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall extraction with front suppression
//!
//! Every boundary edge becomes a wall except the ones lying on the room's
//! front line (the largest plan y, nearest the default 3D camera). Leaving
//! those out keeps the interior visible.
//!
//! The front test is per edge: boundaries with a stepped front line lose
//! every edge that sits on it.

use crate::boundary::{edges, max_y};
use nalgebra::Point2;

/// Distance (plan units) within which an edge midpoint counts as front
pub const FRONT_EPSILON: f64 = 0.1;

/// One wall derived from a boundary edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Edge midpoint in plan space
    pub midpoint: Point2<f64>,
    /// Rotation about the vertical axis in radians: the negated plan angle
    /// of the edge, ready for a y-up, right-handed 3D scene
    pub rotation: f64,
    /// Edge length in plan units
    pub length: f64,
}

impl WallSegment {
    /// Build the wall for the edge `p1 -> p2`
    #[inline]
    pub fn from_edge(p1: Point2<f64>, p2: Point2<f64>) -> Self {
        let d = p2 - p1;
        Self {
            midpoint: nalgebra::center(&p1, &p2),
            rotation: -d.y.atan2(d.x),
            length: d.norm(),
        }
    }

    /// Plan-space direction angle of the edge (inverse of `rotation`)
    #[inline]
    pub fn plan_angle(&self) -> f64 {
        -self.rotation
    }

    /// Edge endpoints reconstructed from midpoint, angle and length
    pub fn endpoints(&self) -> (Point2<f64>, Point2<f64>) {
        let angle = self.plan_angle();
        let half = nalgebra::Vector2::new(angle.cos(), angle.sin()) * (self.length / 2.0);
        (self.midpoint - half, self.midpoint + half)
    }
}

/// Extract the visible walls of a boundary using [`FRONT_EPSILON`]
#[inline]
pub fn extract_walls(boundary: &[Point2<f64>]) -> Vec<WallSegment> {
    extract_walls_with_epsilon(boundary, FRONT_EPSILON)
}

/// Extract the visible walls of a boundary with a custom front tolerance
///
/// Fewer than two points yields no walls.
pub fn extract_walls_with_epsilon(boundary: &[Point2<f64>], epsilon: f64) -> Vec<WallSegment> {
    if boundary.len() < 2 {
        return Vec::new();
    }
    let Some(front_y) = max_y(boundary) else {
        return Vec::new();
    };

    let mut walls = Vec::with_capacity(boundary.len());
    let mut suppressed = 0usize;

    for (p1, p2) in edges(boundary) {
        let wall = WallSegment::from_edge(p1, p2);
        if is_front(&wall, front_y, epsilon) {
            suppressed += 1;
            continue;
        }
        walls.push(wall);
    }

    tracing::trace!(
        edges = boundary.len(),
        walls = walls.len(),
        suppressed,
        front_y,
        "extracted walls"
    );

    walls
}

#[inline]
fn is_front(wall: &WallSegment, front_y: f64, epsilon: f64) -> bool {
    (wall.midpoint.y - front_y).abs() < epsilon
}
