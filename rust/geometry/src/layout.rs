// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan-space helpers for the 2D editor
//!
//! The 2D view draws in plan space directly; these helpers only fit the plan
//! onto a canvas and keep items inside the room box.

use crate::boundary::Boundary;
use nalgebra::Point2;
use roomplan_core::{FurnitureItem, RoomSpec};

/// Canvas padding around the room, in canvas pixels
pub const DEFAULT_CANVAS_PADDING: f64 = 24.0;

/// Minimum distance from the room's top-left corner for new items
const DROP_MARGIN: f64 = 10.0;

/// Where a newly added item is dropped: slightly up-left of the room centre
pub fn default_drop_position(room: &RoomSpec) -> Point2<f64> {
    Point2::new(
        (room.width / 2.0 - 60.0).max(DROP_MARGIN),
        (room.height / 2.0 - 40.0).max(DROP_MARGIN),
    )
}

/// Move every item so its scaled footprint lies inside the room box
///
/// Works on the unrotated footprint and only clamps the anchor; items larger
/// than the room end up at the top-left edge.
pub fn fit_items_in_room(items: &[FurnitureItem], room: &RoomSpec) -> Vec<FurnitureItem> {
    items
        .iter()
        .map(|item| {
            let (eff_w, eff_h) = item.effective_size();
            FurnitureItem {
                x: item.x.clamp(0.0, (room.width - eff_w).max(0.0)),
                y: item.y.clamp(0.0, (room.height - eff_h).max(0.0)),
                ..item.clone()
            }
        })
        .collect()
}

/// Uniform plan-to-canvas mapping that fits a room inside a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanViewport {
    /// Canvas pixels per plan unit
    pub scale: f64,
    /// Offset of the plan origin on the canvas, in pixels
    pub padding: f64,
}

impl PlanViewport {
    /// Fit `room` into a `canvas_width` x `canvas_height` canvas with `padding`
    /// pixels on every side
    pub fn fit(room: &RoomSpec, canvas_width: f64, canvas_height: f64, padding: f64) -> Self {
        let max_w = canvas_width - padding * 2.0;
        let max_h = canvas_height - padding * 2.0;
        Self {
            scale: (max_w / room.width).min(max_h / room.height),
            padding,
        }
    }

    /// Plan point to canvas pixels
    #[inline]
    pub fn to_canvas(&self, p: Point2<f64>) -> Point2<f64> {
        Point2::new(self.padding + p.x * self.scale, self.padding + p.y * self.scale)
    }

    /// Canvas pixels back to a plan point
    #[inline]
    pub fn to_plan(&self, p: Point2<f64>) -> Point2<f64> {
        Point2::new((p.x - self.padding) / self.scale, (p.y - self.padding) / self.scale)
    }

    /// Plan length to canvas pixels
    #[inline]
    pub fn length_to_canvas(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Canvas points as a flat `[x0, y0, x1, y1, ...]` list for polygon drawing
    pub fn flatten(&self, boundary: &Boundary) -> Vec<f64> {
        boundary
            .points()
            .iter()
            .flat_map(|&p| {
                let c = self.to_canvas(p);
                [c.x, c.y]
            })
            .collect()
    }
}
