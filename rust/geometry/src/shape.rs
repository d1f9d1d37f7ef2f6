// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room outline generation
//!
//! Builds the boundary polygon for each named room shape. All outlines live
//! in the `[0, width] x [0, height]` plan box with a top-left origin and run
//! clockwise on screen, starting from the top-left-most corner of the shape.
//! Output is deterministic: the same inputs always give the same points.

use crate::boundary::Boundary;
use nalgebra::Point2;
use roomplan_core::RoomShape;
use std::f64::consts::PI;

/// Fraction of each dimension removed by the `L` / `L_REV` corner notch
pub const L_CUT_FRACTION: f64 = 0.4;
/// Width of each `U` leg as a fraction of the room width
pub const U_LEG_FRACTION: f64 = 0.3;
/// Depth of the `U` opening as a fraction of the room height
pub const U_DEPTH_FRACTION: f64 = 0.5;
/// Points sampled around `CIRCLE` / `OVAL` outlines
pub const ELLIPSE_SEGMENTS: usize = 64;
/// Arc segments of the `SEMICIRCLE` outline (one more point than segments)
pub const SEMICIRCLE_SEGMENTS: usize = 32;

/// Generate the boundary of a `width` x `height` room of the given shape
pub fn generate(width: f64, height: f64, shape: RoomShape) -> Boundary {
    let points = match shape {
        RoomShape::Rect => rectangle(width, height),
        RoomShape::L => l_shape(width, height),
        RoomShape::LRev => l_shape_reversed(width, height),
        RoomShape::U => u_shape(width, height),
        // Both are the inscribed ellipse; a true circle is the caller's call
        RoomShape::Circle | RoomShape::Oval => ellipse(width, height),
        RoomShape::Semicircle => semicircle(width, height),
    };
    Boundary::new(points)
}

/// Generate a boundary from a shape name; unknown names give a rectangle
#[inline]
pub fn generate_named(width: f64, height: f64, shape: &str) -> Boundary {
    generate(width, height, RoomShape::from_name(shape))
}

/// Four corners, clockwise from the top-left
fn rectangle(w: f64, h: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(w, 0.0),
        Point2::new(w, h),
        Point2::new(0.0, h),
    ]
}

/// Rectangle with the top-right corner notched out
fn l_shape(w: f64, h: f64) -> Vec<Point2<f64>> {
    let cut_w = w * L_CUT_FRACTION;
    let cut_h = h * L_CUT_FRACTION;

    vec![
        Point2::new(0.0, 0.0),
        Point2::new(w - cut_w, 0.0),
        Point2::new(w - cut_w, cut_h),
        Point2::new(w, cut_h),
        Point2::new(w, h),
        Point2::new(0.0, h),
    ]
}

/// Mirror of [`l_shape`]: the top-left corner is notched out
fn l_shape_reversed(w: f64, h: f64) -> Vec<Point2<f64>> {
    let cut_w = w * L_CUT_FRACTION;
    let cut_h = h * L_CUT_FRACTION;

    vec![
        Point2::new(cut_w, 0.0),
        Point2::new(w, 0.0),
        Point2::new(w, h),
        Point2::new(0.0, h),
        Point2::new(0.0, cut_h),
        Point2::new(cut_w, cut_h),
    ]
}

/// Two legs joined along the bottom, opening at the top middle
fn u_shape(w: f64, h: f64) -> Vec<Point2<f64>> {
    let leg_w = w * U_LEG_FRACTION;
    let depth = h * U_DEPTH_FRACTION;

    vec![
        // Left leg
        Point2::new(0.0, 0.0),
        Point2::new(leg_w, 0.0),
        // Bottom of the opening
        Point2::new(leg_w, depth),
        Point2::new(w - leg_w, depth),
        // Right leg
        Point2::new(w - leg_w, 0.0),
        Point2::new(w, 0.0),
        Point2::new(w, h),
        Point2::new(0.0, h),
    ]
}

/// Ellipse inscribed in the room box, sampled at equal angles from +x
fn ellipse(w: f64, h: f64) -> Vec<Point2<f64>> {
    let (rx, ry) = (w / 2.0, h / 2.0);
    let (cx, cy) = (rx, ry);

    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let theta = 2.0 * PI * (i as f64) / (ELLIPSE_SEGMENTS as f64);
            Point2::new(cx + rx * theta.cos(), cy + ry * theta.sin())
        })
        .collect()
}

/// Arch standing on the bottom edge: half ellipse centred at `(w/2, h)`
///
/// The arc sweeps from the bottom-left corner over the top to the
/// bottom-right corner; the closing edge is the flat floor line at `y = h`.
fn semicircle(w: f64, h: f64) -> Vec<Point2<f64>> {
    let cx = w / 2.0;
    let rx = w / 2.0;

    (0..=SEMICIRCLE_SEGMENTS)
        .map(|i| {
            let angle = PI - PI * (i as f64) / (SEMICIRCLE_SEGMENTS as f64);
            // y grows downward, so the arc rises by subtracting
            Point2::new(cx + rx * angle.cos(), h - h * angle.sin())
        })
        .collect()
}
