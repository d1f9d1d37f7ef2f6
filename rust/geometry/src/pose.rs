// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan pose to 3D world anchor
//!
//! Items rotate about their top-left anchor in plan space, so the world
//! position (which is centre based) comes from rotating the anchor-to-centre
//! offset, not the stored position. World space is y-up with the room centre
//! at the origin; plan x maps to world x and plan y maps to world z.

use nalgebra::{Matrix4, Point2, Point3, Rotation3, Vector2, Vector3};
use roomplan_core::{FurnitureItem, RoomSpec};

/// World-space anchor of a furniture item
pub type WorldPosition = Point3<f64>;

/// Item rotation in radians, reduced into `[0, 2π)`
#[inline]
pub fn rotation_radians(item: &FurnitureItem) -> f64 {
    item.normalized_rotation().to_radians()
}

/// Offset from the top-left anchor to the footprint centre, after rotation
pub fn rotated_center_offset(item: &FurnitureItem) -> Vector2<f64> {
    let (eff_w, eff_h) = item.effective_size();
    let offset = Vector2::new(eff_w / 2.0, eff_h / 2.0);

    let theta = rotation_radians(item);
    if theta == 0.0 {
        return offset;
    }

    let (sin, cos) = theta.sin_cos();
    Vector2::new(
        offset.x * cos - offset.y * sin,
        offset.x * sin + offset.y * cos,
    )
}

/// Footprint centre in plan space
#[inline]
pub fn plan_center(item: &FurnitureItem) -> Point2<f64> {
    Point2::new(item.x, item.y) + rotated_center_offset(item)
}

/// Map an item pose to its 3D world anchor
///
/// `unit` is the number of plan units per world unit (100 for cm to m).
pub fn to_world_anchor(item: &FurnitureItem, room: &RoomSpec, unit: f64) -> WorldPosition {
    let center = plan_center(item);
    Point3::new(
        center.x / unit - (room.width / unit) / 2.0,
        item.elevation / unit,
        center.y / unit - (room.height / unit) / 2.0,
    )
}

/// Rotation of the item's mesh group about world +Y
///
/// Plan rotation is clockwise seen from above with y down; in a y-up
/// right-handed scene that is a negative turn about +Y.
#[inline]
pub fn world_rotation_y(item: &FurnitureItem) -> f64 {
    -rotation_radians(item)
}

/// Full placement transform for an item's mesh group: rotate, then move to
/// the world anchor
pub fn item_transform(item: &FurnitureItem, room: &RoomSpec, unit: f64) -> Matrix4<f64> {
    let anchor = to_world_anchor(item, room, unit);
    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), world_rotation_y(item));
    Matrix4::new_translation(&anchor.coords) * rotation.to_homogeneous()
}
