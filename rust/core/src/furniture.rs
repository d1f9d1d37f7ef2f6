// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Furniture items placed in a room
//!
//! An item's pose lives in plan space: `(x, y)` is the top-left corner of the
//! unrotated footprint, `rotation` is in degrees clockwise about that corner,
//! and `scale` multiplies both footprint dimensions.

/// Smallest scale the item inspector allows
pub const MIN_ITEM_SCALE: f64 = 0.5;
/// Largest scale the item inspector allows
pub const MAX_ITEM_SCALE: f64 = 1.8;
/// Largest shade (darkening) the item inspector allows
pub const MAX_ITEM_SHADE: f64 = 0.8;

/// Furniture item with its plan-space pose
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FurnitureItem {
    pub id: String,
    /// Catalog type ("chair", "table", ...)
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    /// Unscaled footprint width
    pub w: f64,
    /// Unscaled footprint depth
    pub h: f64,
    /// Clockwise rotation in degrees, any real value
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_scale"))]
    pub scale: f64,
    /// Height above the floor, in plan units
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shade: f64,
}

#[cfg(feature = "serde")]
fn default_scale() -> f64 {
    1.0
}

impl FurnitureItem {
    /// Create a bare item at `(x, y)` with an unscaled `w` x `h` footprint
    pub fn new(id: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id: id.into(),
            kind: String::new(),
            x,
            y,
            w,
            h,
            rotation: 0.0,
            scale: 1.0,
            elevation: 0.0,
            color: String::new(),
            shade: 0.0,
        }
    }

    /// Rotation reduced into `[0, 360)`
    #[inline]
    pub fn normalized_rotation(&self) -> f64 {
        normalize_degrees(self.rotation)
    }

    /// Footprint after scaling: `(w * scale, h * scale)`
    #[inline]
    pub fn effective_size(&self) -> (f64, f64) {
        (self.w * self.scale, self.h * self.scale)
    }

    /// Copy with `scale` and `shade` clamped to the inspector's ranges
    pub fn with_clamped_controls(&self) -> Self {
        Self {
            scale: self.scale.clamp(MIN_ITEM_SCALE, MAX_ITEM_SCALE),
            shade: self.shade.clamp(0.0, MAX_ITEM_SHADE),
            ..self.clone()
        }
    }
}

/// Reduce an angle in degrees into `[0, 360)`
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}
