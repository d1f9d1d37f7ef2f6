// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room records

use crate::error::{Error, Result};
use crate::shape::RoomShape;

/// Smallest room dimension accepted by the room editor (plan units)
pub const MIN_ROOM_DIMENSION: f64 = 200.0;
/// Largest room dimension accepted by the room editor (plan units)
pub const MAX_ROOM_DIMENSION: f64 = 1200.0;

/// Geometric description of a room: bounding size plus outline name
///
/// Dimensions are expected to be positive. Geometry derived from a spec with
/// a zero or negative dimension is unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSpec {
    pub width: f64,
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shape: RoomShape,
}

impl RoomSpec {
    /// Create a spec without validation
    #[inline]
    pub fn new(width: f64, height: f64, shape: RoomShape) -> Self {
        Self {
            width,
            height,
            shape,
        }
    }

    /// Create a spec, rejecting non-positive or non-finite dimensions
    pub fn try_new(width: f64, height: f64, shape: RoomShape) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self::new(width, height, shape))
    }

    /// Clamp both dimensions into the room editor's accepted range
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.clamp(MIN_ROOM_DIMENSION, MAX_ROOM_DIMENSION),
            height: self.height.clamp(MIN_ROOM_DIMENSION, MAX_ROOM_DIMENSION),
            shape: self.shape,
        }
    }
}

/// Room as stored on a design record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Room {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub shape: RoomShape,
    /// Floor color as a CSS hex string
    #[cfg_attr(feature = "serde", serde(rename = "color"))]
    pub floor_color: String,
    /// Wall color as a CSS hex string
    pub wall_color: String,
}

impl Room {
    /// Geometric part of the record
    #[inline]
    pub fn spec(&self) -> RoomSpec {
        RoomSpec::new(self.width, self.height, self.shape)
    }
}

impl Default for Room {
    fn default() -> Self {
        Self {
            name: "New Room".to_string(),
            width: 450.0,
            height: 320.0,
            shape: RoomShape::Rect,
            floor_color: "#f5f5f5".to_string(),
            wall_color: "#d9d9d9".to_string(),
        }
    }
}
