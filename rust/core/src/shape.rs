// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named room outlines
//!
//! A room's outline is picked from a closed set of names. Names outside the
//! set are not an error: they resolve to [`RoomShape::Rect`].

use std::fmt;

/// Room outline descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum RoomShape {
    /// Plain rectangle
    #[default]
    Rect,
    /// Rectangle with the top-right corner notched out
    L,
    /// Rectangle with the top-left corner notched out
    LRev,
    /// Rectangle with a notch cut from the top middle
    U,
    /// Ellipse inscribed in the bounding box
    Circle,
    /// Ellipse inscribed in the bounding box (same outline as `Circle`)
    Oval,
    /// Half ellipse standing on a flat bottom edge
    Semicircle,
}

impl RoomShape {
    /// Every supported shape, in menu order
    pub const ALL: [RoomShape; 7] = [
        RoomShape::Rect,
        RoomShape::L,
        RoomShape::LRev,
        RoomShape::U,
        RoomShape::Circle,
        RoomShape::Oval,
        RoomShape::Semicircle,
    ];

    /// Resolve a shape name, falling back to `Rect` for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name {
            "RECT" => Self::Rect,
            "L" => Self::L,
            "L_REV" => Self::LRev,
            "U" => Self::U,
            "CIRCLE" => Self::Circle,
            "OVAL" => Self::Oval,
            "SEMICIRCLE" => Self::Semicircle,
            other => {
                tracing::debug!(shape = other, "unknown room shape, using RECT");
                Self::Rect
            }
        }
    }

    /// Canonical upper-case name
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rect => "RECT",
            Self::L => "L",
            Self::LRev => "L_REV",
            Self::U => "U",
            Self::Circle => "CIRCLE",
            Self::Oval => "OVAL",
            Self::Semicircle => "SEMICIRCLE",
        }
    }
}

impl fmt::Display for RoomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RoomShape {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for RoomShape {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<RoomShape> for String {
    fn from(shape: RoomShape) -> Self {
        shape.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for shape in RoomShape::ALL {
            assert_eq!(RoomShape::from_name(shape.as_str()), shape);
        }
    }

    #[test]
    fn test_unknown_name_is_rect() {
        assert_eq!(RoomShape::from_name("UNKNOWN"), RoomShape::Rect);
        assert_eq!(RoomShape::from_name(""), RoomShape::Rect);
        // Matching is case-sensitive
        assert_eq!(RoomShape::from_name("circle"), RoomShape::Rect);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&RoomShape::LRev).unwrap();
        assert_eq!(json, "\"L_REV\"");

        let shape: RoomShape = serde_json::from_str("\"HEXAGON\"").unwrap();
        assert_eq!(shape, RoomShape::Rect);
    }
}
