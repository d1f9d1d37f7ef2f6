// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomPlan Core
//!
//! Plain data model shared by the RoomPlan geometry engine and its front ends.
//!
//! ## Overview
//!
//! - **Room shapes**: the fixed set of named outlines a room can take
//! - **Room records**: dimensions, shape and colors of a design's room
//! - **Furniture items**: plan-space poses (top-left anchor, clockwise rotation)
//! - **Catalog**: the static table of furniture kinds and their footprints
//!
//! Everything here is an owned value. Nothing holds state between calls;
//! geometry is derived from these records by `roomplan-geometry`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roomplan_core::{make_item, Room, RoomShape};
//!
//! let room = Room::default();
//! assert_eq!(room.shape, RoomShape::Rect);
//!
//! let chair = make_item("chair", 100.0, 100.0)?;
//! assert_eq!((chair.w, chair.h), (60.0, 60.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for room and furniture records

pub mod catalog;
pub mod error;
pub mod furniture;
pub mod room;
pub mod shape;

pub use catalog::{catalog_entry, make_item, FurnitureDef, FURNITURE_CATALOG};
pub use error::{Error, Result};
pub use furniture::{normalize_degrees, FurnitureItem};
pub use room::{Room, RoomSpec};
pub use shape::RoomShape;
