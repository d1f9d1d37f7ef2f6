// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RoomPlan Geometry
//!
//! Room outline generation, wall extraction and plan-to-world transforms,
//! using earcutr for floor triangulation and nalgebra for transformations.
//!
//! Plan space has its origin at the room's top-left corner with y growing
//! toward the viewer. World space is y-up with the room centred on the origin;
//! plan x maps to world x and plan y to world z.

pub mod boundary;
pub mod config;
pub mod error;
pub mod extrusion;
pub mod layout;
pub mod mesh;
pub mod pose;
pub mod scene;
pub mod shape;
pub mod triangulation;
pub mod walls;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use boundary::Boundary;
pub use config::SceneConfig;
pub use error::{Error, Result};
pub use extrusion::{extrude_floor, plan_to_world, wall_mesh};
pub use layout::{default_drop_position, fit_items_in_room, PlanViewport, DEFAULT_CANVAS_PADDING};
pub use mesh::Mesh;
pub use pose::{to_world_anchor, world_rotation_y, WorldPosition};
pub use scene::{ItemPlacement, RoomScene};
pub use shape::{generate, generate_named};
pub use triangulation::triangulate_polygon;
pub use walls::{extract_walls, WallSegment};
