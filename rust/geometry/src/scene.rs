// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room scene assembly
//!
//! Bundles everything the 3D preview needs for one room: outline, visible
//! walls, floor and wall meshes, and a world placement per furniture item.
//! A scene is a snapshot; rebuild it after any layout change.

use crate::boundary::Boundary;
use crate::config::SceneConfig;
use crate::error::Result;
use crate::extrusion::{extrude_floor, wall_mesh};
use crate::mesh::Mesh;
use crate::pose::{item_transform, to_world_anchor, world_rotation_y, WorldPosition};
use crate::shape::generate;
use crate::walls::{extract_walls_with_epsilon, WallSegment};
use nalgebra::Matrix4;
use roomplan_core::{FurnitureItem, RoomSpec};

/// World placement of one furniture item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPlacement {
    pub id: String,
    /// Mesh-group anchor (footprint centre at floor level plus elevation)
    pub position: WorldPosition,
    /// Rotation about world +Y in radians
    pub rotation_y: f64,
    /// `position` and `rotation_y` as one matrix
    pub transform: Matrix4<f64>,
}

impl ItemPlacement {
    pub fn new(item: &FurnitureItem, room: &RoomSpec, unit: f64) -> Self {
        Self {
            id: item.id.clone(),
            position: to_world_anchor(item, room, unit),
            rotation_y: world_rotation_y(item),
            transform: item_transform(item, room, unit),
        }
    }
}

/// Derived geometry for one room and its furniture
#[derive(Debug, Clone)]
pub struct RoomScene {
    pub room: RoomSpec,
    pub boundary: Boundary,
    pub walls: Vec<WallSegment>,
    pub floor: Mesh,
    /// All wall boxes merged into one mesh
    pub wall_mesh: Mesh,
    pub placements: Vec<ItemPlacement>,
}

impl RoomScene {
    /// Build the scene for `room` and `items`
    ///
    /// Fails if the room has non-positive dimensions or the config is invalid.
    pub fn build(room: &RoomSpec, items: &[FurnitureItem], config: &SceneConfig) -> Result<Self> {
        config.validate()?;
        let room = RoomSpec::try_new(room.width, room.height, room.shape)?;

        let boundary = generate(room.width, room.height, room.shape);
        let walls = extract_walls_with_epsilon(boundary.points(), config.front_epsilon);

        let floor = extrude_floor(&boundary, &room, config)?;

        let wall_meshes = walls
            .iter()
            .map(|wall| wall_mesh(wall, &room, config))
            .collect::<Result<Vec<_>>>()?;
        let mut combined = Mesh::new();
        combined.merge_all(&wall_meshes);

        let placements = items
            .iter()
            .map(|item| ItemPlacement::new(item, &room, config.unit_scale))
            .collect();

        tracing::debug!(
            shape = %room.shape,
            width = room.width,
            height = room.height,
            boundary_points = boundary.len(),
            walls = walls.len(),
            items = items.len(),
            floor_triangles = floor.triangle_count(),
            wall_triangles = combined.triangle_count(),
            "built room scene"
        );

        Ok(Self {
            room,
            boundary,
            walls,
            floor,
            wall_mesh: combined,
            placements,
        })
    }

    /// Placement for the item with `id`, if present
    pub fn placement(&self, id: &str) -> Option<&ItemPlacement> {
        self.placements.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use roomplan_core::{Error as CoreError, RoomShape};

    #[test]
    fn test_build_rect_scene() {
        let room = RoomSpec::new(450.0, 320.0, RoomShape::Rect);
        let mut chair = FurnitureItem::new("chair-1", 100.0, 100.0, 60.0, 60.0);
        chair.rotation = 90.0;

        let scene = RoomScene::build(&room, &[chair], &SceneConfig::default()).unwrap();
        assert_eq!(scene.boundary.len(), 4);
        assert_eq!(scene.walls.len(), 3);
        assert!(!scene.floor.is_empty());
        // Three boxes of 6 quads each, two triangles per quad
        assert_eq!(scene.wall_mesh.triangle_count(), 3 * 12);

        let placement = scene.placement("chair-1").unwrap();
        assert_relative_eq!(placement.position.x, -1.55, epsilon = 1e-9);
        assert_relative_eq!(placement.position.z, -0.3, epsilon = 1e-9);
        assert_relative_eq!(placement.rotation_y, -std::f64::consts::FRAC_PI_2);
        assert!(scene.placement("missing").is_none());
    }

    #[test]
    fn test_every_shape_builds() {
        for shape in RoomShape::ALL {
            let room = RoomSpec::new(600.0, 400.0, shape);
            let scene = RoomScene::build(&room, &[], &SceneConfig::default()).unwrap();
            assert_eq!(
                scene.wall_mesh.triangle_count(),
                scene.walls.len() * 12,
                "{}",
                shape
            );
        }
    }

    #[test]
    fn test_rejects_degenerate_room() {
        let room = RoomSpec::new(0.0, 320.0, RoomShape::Rect);
        let err = RoomScene::build(&room, &[], &SceneConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::CoreError(CoreError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_config() {
        let room = RoomSpec::new(450.0, 320.0, RoomShape::Rect);
        let config = SceneConfig {
            wall_height: -1.0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            RoomScene::build(&room, &[], &config),
            Err(crate::Error::InvalidConfig(_))
        ));
    }
}
