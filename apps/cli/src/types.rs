// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON input and output types.

use roomplan_core::{FurnitureItem, Room};
use roomplan_geometry::{Boundary, ItemPlacement, Mesh, RoomScene, WallSegment};
use serde::{Deserialize, Serialize};

/// Saved layout: one room and the furniture placed in it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutFile {
    pub room: Room,
    pub items: Vec<FurnitureItem>,
}

impl LayoutFile {
    /// Clamp every item's scale and shade into the inspector's ranges.
    pub fn with_clamped_controls(self) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(FurnitureItem::with_clamped_controls)
                .collect(),
            ..self
        }
    }
}

/// Wall segment in plan space.
#[derive(Debug, Clone, Serialize)]
pub struct WallData {
    /// Segment midpoint [x, y].
    pub midpoint: [f64; 2],
    /// Rotation about world +Y in radians.
    pub rotation: f64,
    pub length: f64,
}

impl From<&WallSegment> for WallData {
    fn from(wall: &WallSegment) -> Self {
        Self {
            midpoint: [wall.midpoint.x, wall.midpoint.y],
            rotation: wall.rotation,
            length: wall.length,
        }
    }
}

/// World anchor for one item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementData {
    pub id: String,
    /// World position [x, y, z].
    pub position: [f64; 3],
    pub rotation_y: f64,
}

impl From<&ItemPlacement> for PlacementData {
    fn from(placement: &ItemPlacement) -> Self {
        let p = placement.position;
        Self {
            id: placement.id.clone(),
            position: [p.x, p.y, p.z],
            rotation_y: placement.rotation_y,
        }
    }
}

/// Mesh size summary.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
}

impl From<&Mesh> for MeshStats {
    fn from(mesh: &Mesh) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
        }
    }
}

/// Everything the `scene` command reports.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSummary {
    pub name: String,
    pub shape: String,
    pub width: f64,
    pub height: f64,
    pub boundary: Vec<[f64; 2]>,
    pub walls: Vec<WallData>,
    pub placements: Vec<PlacementData>,
    pub floor_mesh: MeshStats,
    pub wall_mesh: MeshStats,
}

impl SceneSummary {
    pub fn new(name: &str, scene: &RoomScene) -> Self {
        Self {
            name: name.to_string(),
            shape: scene.room.shape.to_string(),
            width: scene.room.width,
            height: scene.room.height,
            boundary: points(&scene.boundary),
            walls: scene.walls.iter().map(WallData::from).collect(),
            placements: scene.placements.iter().map(PlacementData::from).collect(),
            floor_mesh: MeshStats::from(&scene.floor),
            wall_mesh: MeshStats::from(&scene.wall_mesh),
        }
    }
}

/// Boundary as a list of [x, y] pairs.
pub fn points(boundary: &Boundary) -> Vec<[f64; 2]> {
    boundary.points().iter().map(|p| [p.x, p.y]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomplan_core::RoomShape;
    use roomplan_geometry::SceneConfig;

    #[test]
    fn test_layout_file_parses_saved_design() {
        let json = r##"{
            "room": {"name": "Study", "width": 500, "height": 300, "shape": "L_REV",
                     "color": "#eeeeee", "wallColor": "#cccccc"},
            "items": [
                {"id": "a", "type": "chair", "x": 10, "y": 20, "w": 60, "h": 60, "rotation": 45}
            ]
        }"##;
        let layout: LayoutFile = serde_json::from_str(json).unwrap();
        assert_eq!(layout.room.shape, RoomShape::LRev);
        assert_eq!(layout.room.floor_color, "#eeeeee");
        assert_eq!(layout.items.len(), 1);
        assert_eq!(layout.items[0].kind, "chair");
        assert_eq!(layout.items[0].scale, 1.0);
    }

    #[test]
    fn test_layout_controls_are_clamped() {
        let json = r#"{"items": [
            {"id": "big", "x": 0, "y": 0, "w": 60, "h": 60, "scale": 4.0, "shade": 2.0},
            {"id": "ok", "x": 0, "y": 0, "w": 60, "h": 60, "scale": 1.2, "shade": 0.3}
        ]}"#;
        let layout = serde_json::from_str::<LayoutFile>(json)
            .unwrap()
            .with_clamped_controls();
        assert_eq!(layout.items[0].scale, 1.8);
        assert_eq!(layout.items[0].shade, 0.8);
        assert_eq!(layout.items[1].scale, 1.2);
        assert_eq!(layout.items[1].shade, 0.3);
        assert_eq!(layout.room, Room::default());
    }

    #[test]
    fn test_empty_layout_uses_default_room() {
        let layout: LayoutFile = serde_json::from_str("{}").unwrap();
        assert_eq!(layout.room, Room::default());
        assert!(layout.items.is_empty());
    }

    #[test]
    fn test_scene_summary() {
        let room = Room::default();
        let mut item = FurnitureItem::new("c", 100.0, 100.0, 60.0, 60.0);
        item.rotation = 90.0;
        let scene = RoomScene::build(&room.spec(), &[item], &SceneConfig::default()).unwrap();

        let summary = SceneSummary::new(&room.name, &scene);
        assert_eq!(summary.shape, "RECT");
        assert_eq!(summary.boundary.len(), 4);
        assert_eq!(summary.walls.len(), 3);
        assert_eq!(summary.wall_mesh.triangle_count, 36);
        approx::assert_relative_eq!(summary.placements[0].position[0], -1.55, epsilon = 1e-9);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("floorMesh").is_some());
        assert!(json["placements"][0].get("rotationY").is_some());
    }
}
