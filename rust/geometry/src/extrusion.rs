// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion operations - floor slabs and wall volumes for the 3D preview
//!
//! Outlines are extruded along local +Z and then placed with a transform.
//! World space is y-up with the room centre at the origin.

use crate::boundary::Boundary;
use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::triangulation::triangulate_polygon;
use crate::walls::WallSegment;
use nalgebra::{Matrix4, Point2, Point3, Rotation3, Vector3};
use roomplan_core::RoomSpec;
use std::f64::consts::FRAC_PI_2;

/// Transform from plan space (x right, y down, z = extrusion depth) to world
///
/// Plan `(x, y)` lands at `(x/unit - W/2u, 0, y/unit - H/2u)`; extrusion
/// depth points down (world -Y).
pub fn plan_to_world(room: &RoomSpec, unit: f64) -> Matrix4<f64> {
    let lay_flat = Rotation3::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2).to_homogeneous();
    let scale = Matrix4::new_scaling(1.0 / unit);
    let center = Matrix4::new_translation(&Vector3::new(
        -(room.width / unit) / 2.0,
        0.0,
        -(room.height / unit) / 2.0,
    ));
    center * scale * lay_flat
}

/// Extrude a closed outline along +Z
///
/// The outline should have positive signed area; side normals then point
/// away from the interior.
pub fn extrude_polygon(
    outline: &[Point2<f64>],
    depth: f64,
    transform: Option<Matrix4<f64>>,
) -> Result<Mesh> {
    if !(depth > 0.0) {
        return Err(Error::InvalidExtrusion(format!(
            "Depth must be positive, got {}",
            depth
        )));
    }

    let indices = triangulate_polygon(outline)?;

    let cap_vertex_count = outline.len() * 2;
    let side_vertex_count = outline.len() * 4;
    let mut mesh = Mesh::with_capacity(
        cap_vertex_count + side_vertex_count,
        indices.len() * 2 + outline.len() * 6,
    );

    create_cap_mesh(outline, &indices, 0.0, Vector3::new(0.0, 0.0, -1.0), &mut mesh);
    create_cap_mesh(outline, &indices, depth, Vector3::new(0.0, 0.0, 1.0), &mut mesh);
    create_side_walls(outline, depth, &mut mesh);

    if let Some(mat) = transform {
        apply_transform(&mut mesh, &mat);
    }

    Ok(mesh)
}

/// Floor slab for a room: top face at world y = 0, `floor_thickness` deep
pub fn extrude_floor(boundary: &Boundary, room: &RoomSpec, config: &SceneConfig) -> Result<Mesh> {
    let unit = config.unit_scale;
    // Depth is in plan units until plan_to_world scales it
    extrude_polygon(
        boundary.points(),
        config.floor_thickness * unit,
        Some(plan_to_world(room, unit)),
    )
}

/// Oriented box for one wall, standing on the floor
///
/// The box is `length` long along the wall, `wall_thickness` deep and
/// `wall_height` tall, centred on the segment midpoint.
pub fn wall_mesh(segment: &WallSegment, room: &RoomSpec, config: &SceneConfig) -> Result<Mesh> {
    let unit = config.unit_scale;
    let length = segment.length / unit;
    if !(length > 0.0) {
        return Err(Error::InvalidExtrusion(format!(
            "Wall length must be positive, got {}",
            segment.length
        )));
    }

    let profile = centered_rectangle(length, config.wall_thickness);

    let anchor = Vector3::new(
        segment.midpoint.x / unit - (room.width / unit) / 2.0,
        0.0,
        segment.midpoint.y / unit - (room.height / unit) / 2.0,
    );
    let stand_up = Rotation3::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2).to_homogeneous();
    let turn = Rotation3::from_axis_angle(&Vector3::y_axis(), segment.rotation).to_homogeneous();
    let transform = Matrix4::new_translation(&anchor) * turn * stand_up;

    extrude_polygon(&profile, config.wall_height, Some(transform))
}

/// Axis-aligned rectangle centred at the origin, positive winding
#[inline]
fn centered_rectangle(width: f64, height: f64) -> Vec<Point2<f64>> {
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    vec![
        Point2::new(-half_w, -half_h),
        Point2::new(half_w, -half_h),
        Point2::new(half_w, half_h),
        Point2::new(-half_w, half_h),
    ]
}

/// Create a cap mesh (top or bottom) from a triangulated outline
///
/// Triangles are re-wound so their face normal agrees with `normal`.
fn create_cap_mesh(
    outline: &[Point2<f64>],
    indices: &[usize],
    z: f64,
    normal: Vector3<f64>,
    mesh: &mut Mesh,
) {
    let base_index = mesh.vertex_count() as u32;

    for point in outline {
        mesh.add_vertex(Point3::new(point.x, point.y, z), normal);
    }

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (outline[tri[0]], outline[tri[1]], outline[tri[2]]);
        let facing_up = (b - a).perp(&(c - a)) >= 0.0;

        let i0 = base_index + tri[0] as u32;
        let i1 = base_index + tri[1] as u32;
        let i2 = base_index + tri[2] as u32;

        if facing_up == (normal.z > 0.0) {
            mesh.add_triangle(i0, i1, i2);
        } else {
            mesh.add_triangle(i0, i2, i1);
        }
    }
}

/// Create side walls for an outline
fn create_side_walls(outline: &[Point2<f64>], depth: f64, mesh: &mut Mesh) {
    let base_index = mesh.vertex_count() as u32;
    let mut quad_count = 0u32;

    for i in 0..outline.len() {
        let j = (i + 1) % outline.len();

        let p0 = &outline[i];
        let p1 = &outline[j];

        // Right-hand normal of the edge, outward for positive winding.
        // Degenerate edges (repeated points) are skipped.
        let edge = Vector3::new(p1.x - p0.x, p1.y - p0.y, 0.0);
        let normal = match Vector3::new(edge.y, -edge.x, 0.0).try_normalize(1e-10) {
            Some(n) => n,
            None => continue,
        };

        let v0_bottom = Point3::new(p0.x, p0.y, 0.0);
        let v1_bottom = Point3::new(p1.x, p1.y, 0.0);
        let v0_top = Point3::new(p0.x, p0.y, depth);
        let v1_top = Point3::new(p1.x, p1.y, depth);

        let idx = base_index + (quad_count * 4);
        mesh.add_vertex(v0_bottom, normal);
        mesh.add_vertex(v1_bottom, normal);
        mesh.add_vertex(v1_top, normal);
        mesh.add_vertex(v0_top, normal);

        mesh.add_triangle(idx, idx + 1, idx + 2);
        mesh.add_triangle(idx, idx + 2, idx + 3);

        quad_count += 1;
    }
}

/// Apply transformation matrix to mesh
pub fn apply_transform(mesh: &mut Mesh, transform: &Matrix4<f64>) {
    mesh.positions.chunks_exact_mut(3).for_each(|chunk| {
        let point = Point3::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        let transformed = transform.transform_point(&point);
        chunk[0] = transformed.x as f32;
        chunk[1] = transformed.y as f32;
        chunk[2] = transformed.z as f32;
    });

    // Normals use the inverse transpose
    let normal_matrix = transform.try_inverse().unwrap_or(*transform).transpose();

    mesh.normals.chunks_exact_mut(3).for_each(|chunk| {
        let normal = Vector3::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        let transformed = (normal_matrix * normal.to_homogeneous()).xyz().normalize();
        chunk[0] = transformed.x as f32;
        chunk[1] = transformed.y as f32;
        chunk[2] = transformed.z as f32;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::generate;
    use crate::walls::extract_walls;
    use approx::assert_relative_eq;
    use roomplan_core::RoomShape;

    fn room() -> RoomSpec {
        RoomSpec::new(450.0, 320.0, RoomShape::Rect)
    }

    #[test]
    fn test_extrude_rectangle() {
        let profile = centered_rectangle(10.0, 5.0);
        let mesh = extrude_polygon(&profile, 20.0, None).unwrap();

        // 2 caps x 4 points + 4 side quads
        assert_eq!(mesh.vertex_count(), 8 + 16);
        assert_eq!(mesh.triangle_count(), 4 + 8);

        let (min, max) = mesh.bounds();
        assert!((min.x - -5.0).abs() < 0.01);
        assert!((max.x - 5.0).abs() < 0.01);
        assert!((min.y - -2.5).abs() < 0.01);
        assert!((max.y - 2.5).abs() < 0.01);
        assert!((min.z - 0.0).abs() < 0.01);
        assert!((max.z - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_invalid_depth() {
        let profile = centered_rectangle(10.0, 5.0);
        assert!(extrude_polygon(&profile, -1.0, None).is_err());
        assert!(extrude_polygon(&profile, 0.0, None).is_err());
        assert!(extrude_polygon(&profile, f64::NAN, None).is_err());
    }

    #[test]
    fn test_plan_to_world_matches_pose_mapping() {
        let m = plan_to_world(&room(), 100.0);
        let p = m.transform_point(&Point3::new(100.0, 50.0, 0.0));
        assert_relative_eq!(p, Point3::new(1.0 - 2.25, 0.0, 0.5 - 1.6), epsilon = 1e-12);

        // Extrusion depth heads down
        let q = m.transform_point(&Point3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(q.y, -0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_floor_bounds() {
        let config = SceneConfig::default();
        let boundary = generate(450.0, 320.0, RoomShape::Rect);
        let mesh = extrude_floor(&boundary, &room(), &config).unwrap();

        let (min, max) = mesh.bounds();
        assert_relative_eq!(min.x, -2.25, epsilon = 1e-5);
        assert_relative_eq!(max.x, 2.25, epsilon = 1e-5);
        assert_relative_eq!(min.z, -1.6, epsilon = 1e-5);
        assert_relative_eq!(max.z, 1.6, epsilon = 1e-5);
        assert_relative_eq!(max.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(min.y, -0.02, epsilon = 1e-5);
    }

    #[test]
    fn test_floor_top_faces_up() {
        let config = SceneConfig::default();
        let boundary = generate(450.0, 320.0, RoomShape::L);
        let spec = RoomSpec::new(450.0, 320.0, RoomShape::L);
        let mesh = extrude_floor(&boundary, &spec, &config).unwrap();

        // First cap written is the walkable top face
        let n = boundary.len();
        for i in 0..n {
            assert_relative_eq!(mesh.normals[i * 3 + 1], 1.0, epsilon = 1e-6);
        }

        // Its triangles wind counter-clockwise seen from above (+Y)
        let pos = |i: u32| {
            let i = i as usize * 3;
            Vector3::new(
                mesh.positions[i] as f64,
                mesh.positions[i + 1] as f64,
                mesh.positions[i + 2] as f64,
            )
        };
        for tri in mesh.indices[..(n - 2) * 3].chunks_exact(3) {
            let face = (pos(tri[1]) - pos(tri[0])).cross(&(pos(tri[2]) - pos(tri[0])));
            assert!(face.y > 0.0);
        }
    }

    #[test]
    fn test_wall_box_placement() {
        let config = SceneConfig::default();
        let boundary = generate(450.0, 320.0, RoomShape::Rect);
        let walls = extract_walls(boundary.points());

        // Back wall runs along plan +x at y = 0
        let back = wall_mesh(&walls[0], &room(), &config).unwrap();
        let (min, max) = back.bounds();
        assert_relative_eq!(min.x, -2.25, epsilon = 1e-5);
        assert_relative_eq!(max.x, 2.25, epsilon = 1e-5);
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(max.y, 2.4, epsilon = 1e-5);
        assert_relative_eq!(min.z, -1.64, epsilon = 1e-5);
        assert_relative_eq!(max.z, -1.56, epsilon = 1e-5);

        // Right wall runs along plan +y at x = 450
        let right = wall_mesh(&walls[1], &room(), &config).unwrap();
        let (min, max) = right.bounds();
        assert_relative_eq!(min.x, 2.21, epsilon = 1e-5);
        assert_relative_eq!(max.x, 2.29, epsilon = 1e-5);
        assert_relative_eq!(min.z, -1.6, epsilon = 1e-5);
        assert_relative_eq!(max.z, 1.6, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_length_wall_rejected() {
        let wall = WallSegment {
            midpoint: Point2::new(0.0, 0.0),
            rotation: 0.0,
            length: 0.0,
        };
        assert!(wall_mesh(&wall, &room(), &SceneConfig::default()).is_err());
    }
}
