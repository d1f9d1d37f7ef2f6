// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon triangulation utilities
//!
//! Wrapper around earcutr for room outlines, with fast paths for the
//! rectangular and convex cases.

use crate::{Error, Point2, Result};

/// Check if a polygon is convex (all cross products have same sign)
#[inline]
fn is_convex(points: &[Point2<f64>]) -> bool {
    if points.len() < 3 {
        return false;
    }

    let n = points.len();
    let mut sign = 0i8;

    for i in 0..n {
        let p0 = &points[i];
        let p1 = &points[(i + 1) % n];
        let p2 = &points[(i + 2) % n];

        let cross = (p1.x - p0.x) * (p2.y - p1.y) - (p1.y - p0.y) * (p2.x - p1.x);

        if cross.abs() > 1e-10 {
            let current_sign = if cross > 0.0 { 1i8 } else { -1i8 };
            if sign == 0 {
                sign = current_sign;
            } else if sign != current_sign {
                return false;
            }
        }
    }

    true
}

/// Simple fan triangulation for convex polygons
#[inline]
fn fan_triangulate(n: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity((n - 2) * 3);
    for i in 1..n - 1 {
        indices.push(0);
        indices.push(i);
        indices.push(i + 1);
    }
    indices
}

/// Triangulate a simple polygon (no holes)
/// Returns triangle indices into the input points
pub fn triangulate_polygon(points: &[Point2<f64>]) -> Result<Vec<usize>> {
    let n = points.len();

    if n < 3 {
        return Err(Error::TriangulationError(
            "Need at least 3 points to triangulate".to_string(),
        ));
    }

    // FAST PATH: Triangle - no triangulation needed
    if n == 3 {
        return Ok(vec![0, 1, 2]);
    }

    // FAST PATH: Convex outline (rectangles, ellipses) - fan from the first point
    if is_convex(points) {
        return Ok(fan_triangulate(n));
    }

    let mut vertices = Vec::with_capacity(n * 2);
    for p in points {
        vertices.push(p.x);
        vertices.push(p.y);
    }

    let indices = earcutr::earcut(&vertices, &[], 2)
        .map_err(|e| Error::TriangulationError(format!("{:?}", e)))?;

    if indices.is_empty() {
        return Err(Error::TriangulationError(format!(
            "No triangles produced for {}-point outline",
            n
        )));
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::generate;
    use roomplan_core::RoomShape;

    fn triangle_area_sum(points: &[Point2<f64>], indices: &[usize]) -> f64 {
        indices
            .chunks_exact(3)
            .map(|t| {
                let (a, b, c) = (points[t[0]], points[t[1]], points[t[2]]);
                ((b - a).perp(&(c - a)) / 2.0).abs()
            })
            .sum()
    }

    #[test]
    fn test_too_few_points() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(triangulate_polygon(&pts).is_err());
    }

    #[test]
    fn test_convexity() {
        assert!(is_convex(generate(4.0, 3.0, RoomShape::Rect).points()));
        assert!(is_convex(generate(4.0, 3.0, RoomShape::Oval).points()));
        assert!(!is_convex(generate(4.0, 3.0, RoomShape::L).points()));
        assert!(!is_convex(generate(4.0, 3.0, RoomShape::U).points()));
    }

    #[test]
    fn test_triangles_cover_outline() {
        for shape in RoomShape::ALL {
            let boundary = generate(450.0, 320.0, shape);
            let indices = triangulate_polygon(boundary.points()).unwrap();
            assert_eq!(indices.len(), (boundary.len() - 2) * 3, "{}", shape);

            let covered = triangle_area_sum(boundary.points(), &indices);
            assert!(
                (covered - boundary.signed_area()).abs() < 1e-6 * boundary.signed_area(),
                "{} triangles cover {} of {}",
                shape,
                covered,
                boundary.signed_area()
            );
        }
    }
}
