// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room boundary polygons

use nalgebra::Point2;

/// Closed room outline in plan space
///
/// Points are ordered and implicitly closed: the last point connects back to
/// the first. Generated boundaries run clockwise on screen (top-left origin,
/// y down), which is a positive signed area in plain x/y terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    points: Vec<Point2<f64>>,
}

impl Boundary {
    /// Wrap an ordered point list
    #[inline]
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate edges `(p[i], p[i+1])`, including the closing edge back to `p[0]`
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
        edges(&self.points)
    }

    /// Largest y coordinate, i.e. the frontmost extent of the room
    #[inline]
    pub fn max_y(&self) -> Option<f64> {
        max_y(&self.points)
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty boundary
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    /// Shoelace area; positive for the winding produced by the generators
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        0.5 * self
            .edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
    }

    /// Total length of all edges, closing edge included
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| (b - a).norm()).sum()
    }

    /// True when no two consecutive points (wrapping) coincide
    pub fn has_distinct_consecutive_points(&self) -> bool {
        self.points.len() < 2 || self.edges().all(|(a, b)| a != b)
    }
}

impl From<Vec<Point2<f64>>> for Boundary {
    fn from(points: Vec<Point2<f64>>) -> Self {
        Self::new(points)
    }
}

/// Wrapping edge iterator over a point slice
pub(crate) fn edges(
    points: &[Point2<f64>],
) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

pub(crate) fn max_y(points: &[Point2<f64>]) -> Option<f64> {
    points.iter().map(|p| p.y).reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: f64, h: f64) -> Boundary {
        Boundary::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ])
    }

    #[test]
    fn test_edges_wrap() {
        let b = rect(4.0, 2.0);
        let edges: Vec<_> = b.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2::new(0.0, 2.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn test_area_and_perimeter() {
        let b = rect(4.0, 2.0);
        assert_eq!(b.signed_area(), 8.0);
        assert_eq!(b.perimeter(), 12.0);
        assert_eq!(b.max_y(), Some(2.0));
        assert_eq!(
            b.bounds(),
            Some((Point2::new(0.0, 0.0), Point2::new(4.0, 2.0)))
        );
    }

    #[test]
    fn test_empty() {
        let b = Boundary::new(Vec::new());
        assert!(b.is_empty());
        assert_eq!(b.max_y(), None);
        assert_eq!(b.bounds(), None);
        assert_eq!(b.signed_area(), 0.0);
        assert_eq!(b.perimeter(), 0.0);
        assert_eq!(b.edges().count(), 0);
    }

    #[test]
    fn test_duplicate_detection() {
        assert!(rect(1.0, 1.0).has_distinct_consecutive_points());
        let dup = Boundary::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
        ]);
        assert!(!dup.has_distinct_consecutive_points());
    }
}
