// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::geometry::canonical_edge::EdgeKey;
use crate::geometry::point::{Point2, PointKey};
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::{in_circumcircle, point_in_triangle};
use crate::numeric::scalar::Scalar;

/// Triangle over three stored points, referenced by key.
///
/// Geometry queries take a lookup closure so the same triangle can be
/// evaluated against the store or against a builder's scratch arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle(pub PointKey, pub PointKey, pub PointKey);

impl Triangle {
    #[inline]
    pub fn vertices(&self) -> [PointKey; 3] {
        [self.0, self.1, self.2]
    }

    /// The three boundary edges, in winding order.
    #[inline]
    pub fn edges(&self) -> [EdgeKey; 3] {
        [
            EdgeKey::new(self.0, self.1),
            EdgeKey::new(self.1, self.2),
            EdgeKey::new(self.2, self.0),
        ]
    }

    #[inline]
    pub fn has_vertex(&self, k: PointKey) -> bool {
        self.0 == k || self.1 == k || self.2 == k
    }

    /// Vertices sorted by key; equal for any rotation or reflection.
    pub fn as_sorted_keys(&self) -> [PointKey; 3] {
        let mut v = self.vertices();
        v.sort_unstable();
        v
    }

    pub fn positions<T: Scalar, F>(&self, lookup: F) -> [Point2<T>; 3]
    where
        F: Fn(PointKey) -> Point2<T>,
    {
        [lookup(self.0), lookup(self.1), lookup(self.2)]
    }

    /// Half-plane sign test across the three edges.
    pub fn contains<T: Scalar, F>(&self, p: &Point2<T>, lookup: F) -> bool
    where
        F: Fn(PointKey) -> Point2<T>,
    {
        let [a, b, c] = self.positions(lookup);
        point_in_triangle(p, &a, &b, &c)
    }

    /// Strict in-circle predicate; cocircular points are not contained.
    pub fn circumcircle_contains<T: Scalar, F>(&self, p: &Point2<T>, lookup: F) -> bool
    where
        F: Fn(PointKey) -> Point2<T>,
    {
        let [a, b, c] = self.positions(lookup);
        in_circumcircle(&a, &b, &c, p)
    }

    /// Twice the signed area; positive for counter-clockwise winding.
    pub fn signed_area2<T: Scalar, F>(&self, lookup: F) -> T
    where
        F: Fn(PointKey) -> Point2<T>,
    {
        let [a, b, c] = self.positions(lookup);
        orient2d(&a, &b, &c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(k: PointKey) -> Point2 {
        match k.0 {
            0 => Point2::new(0.0, 0.0),
            1 => Point2::new(2.0, 0.0),
            _ => Point2::new(0.0, 2.0),
        }
    }

    #[test]
    fn edges_cover_all_sides() {
        let t = Triangle(PointKey(0), PointKey(1), PointKey(2));
        let edges = t.edges();
        assert!(edges.contains(&EdgeKey::new(PointKey(1), PointKey(0))));
        assert!(edges.contains(&EdgeKey::new(PointKey(2), PointKey(1))));
        assert!(edges.contains(&EdgeKey::new(PointKey(0), PointKey(2))));
    }

    #[test]
    fn geometric_queries() {
        let t = Triangle(PointKey(0), PointKey(1), PointKey(2));
        assert!(t.contains(&Point2::new(0.5, 0.5), lookup));
        assert!(!t.contains(&Point2::new(2.0, 2.0), lookup));
        assert!(t.circumcircle_contains(&Point2::new(1.9, 1.9), lookup));
        assert!(!t.circumcircle_contains(&Point2::new(2.0, 2.0), lookup));
        assert_eq!(t.signed_area2(lookup), 4.0);
    }

    #[test]
    fn sorted_keys_ignore_rotation() {
        let t1 = Triangle(PointKey(5), PointKey(2), PointKey(9));
        let t2 = Triangle(PointKey(9), PointKey(5), PointKey(2));
        assert_eq!(t1.as_sorted_keys(), t2.as_sorted_keys());
    }
}
