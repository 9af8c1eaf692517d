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

use ahash::{AHashMap, AHashSet};

use crate::geometry::canonical_edge::EdgeKey;
use crate::geometry::point::{Point2, PointKey, Vertex};
use crate::geometry::triangle::Triangle;
use crate::numeric::scalar::Scalar;

pub mod delaunay;

pub use delaunay::{BowyerWatson, build as triangulate, build_from_points as triangulate_points};

pub trait Triangulate2D<T: Scalar> {
    fn triangulate(&self, vertices: &[Vertex<T>]) -> Triangulation<T>;
}

/// Triangle set over keyed input points, scaffold already removed.
///
/// Rebuilt wholesale by every call; nothing carries over between builds.
#[derive(Clone, Debug, Default)]
pub struct Triangulation<T: Scalar = f64> {
    pub vertices: Vec<Vertex<T>>,
    pub triangles: Vec<Triangle>,
    index: AHashMap<PointKey, usize>,
}

impl<T: Scalar> Triangulation<T> {
    pub fn new(vertices: Vec<Vertex<T>>, triangles: Vec<Triangle>) -> Self {
        let index = vertices.iter().enumerate().map(|(i, v)| (v.key, i)).collect();
        Triangulation {
            vertices,
            triangles,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn position(&self, key: PointKey) -> Option<Point2<T>> {
        self.index.get(&key).map(|&i| self.vertices[i].position)
    }

    /// Corner positions of every triangle, ready for drawing.
    pub fn triangle_positions(&self) -> Vec<[Point2<T>; 3]> {
        self.triangles
            .iter()
            .filter_map(|t| self.lookup_all(t))
            .collect()
    }

    /// Unique edges in first-appearance order.
    pub fn edges(&self) -> Vec<EdgeKey> {
        let mut seen = AHashSet::with_capacity(self.triangles.len() * 2);
        let mut out = Vec::with_capacity(self.triangles.len() * 2);
        for t in &self.triangles {
            for e in t.edges() {
                if seen.insert(e) {
                    out.push(e);
                }
            }
        }
        out
    }

    /// Pairs `(triangle, point)` where an input point that is not a corner
    /// lies strictly inside the triangle's circumcircle. Empty for a valid
    /// Delaunay triangulation.
    pub fn violations(&self) -> Vec<(Triangle, PointKey)> {
        let mut out = Vec::new();
        for t in &self.triangles {
            let Some(corners) = self.lookup_all(t) else {
                continue;
            };
            for v in &self.vertices {
                if t.has_vertex(v.key) {
                    continue;
                }
                if t.circumcircle_contains(&v.position, |k| corners_of(t, &corners, k)) {
                    out.push((*t, v.key));
                }
            }
        }
        out
    }

    pub fn is_delaunay(&self) -> bool {
        self.violations().is_empty()
    }

    fn lookup_all(&self, t: &Triangle) -> Option<[Point2<T>; 3]> {
        Some([self.position(t.0)?, self.position(t.1)?, self.position(t.2)?])
    }
}

fn corners_of<T: Scalar>(t: &Triangle, corners: &[Point2<T>; 3], k: PointKey) -> Point2<T> {
    if k == t.0 {
        corners[0]
    } else if k == t.1 {
        corners[1]
    } else {
        corners[2]
    }
}
