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

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::DelaunayConfig;
use crate::geometry::aabb::Aabb2;
use crate::geometry::point::{Point2, PointKey, Vertex};
use crate::geometry::triangle::Triangle;
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::in_circumcircle;
use crate::numeric::scalar::Scalar;
use crate::operations::triangulation::{Triangulate2D, Triangulation};

pub const SQRT_3: f64 = 1.7320508075688772;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

/// Triangle over arena indices; scaffold corners sit past the input points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tri(usize, usize, usize);

#[inline]
fn tri_edges(t: Tri) -> [(usize, usize); 3] {
    [(t.0, t.1), (t.1, t.2), (t.2, t.0)]
}

/// Bowyer-Watson incremental Delaunay triangulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BowyerWatson {
    pub config: DelaunayConfig,
}

impl BowyerWatson {
    pub fn new(config: DelaunayConfig) -> Self {
        BowyerWatson { config }
    }
}

impl<T: Scalar> Triangulate2D<T> for BowyerWatson {
    fn triangulate(&self, vertices: &[Vertex<T>]) -> Triangulation<T> {
        build(vertices, &self.config)
    }
}

/// Build the Delaunay triangulation of `vertices`.
///
/// Points are inserted in input order into a scaffold super-triangle. Each
/// insertion removes every triangle whose circumcircle strictly contains the
/// new point and fans the cavity boundary to it. Triangles touching a
/// scaffold corner are dropped before returning.
///
/// Fewer than three points give an empty triangulation. A point that lands
/// exactly on an existing vertex finds no bad triangle and is skipped.
/// Scaffold-tagged input vertices are ignored.
///
/// The scaffold is finite, so the output is Delaunay but not always a full
/// triangulation of the convex hull: when a hull edge is nearly flat as seen
/// from a scaffold corner, the thin triangle on that edge keeps the corner
/// and is dropped with it. A larger `super_scale` makes this rarer.
pub fn build<T: Scalar>(vertices: &[Vertex<T>], config: &DelaunayConfig) -> Triangulation<T> {
    let input: Vec<Vertex<T>> = vertices.iter().filter(|v| !v.scaffold).copied().collect();
    if input.len() < 3 {
        return Triangulation::new(input, Vec::new());
    }

    let mut points: Vec<Point2<T>> = input.iter().map(|v| v.position).collect();
    let s0 = points.len();
    points.extend(super_triangle(&points, config));

    // Initialize with super-triangle
    let mut triangles = vec![Tri(s0, s0 + 1, s0 + 2)];

    for pid in 0..s0 {
        bowyer_watson_insert_point(pid, &points, &mut triangles);
    }

    // Remove super-triangles
    triangles.retain(|t| t.0 < s0 && t.1 < s0 && t.2 < s0);

    let out: Vec<Triangle> = triangles
        .iter()
        .map(|t| Triangle(input[t.0].key, input[t.1].key, input[t.2].key))
        .collect();

    debug!(
        points = s0,
        triangles = out.len(),
        "delaunay triangulation built"
    );
    Triangulation::new(input, out)
}

/// Same as [`build`] for bare positions, keyed by slice index.
pub fn build_from_points<T: Scalar>(pts: &[Point2<T>], config: &DelaunayConfig) -> Triangulation<T> {
    let vertices: Vec<Vertex<T>> = pts
        .iter()
        .enumerate()
        .map(|(i, p)| Vertex::new(PointKey(i as u64), *p))
        .collect();
    build(&vertices, config)
}

/// Counter-clockwise equilateral triangle strictly containing the padded
/// bounding box of `points`.
///
/// The box grows by `padding + super_scale * extent`; the triangle's
/// inscribed circle is the circle through the padded box's corners.
fn super_triangle<T: Scalar>(points: &[Point2<T>], config: &DelaunayConfig) -> [Point2<T>; 3] {
    let Some(bounds) = Aabb2::from_points(points.iter()) else {
        return [Point2::default(); 3];
    };
    let margin = T::from_f64_lossy(config.padding) + T::from_f64_lossy(config.super_scale) * bounds.extent();
    let padded = bounds.expanded(margin);

    let c = padded.center();
    let r = padded.circumradius();
    let two = T::from_num_den(2, 1);
    let sqrt_3 = T::from_f64_lossy(SQRT_3);

    [
        Point2::new(c.x, c.y + two * r),
        Point2::new(c.x - sqrt_3 * r, c.y - r),
        Point2::new(c.x + sqrt_3 * r, c.y - r),
    ]
}

/// Insert a single point using Bowyer-Watson algorithm
fn bowyer_watson_insert_point<T: Scalar>(pid: usize, points: &[Point2<T>], triangles: &mut Vec<Tri>) {
    let p = &points[pid];

    // Find triangles whose circumcircle contains p
    let bad: SmallVec<[usize; 16]> = triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| in_circumcircle(&points[t.0], &points[t.1], &points[t.2], p))
        .map(|(i, _)| i)
        .collect();

    if bad.is_empty() {
        trace!(pid, "point coincides with an existing vertex; skipped");
        return;
    }

    // Cavity boundary: edges used by exactly one bad triangle
    let mut edge_count: AHashMap<Edge, u8> = AHashMap::with_capacity(bad.len() * 3);
    let mut directed: SmallVec<[(usize, usize); 64]> = SmallVec::new();
    for &i in &bad {
        for (u, v) in tri_edges(triangles[i]) {
            *edge_count.entry(Edge::new(u, v)).or_insert(0) += 1;
            directed.push((u, v));
        }
    }

    // Remove bad triangles, keeping the survivors in order
    let mut is_bad = vec![false; triangles.len()];
    for &i in &bad {
        is_bad[i] = true;
    }
    let mut idx = 0;
    triangles.retain(|_| {
        let keep = !is_bad[idx];
        idx += 1;
        keep
    });

    let before = triangles.len();
    for (u, v) in directed {
        if edge_count.get(&Edge::new(u, v)).copied() != Some(1) {
            continue;
        }
        let t = if orient2d(&points[u], &points[v], p).is_negative() {
            Tri(v, u, pid)
        } else {
            Tri(u, v, pid)
        };
        triangles.push(t);
    }

    trace!(
        pid,
        bad = bad.len(),
        created = triangles.len() - before,
        "cavity retriangulated"
    );
}
