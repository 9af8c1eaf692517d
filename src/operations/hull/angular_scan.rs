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

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::geometry::canonical_edge::EdgeKey;
use crate::geometry::point::{Point2, PointKey, Vertex};
use crate::kernel::orientation::{Orientation, orient2d};
use crate::kernel::predicates::angle_proxy;
use crate::numeric::scalar::Scalar;
use crate::operations::hull::{HullChain, HullRun, HullStep};

/// Candidate ordered around the pivot.
struct Ranked<T: Scalar> {
    key: PointKey,
    pos: Point2<T>,
    proxy: T,
    dist2: T,
}

/// Convex hull by angular scan around the lowest-then-leftmost point.
///
/// Candidates are ordered by descending `cos` of their angle to the +x axis
/// (see [`angle_proxy`]), ties by ascending distance from the pivot and then
/// by key. Points exactly collinear with the pivot count as tied even when
/// rounding gave them slightly different proxies. The chain is built on a
/// stack; a candidate that would make a clockwise or collinear turn pops the
/// top until the turn is left.
///
/// Every trial edge, pop and push is reported as a [`HullStep`]:
/// - before testing a candidate the edge `top -> candidate` is drawn
///   tentatively (add);
/// - popping `b` off `a` retires the trial edge `b -> candidate` and the exposed
///   edge `a -> b`;
/// - pushing the candidate adds `new top -> candidate`;
/// - the chain is closed by adding `top -> pivot`.
///
/// Fewer than three points give an empty chain and no steps. Scaffold
/// vertices are ignored. The function is pure: identical input yields an
/// identical run.
pub fn convex_hull<T: Scalar>(vertices: &[Vertex<T>]) -> HullRun {
    let live: Vec<&Vertex<T>> = vertices.iter().filter(|v| !v.scaffold).collect();
    if live.len() < 3 {
        return HullRun::default();
    }

    let pivot_idx = pivot_index(&live);
    let pivot = live[pivot_idx];

    let mut ranked: Vec<Ranked<T>> = live
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != pivot_idx)
        .map(|(_, v)| Ranked {
            key: v.key,
            pos: v.position,
            proxy: angle_proxy(&pivot.position, &v.position),
            dist2: pivot.position.distance_squared_to(&v.position),
        })
        .collect();
    ranked.sort_by(compare_ranked);
    order_collinear_runs(&pivot.position, &mut ranked);

    let mut steps = Vec::with_capacity(ranked.len() * 3);
    let mut stack: Vec<(PointKey, Point2<T>)> = Vec::with_capacity(ranked.len() + 1);
    stack.push((pivot.key, pivot.position));

    for c in &ranked {
        let (top, _) = stack[stack.len() - 1];
        steps.push(HullStep::Add(EdgeKey::new(top, c.key)));

        while stack.len() >= 2 {
            let n = stack.len();
            let (a_key, a) = stack[n - 2];
            let (b_key, b) = stack[n - 1];
            if Orientation::of(&a, &b, &c.pos) == Orientation::CounterClockwise {
                break;
            }
            stack.truncate(n - 1);
            trace!(popped = %b_key, candidate = %c.key, "hull pop");
            steps.push(HullStep::Retire(EdgeKey::new(b_key, c.key)));
            steps.push(HullStep::Retire(EdgeKey::new(a_key, b_key)));
        }

        let (top, _) = stack[stack.len() - 1];
        steps.push(HullStep::Add(EdgeKey::new(top, c.key)));
        stack.push((c.key, c.pos));
    }

    let (last, _) = stack[stack.len() - 1];
    steps.push(HullStep::Add(EdgeKey::new(last, pivot.key)));

    let chain = HullChain::new(stack.into_iter().map(|(k, _)| k).collect());
    debug!(
        points = live.len(),
        hull = chain.len(),
        steps = steps.len(),
        "convex hull built"
    );
    HullRun { chain, steps }
}

/// Same as [`convex_hull`] for bare positions, keyed by slice index.
pub fn convex_hull_of_points<T: Scalar>(points: &[Point2<T>]) -> HullRun {
    let vertices: Vec<Vertex<T>> = points
        .iter()
        .enumerate()
        .map(|(i, p)| Vertex::new(PointKey(i as u64), *p))
        .collect();
    convex_hull(&vertices)
}

/// Lowest y, then lowest x, then lowest key.
fn pivot_index<T: Scalar>(live: &[&Vertex<T>]) -> usize {
    let mut best = 0;
    for (i, v) in live.iter().enumerate().skip(1) {
        let b = live[best];
        if v.position.is_lower_left_of(&b.position)
            || (v.position == b.position && v.key < b.key)
        {
            best = i;
        }
    }
    best
}

fn compare_ranked<T: Scalar>(a: &Ranked<T>, b: &Ranked<T>) -> Ordering {
    b.proxy
        .partial_cmp(&a.proxy)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.dist2.partial_cmp(&b.dist2).unwrap_or(Ordering::Equal))
        .then_with(|| a.key.cmp(&b.key))
}

/// Reorders adjacent runs on one ray from the pivot by distance.
///
/// Points coincident with the pivot sort first and are left alone; they are
/// collinear with everything and would merge unrelated rays.
fn order_collinear_runs<T: Scalar>(pivot: &Point2<T>, ranked: &mut [Ranked<T>]) {
    let mut i = ranked.iter().take_while(|r| r.dist2.is_zero()).count();
    while i < ranked.len() {
        let mut j = i + 1;
        while j < ranked.len() && orient2d(pivot, &ranked[i].pos, &ranked[j].pos).is_zero() {
            j += 1;
        }
        if j - i > 1 {
            ranked[i..j].sort_by(|a, b| {
                a.dist2
                    .partial_cmp(&b.dist2)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.key.cmp(&b.key))
            });
        }
        i = j;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(run: &HullRun) -> Vec<u64> {
        run.chain.keys().iter().map(|k| k.0).collect()
    }

    #[test]
    fn square_in_ccw_order() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let run = convex_hull_of_points(&pts);
        assert_eq!(keys(&run), vec![0, 1, 2, 3]);
        assert!(run.steps.iter().all(|s| s.visible()));
    }

    #[test]
    fn pivot_is_lowest_then_leftmost() {
        let pts = [
            Point2::new(3.0, 0.0),
            Point2::new(5.0, 2.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 3.0),
        ];
        let run = convex_hull_of_points(&pts);
        assert_eq!(run.chain.pivot(), Some(PointKey(2)));
    }

    #[test]
    fn pop_retires_trial_and_exposed_edge() {
        // (2,1) is pushed, then popped when (2,4) turns clockwise.
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 4.0),
            Point2::new(2.0, 1.0),
        ];
        let run = convex_hull_of_points(&pts);
        assert_eq!(keys(&run), vec![0, 1, 2]);
        assert!(
            run.steps
                .contains(&HullStep::Retire(EdgeKey::new(PointKey(3), PointKey(2))))
        );
        assert!(
            run.steps
                .contains(&HullStep::Retire(EdgeKey::new(PointKey(1), PointKey(3))))
        );
    }

    #[test]
    fn collinear_points_keep_extremes() {
        let pts = [
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(3.0, 0.0),
        ];
        let run = convex_hull_of_points(&pts);
        assert_eq!(keys(&run), vec![1, 3]);
        assert_eq!(run.chain.edges().len(), 1);
    }

    #[test]
    fn too_few_points() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let run = convex_hull_of_points(&pts);
        assert!(run.chain.is_empty());
        assert!(run.steps.is_empty());
    }

    #[test]
    fn scaffold_vertices_are_skipped() {
        let vs = [
            Vertex::new(PointKey(0), Point2::new(0.0, 0.0)),
            Vertex::new(PointKey(1), Point2::new(1.0, 0.0)),
            Vertex::new(PointKey(2), Point2::new(0.0, 1.0)),
            Vertex::scaffold(PointKey(3), Point2::new(-10.0, -10.0)),
        ];
        let run = convex_hull(&vs);
        assert!(!run.chain.contains(PointKey(3)));
        assert_eq!(run.chain.len(), 3);
    }
}
