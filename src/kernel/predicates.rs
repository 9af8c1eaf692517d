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

use crate::geometry::point::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

/// In-circle determinant.
///
/// Sign of the lifted 4x4 determinant with rows `(x, y, x²+y², 1)` for
/// `a, b, c, d`. Evaluated after translating `d` to the origin, which leaves
/// the determinant unchanged and collapses it to 3x3.
///
/// For counter-clockwise `a, b, c`:
/// - >0 if `d` lies strictly inside the circumcircle
/// - <0 if outside
/// - =0 if cocircular
pub fn incircle<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> T {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    det3([
        [adx, ady, alift],
        [bdx, bdy, blift],
        [cdx, cdy, clift],
    ])
}

#[inline]
fn det3<T: Scalar>(m: [[T; 3]; 3]) -> T {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Strict circumcircle containment, independent of the winding of `a, b, c`.
pub fn in_circumcircle<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> bool {
    let det = incircle(a, b, c, d);
    if orient2d(a, b, c).is_negative() {
        det.is_negative()
    } else {
        det.is_positive()
    }
}

/// Half-plane test against all three edges. Boundary points count as inside.
pub fn point_in_triangle<T: Scalar>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> bool {
    let d1 = orient2d(a, b, p);
    let d2 = orient2d(b, c, p);
    let d3 = orient2d(c, a, p);

    let has_neg = d1.is_negative() || d2.is_negative() || d3.is_negative();
    let has_pos = d1.is_positive() || d2.is_positive() || d3.is_positive();

    !(has_neg && has_pos)
}

/// `cos` of the angle between `pivot -> p` and the +x axis, without trig.
///
/// Larger values come first in counter-clockwise order around a bottom-most
/// pivot. A point coincident with the pivot maps to `1`.
pub fn angle_proxy<T: Scalar>(pivot: &Point2<T>, p: &Point2<T>) -> T {
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len.is_zero() { T::one() } else { dx / len }
}

/// Min/max corners over `points`, or `None` when empty.
pub fn bbox<'a, T: Scalar, I>(points: I) -> Option<(T, T, T, T)>
where
    I: IntoIterator<Item = &'a Point2<T>>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let (mut minx, mut miny, mut maxx, mut maxy) = (first.x, first.y, first.x, first.y);
    for p in iter {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    Some((minx, miny, maxx, maxy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn incircle_sign_matches_containment() {
        let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        assert!(incircle(&a, &b, &c, &p(0.4, 0.4)) > 0.0);
        assert!(incircle(&a, &b, &c, &p(3.0, 3.0)) < 0.0);
        assert_eq!(incircle(&a, &b, &c, &p(1.0, 1.0)), 0.0);
    }

    #[test]
    fn in_circumcircle_ignores_winding() {
        let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        let inside = p(0.5, 0.5 - 1e-3);
        assert!(in_circumcircle(&a, &b, &c, &inside));
        assert!(in_circumcircle(&a, &c, &b, &inside));
        assert!(!in_circumcircle(&a, &c, &b, &p(1.0, 1.0)));
    }

    #[test]
    fn triangle_contains_boundary() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(point_in_triangle(&p(1.0, 1.0), &a, &b, &c));
        assert!(point_in_triangle(&p(2.0, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&p(3.0, 3.0), &a, &b, &c));
    }

    #[test]
    fn angle_proxy_orders_ccw() {
        let pivot = p(0.0, 0.0);
        assert_eq!(angle_proxy(&pivot, &p(2.0, 0.0)), 1.0);
        assert_eq!(angle_proxy(&pivot, &p(0.0, 3.0)), 0.0);
        assert!(angle_proxy(&pivot, &p(-1.0, 1.0)) < 0.0);
        assert_eq!(angle_proxy(&pivot, &pivot), 1.0);
    }

    #[test]
    fn bbox_of_points() {
        let pts = [p(1.0, -2.0), p(-3.0, 4.0), p(0.0, 0.0)];
        assert_eq!(bbox(pts.iter()), Some((-3.0, -2.0, 1.0, 4.0)));
        assert_eq!(bbox(std::iter::empty::<&Point2>()), None);
    }
}
