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

use approx::assert_relative_eq;
use hullscope::geometry::Point2;
use hullscope::kernel::{
    Orientation, angle_proxy, bbox, in_circumcircle, incircle, orient2d, point_in_triangle,
};

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

#[test]
fn test_orientation_signs() {
    let (a, b) = (p(0.0, 0.0), p(2.0, 0.0));
    assert_eq!(Orientation::of(&a, &b, &p(1.0, 1.0)), Orientation::CounterClockwise);
    assert_eq!(Orientation::of(&a, &b, &p(1.0, -1.0)), Orientation::Clockwise);
    assert_eq!(Orientation::of(&a, &b, &p(5.0, 0.0)), Orientation::Collinear);
    assert_relative_eq!(orient2d(&a, &b, &p(1.0, 3.0)), 6.0);
}

#[test]
fn test_orientation_is_antisymmetric() {
    let (a, b, c) = (p(0.3, -1.2), p(4.1, 0.7), p(-2.0, 3.3));
    assert_relative_eq!(orient2d(&a, &b, &c), -orient2d(&b, &a, &c), epsilon = 1e-12);
    assert_relative_eq!(orient2d(&a, &b, &c), orient2d(&b, &c, &a), epsilon = 1e-12);
}

#[test]
fn test_incircle_unit_circle() {
    // CCW points on the unit circle.
    let (a, b, c) = (p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0));
    assert!(incircle(&a, &b, &c, &p(0.0, 0.0)) > 0.0);
    assert!(incircle(&a, &b, &c, &p(0.0, 0.999)) > 0.0);
    assert!(incircle(&a, &b, &c, &p(0.0, 1.001)) < 0.0);
    assert_eq!(incircle(&a, &b, &c, &p(0.0, -1.0)), 0.0);
}

#[test]
fn test_cocircular_point_is_not_contained() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0));
    assert!(!in_circumcircle(&a, &b, &c, &p(0.0, 1.0)));
    assert!(!in_circumcircle(&c, &b, &a, &p(0.0, 1.0)));
}

#[test]
fn test_in_circumcircle_any_winding() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    let inside = p(3.0, 2.5);
    assert!(in_circumcircle(&a, &b, &c, &inside));
    assert!(in_circumcircle(&a, &c, &b, &inside));
    assert!(!in_circumcircle(&a, &b, &c, &p(5.0, 5.0)));
    assert!(!in_circumcircle(&b, &a, &c, &p(5.0, 5.0)));
}

#[test]
fn test_point_in_triangle() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
    assert!(point_in_triangle(&p(1.0, 1.0), &a, &b, &c));
    assert!(point_in_triangle(&p(1.0, 1.0), &a, &c, &b));
    assert!(point_in_triangle(&p(2.0, 2.0), &a, &b, &c));
    assert!(point_in_triangle(&a, &a, &b, &c));
    assert!(!point_in_triangle(&p(3.0, 3.0), &a, &b, &c));
    assert!(!point_in_triangle(&p(-0.1, 1.0), &a, &b, &c));
}

#[test]
fn test_angle_proxy_orders_ccw() {
    let pivot = p(0.0, 0.0);
    let east = angle_proxy(&pivot, &p(3.0, 0.0));
    let north_east = angle_proxy(&pivot, &p(2.0, 2.0));
    let north = angle_proxy(&pivot, &p(0.0, 5.0));
    let west = angle_proxy(&pivot, &p(-1.0, 0.0));
    assert_relative_eq!(east, 1.0);
    assert_relative_eq!(north_east, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
    assert_relative_eq!(north, 0.0);
    assert_relative_eq!(west, -1.0);
    assert!(east > north_east && north_east > north && north > west);
    assert_eq!(angle_proxy(&pivot, &pivot), 1.0);
}

#[test]
fn test_bbox() {
    assert_eq!(bbox(std::iter::empty::<&Point2>()), None);
    let pts = [p(1.0, -2.0), p(-3.0, 4.0), p(0.5, 0.5)];
    assert_eq!(bbox(pts.iter()), Some((-3.0, -2.0, 1.0, 4.0)));
}
