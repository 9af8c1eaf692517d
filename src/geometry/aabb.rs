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
use crate::kernel::predicates::bbox;
use crate::numeric::scalar::Scalar;

/// An axis-aligned bounding box in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2<T: Scalar = f64> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Scalar> Aabb2<T> {
    pub fn new(min: Point2<T>, max: Point2<T>) -> Self {
        Aabb2 { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2<T>>,
    {
        let (minx, miny, maxx, maxy) = bbox(points)?;
        Some(Aabb2::new(Point2::new(minx, miny), Point2::new(maxx, maxy)))
    }

    /// Grown by `margin` on every side.
    pub fn expanded(&self, margin: T) -> Self {
        Aabb2 {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    /// Larger of width and height.
    pub fn extent(&self) -> T {
        self.width().max(self.height())
    }

    pub fn center(&self) -> Point2<T> {
        let half = T::from_num_den(1, 2);
        Point2::new(
            (self.min.x + self.max.x) * half,
            (self.min.y + self.max.y) * half,
        )
    }

    /// Radius of the circle through the four corners.
    pub fn circumradius(&self) -> T {
        self.center().distance_to(&self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_and_expand() {
        let pts = [Point2::new(0.0, 1.0), Point2::new(4.0, -1.0), Point2::new(2.0, 3.0)];
        let b = Aabb2::from_points(pts.iter()).unwrap();
        assert_eq!(b.min, Point2::new(0.0, -1.0));
        assert_eq!(b.max, Point2::new(4.0, 3.0));
        assert_eq!(b.extent(), 4.0);
        assert_eq!(b.center(), Point2::new(2.0, 1.0));

        let e = b.expanded(1.0);
        assert_eq!(e.width(), 6.0);
        assert_eq!(e.min, Point2::new(-1.0, -2.0));
        assert_eq!(e.height(), 6.0);
    }

    #[test]
    fn empty_input_has_no_box() {
        let pts: [Point2; 0] = [];
        assert!(Aabb2::from_points(pts.iter()).is_none());
    }
}
