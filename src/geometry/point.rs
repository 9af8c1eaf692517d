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

use std::fmt;
use std::ops::Sub;

use crate::numeric::scalar::Scalar;

/// Position in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T: Scalar = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Displacement `other - self`.
    pub fn vector_to(&self, other: &Self) -> Self {
        *other - *self
    }

    pub fn distance_squared_to(&self, other: &Self) -> T {
        let d = self.vector_to(other);
        d.x * d.x + d.y * d.y
    }

    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Lexicographic `(y, x)` comparison used to pick the hull pivot.
    pub fn is_lower_left_of(&self, other: &Self) -> bool {
        self.y < other.y || (self.y == other.y && self.x < other.x)
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Point2<T>;
    fn sub(self, rhs: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Stable identity of a point in the store.
///
/// Keys are handed out in increasing order and never reused, so they double as
/// a creation timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointKey(pub u64);

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A keyed point as seen by the builders.
///
/// `scaffold` marks synthetic geometry such as super-triangle corners; such
/// vertices never reach a builder's output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex<T: Scalar = f64> {
    pub key: PointKey,
    pub position: Point2<T>,
    pub scaffold: bool,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(key: PointKey, position: Point2<T>) -> Self {
        Self {
            key,
            position,
            scaffold: false,
        }
    }

    pub fn scaffold(key: PointKey, position: Point2<T>) -> Self {
        Self {
            key,
            position,
            scaffold: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.distance_squared_to(&b), 25.0);
    }

    #[test]
    fn lower_left_prefers_y_then_x() {
        let a = Point2::new(5.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        let c = Point2::new(1.0, 0.0);
        assert!(a.is_lower_left_of(&b));
        assert!(c.is_lower_left_of(&a));
        assert!(!a.is_lower_left_of(&a));
    }

    #[test]
    fn key_display() {
        assert_eq!(PointKey(7).to_string(), "#7");
    }
}
