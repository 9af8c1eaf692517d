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

use crate::geometry::point::PointKey;

/// Undirected edge between two stored points.
///
/// The smaller key is always stored first, so an edge and its reversal hash
/// and compare identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeKey {
    a: PointKey,
    b: PointKey,
}

impl EdgeKey {
    #[inline]
    pub fn new(p1: PointKey, p2: PointKey) -> Self {
        if p1 <= p2 {
            Self { a: p1, b: p2 }
        } else {
            Self { a: p2, b: p1 }
        }
    }

    /// Endpoints, smaller key first.
    #[inline]
    pub fn endpoints(&self) -> (PointKey, PointKey) {
        (self.a, self.b)
    }

    #[inline]
    pub fn contains(&self, key: PointKey) -> bool {
        self.a == key || self.b == key
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reversal_is_same_edge() {
        let e1 = EdgeKey::new(PointKey(4), PointKey(1));
        let e2 = EdgeKey::new(PointKey(1), PointKey(4));
        assert_eq!(e1, e2);
        assert_eq!(e1.endpoints(), (PointKey(1), PointKey(4)));

        let mut set = HashSet::new();
        set.insert(e1);
        assert!(!set.insert(e2));
    }

    #[test]
    fn contains_either_endpoint() {
        let e = EdgeKey::new(PointKey(9), PointKey(2));
        assert!(e.contains(PointKey(2)));
        assert!(e.contains(PointKey(9)));
        assert!(!e.contains(PointKey(3)));
    }
}
