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

use std::collections::BTreeMap;

use rand::Rng;
use tracing::trace;

use crate::error::{Result, SandboxError};
use crate::geometry::point::{Point2, PointKey, Vertex};
use crate::numeric::scalar::Scalar;

/// Owner of the live point set.
///
/// Points live in an arena keyed by [`PointKey`]. Keys are issued from a
/// monotonically increasing counter and are never reused, so removing a point
/// never changes the identity of any other point. Iteration is in key order,
/// which is also creation order.
#[derive(Clone, Debug)]
pub struct PointStore<T: Scalar = f64> {
    points: BTreeMap<PointKey, Point2<T>>,
    next_key: u64,
    revision: u64,
    synced_revision: u64,
}

impl<T: Scalar> Default for PointStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> PointStore<T> {
    pub fn new() -> Self {
        PointStore {
            points: BTreeMap::new(),
            next_key: 0,
            revision: 0,
            synced_revision: 0,
        }
    }

    pub fn add_point(&mut self, x: T, y: T) -> Result<PointKey> {
        let p = checked(x, y)?;
        let key = PointKey(self.next_key);
        self.next_key += 1;
        self.points.insert(key, p);
        self.touch();
        trace!(%key, x = x.to_f64_lossy(), y = y.to_f64_lossy(), "point added");
        Ok(key)
    }

    pub fn remove_point(&mut self, key: PointKey) -> Result<Point2<T>> {
        let p = self
            .points
            .remove(&key)
            .ok_or(SandboxError::UnknownPoint(key))?;
        self.touch();
        trace!(%key, "point removed");
        Ok(p)
    }

    pub fn move_point(&mut self, key: PointKey, x: T, y: T) -> Result<()> {
        let p = checked(x, y)?;
        let slot = self
            .points
            .get_mut(&key)
            .ok_or(SandboxError::UnknownPoint(key))?;
        *slot = p;
        self.touch();
        trace!(%key, x = x.to_f64_lossy(), y = y.to_f64_lossy(), "point moved");
        Ok(())
    }

    pub fn get(&self, key: PointKey) -> Option<Point2<T>> {
        self.points.get(&key).copied()
    }

    pub fn contains(&self, key: PointKey) -> bool {
        self.points.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PointKey, Point2<T>)> + '_ {
        self.points.iter().map(|(k, p)| (*k, *p))
    }

    /// Snapshot handed to the builders.
    pub fn vertices(&self) -> Vec<Vertex<T>> {
        self.iter().map(|(k, p)| Vertex::new(k, p)).collect()
    }

    /// Drops every point. Issued keys stay retired.
    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            self.points.clear();
            self.touch();
        }
    }

    /// Adds `n` points uniformly inside `[-half_extent, half_extent]²`.
    ///
    /// `half_extent` must be finite and non-negative.
    pub fn seed_random<R: Rng + ?Sized>(
        &mut self,
        n: usize,
        half_extent: T,
        rng: &mut R,
    ) -> Result<Vec<PointKey>> {
        let h = half_extent.to_f64_lossy();
        if !(h.is_finite() && h >= 0.0) {
            return Err(SandboxError::InvalidConfig(format!(
                "seed half extent must be finite and non-negative, got {h}"
            )));
        }
        let mut keys = Vec::with_capacity(n);
        for _ in 0..n {
            let x = rng.random_range(-h..=h);
            let y = rng.random_range(-h..=h);
            keys.push(self.add_point(T::from_f64_lossy(x), T::from_f64_lossy(y))?);
        }
        Ok(keys)
    }

    /// Bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the point set changed since the last `mark_synced`.
    pub fn is_dirty(&self) -> bool {
        self.revision != self.synced_revision
    }

    pub fn mark_synced(&mut self) {
        self.synced_revision = self.revision;
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

fn checked<T: Scalar>(x: T, y: T) -> Result<Point2<T>> {
    let p = Point2::new(x, y);
    if p.is_finite() {
        Ok(p)
    } else {
        Err(SandboxError::NonFiniteCoordinate {
            x: x.to_f64_lossy(),
            y: y.to_f64_lossy(),
        })
    }
}
