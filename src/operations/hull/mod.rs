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

pub mod angular_scan;
pub mod history;

pub use angular_scan::{convex_hull, convex_hull_of_points};
pub use history::{History, HistoryEvent, HistoryPlayer, HistoryRecorder};

use crate::geometry::canonical_edge::EdgeKey;
use crate::geometry::point::PointKey;

/// One raw drawing operation performed by the hull scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullStep {
    Add(EdgeKey),
    Retire(EdgeKey),
}

impl HullStep {
    pub fn edge(&self) -> EdgeKey {
        match *self {
            HullStep::Add(e) | HullStep::Retire(e) => e,
        }
    }

    /// Visibility the edge has after this step.
    pub fn visible(&self) -> bool {
        matches!(self, HullStep::Add(_))
    }
}

/// Hull boundary as a cyclic key sequence, starting at the pivot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HullChain {
    keys: Vec<PointKey>,
}

impl HullChain {
    pub fn new(keys: Vec<PointKey>) -> Self {
        HullChain { keys }
    }

    pub fn keys(&self) -> &[PointKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Lowest-then-leftmost point the chain starts from.
    pub fn pivot(&self) -> Option<PointKey> {
        self.keys.first().copied()
    }

    pub fn contains(&self, key: PointKey) -> bool {
        self.keys.contains(&key)
    }

    /// Boundary edges including the closing one, each listed once.
    pub fn edges(&self) -> Vec<EdgeKey> {
        match self.keys.len() {
            0 | 1 => Vec::new(),
            2 => vec![EdgeKey::new(self.keys[0], self.keys[1])],
            n => (0..n)
                .map(|i| EdgeKey::new(self.keys[i], self.keys[(i + 1) % n]))
                .collect(),
        }
    }
}

/// Output of one full hull build: the chain plus every edge the scan drew or
/// erased along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HullRun {
    pub chain: HullChain,
    pub steps: Vec<HullStep>,
}

impl HullRun {
    /// Coalesced, replayable view of `steps`.
    pub fn history(&self) -> History {
        HistoryRecorder::from_steps(&self.steps)
    }
}
