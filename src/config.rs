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

use crate::error::{Result, SandboxError};

/// How often the live hull is rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecomputePolicy {
    /// Rebuild on every `tick`, whether or not the point set changed.
    EveryFrame,
    /// Rebuild only after the point set changed.
    #[default]
    OnChange,
    /// Rebuild after a change, at most once every `frames` ticks.
    Throttled { frames: u32 },
}

/// Super-triangle sizing for the Bowyer-Watson builder.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelaunayConfig {
    /// Absolute margin added around the input bounding box.
    pub padding: f64,
    /// Extra margin as a multiple of the larger box extent.
    pub super_scale: f64,
}

impl Default for DelaunayConfig {
    fn default() -> Self {
        DelaunayConfig {
            padding: 1.0,
            super_scale: 64.0,
        }
    }
}

impl DelaunayConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || self.padding <= 0.0 {
            return Err(SandboxError::InvalidConfig(format!(
                "delaunay padding must be finite and positive, got {}",
                self.padding
            )));
        }
        if !self.super_scale.is_finite() || self.super_scale < 0.0 {
            return Err(SandboxError::InvalidConfig(format!(
                "delaunay super_scale must be finite and non-negative, got {}",
                self.super_scale
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SandboxConfig {
    /// A release closer than this to the press point is a click, not a drag.
    pub move_threshold: f64,
    /// Number of random points placed by `Sandbox::seeded`.
    pub initial_points: usize,
    /// Seeded points fall in `[-half_extent, half_extent]` on both axes.
    pub seed_half_extent: f64,
    pub recompute: RecomputePolicy,
    pub delaunay: DelaunayConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        SandboxConfig {
            move_threshold: 0.01,
            initial_points: 5,
            seed_half_extent: 5.0,
            recompute: RecomputePolicy::default(),
            delaunay: DelaunayConfig::default(),
        }
    }
}

impl SandboxConfig {
    pub fn with_move_threshold(mut self, threshold: f64) -> Self {
        self.move_threshold = threshold;
        self
    }

    pub fn with_initial_points(mut self, n: usize) -> Self {
        self.initial_points = n;
        self
    }

    pub fn with_seed_half_extent(mut self, half_extent: f64) -> Self {
        self.seed_half_extent = half_extent;
        self
    }

    pub fn with_recompute(mut self, policy: RecomputePolicy) -> Self {
        self.recompute = policy;
        self
    }

    pub fn with_delaunay(mut self, delaunay: DelaunayConfig) -> Self {
        self.delaunay = delaunay;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.move_threshold.is_finite() || self.move_threshold < 0.0 {
            return Err(SandboxError::InvalidConfig(format!(
                "move_threshold must be finite and non-negative, got {}",
                self.move_threshold
            )));
        }
        if !self.seed_half_extent.is_finite() || self.seed_half_extent <= 0.0 {
            return Err(SandboxError::InvalidConfig(format!(
                "seed_half_extent must be finite and positive, got {}",
                self.seed_half_extent
            )));
        }
        if let RecomputePolicy::Throttled { frames: 0 } = self.recompute {
            return Err(SandboxError::InvalidConfig(
                "throttled recompute needs at least one frame".to_string(),
            ));
        }
        self.delaunay.validate()
    }
}
