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

use rand::Rng;
use tracing::{debug, warn};

use crate::config::{RecomputePolicy, SandboxConfig};
use crate::error::{Result, SandboxError};
use crate::geometry::canonical_edge::EdgeKey;
use crate::geometry::point::{Point2, PointKey};
use crate::numeric::scalar::Scalar;
use crate::operations::hull::{History, HistoryEvent, HistoryPlayer, HullChain, HullRun, convex_hull};
use crate::operations::triangulation::{BowyerWatson, Triangulate2D, Triangulation};
use crate::store::PointStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The hull follows the point set.
    Live,
    /// The last live build is replayed edge by edge.
    Step,
}

/// What a pointer release on an existing point did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointAction {
    Removed,
    Moved,
}

pub type Segment<T> = (Point2<T>, Point2<T>);

/// Host-facing engine: a point store plus the hull and Delaunay builders.
///
/// The host forwards point edits, calls [`Sandbox::tick`] (or
/// [`Sandbox::recompute_if_dirty`]) from its update loop and reads edge and
/// triangle lists back for drawing. In step mode the hull history of the last
/// live build is frozen and the point set is locked until the replay ends.
#[derive(Debug)]
pub struct Sandbox<T: Scalar = f64> {
    config: SandboxConfig,
    store: PointStore<T>,
    mode: Mode,
    hull: HullRun,
    history: History,
    player: Option<HistoryPlayer>,
    frames_since_build: u32,
}

impl<T: Scalar> Sandbox<T> {
    pub fn new(config: SandboxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Sandbox {
            config,
            store: PointStore::new(),
            mode: Mode::Live,
            hull: HullRun::default(),
            history: History::default(),
            player: None,
            frames_since_build: 0,
        })
    }

    /// Starts with `config.initial_points` random points and a built hull.
    pub fn seeded<R: Rng + ?Sized>(config: SandboxConfig, rng: &mut R) -> Result<Self> {
        let mut sandbox = Self::new(config)?;
        let n = sandbox.config.initial_points;
        let half = T::from_f64_lossy(sandbox.config.seed_half_extent);
        sandbox.store.seed_random(n, half, rng)?;
        sandbox.rebuild_hull();
        Ok(sandbox)
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn store(&self) -> &PointStore<T> {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    // ---------- point edits ----------

    pub fn add_point(&mut self, x: T, y: T) -> Result<PointKey> {
        self.ensure_editable()?;
        self.store.add_point(x, y)
    }

    pub fn remove_point(&mut self, key: PointKey) -> Result<()> {
        self.ensure_editable()?;
        self.store.remove_point(key).map(|_| ())
    }

    pub fn move_point(&mut self, key: PointKey, x: T, y: T) -> Result<()> {
        self.ensure_editable()?;
        self.store.move_point(key, x, y)
    }

    /// Resolves a press/release pair on an existing point.
    ///
    /// If the pointer travelled more than `move_threshold` along either axis
    /// the point moves to `release`; otherwise the gesture is a click and the
    /// point is removed.
    pub fn release_point(
        &mut self,
        key: PointKey,
        press: Point2<T>,
        release: Point2<T>,
    ) -> Result<PointAction> {
        let threshold = T::from_f64_lossy(self.config.move_threshold);
        let d = press.vector_to(&release);
        if d.x.abs() > threshold || d.y.abs() > threshold {
            self.move_point(key, release.x, release.y)?;
            Ok(PointAction::Moved)
        } else {
            self.remove_point(key)?;
            Ok(PointAction::Removed)
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.mode == Mode::Step {
            warn!("point edit rejected during hull replay");
            return Err(SandboxError::StepModeLocked);
        }
        Ok(())
    }

    // ---------- recompute cadence ----------

    /// Rebuilds the live hull if the point set changed. Returns whether a
    /// build ran. Does nothing in step mode.
    pub fn recompute_if_dirty(&mut self) -> bool {
        if self.mode != Mode::Live || !self.store.is_dirty() {
            return false;
        }
        self.rebuild_hull();
        true
    }

    /// Per-frame hook applying the configured [`RecomputePolicy`].
    pub fn tick(&mut self) -> bool {
        if self.mode != Mode::Live {
            return false;
        }
        self.frames_since_build = self.frames_since_build.saturating_add(1);
        match self.config.recompute {
            RecomputePolicy::EveryFrame => {
                self.rebuild_hull();
                true
            }
            RecomputePolicy::OnChange => self.recompute_if_dirty(),
            RecomputePolicy::Throttled { frames } => {
                if self.frames_since_build >= frames {
                    self.recompute_if_dirty()
                } else {
                    false
                }
            }
        }
    }

    fn rebuild_hull(&mut self) {
        let vertices = self.store.vertices();
        self.hull = convex_hull(&vertices);
        self.history = self.hull.history();
        self.store.mark_synced();
        self.frames_since_build = 0;
    }

    // ---------- renderer queries ----------

    pub fn hull_chain(&self) -> &HullChain {
        &self.hull.chain
    }

    /// Segments of the last built hull.
    pub fn hull_edges(&self) -> Vec<Segment<T>> {
        self.segments(self.hull.chain.edges())
    }

    /// Segments currently on screen: the hull when live, the replayed subset
    /// when stepping.
    pub fn visible_edges(&self) -> Vec<Segment<T>> {
        match &self.player {
            Some(player) => self.segments(player.visible_edges()),
            None => self.hull_edges(),
        }
    }

    /// Coalesced history of the last live build, or the frozen replay.
    pub fn history_sequence(&self) -> &[HistoryEvent] {
        match &self.player {
            Some(player) => player.sequence(),
            None => self.history.events(),
        }
    }

    /// `Some(-1 ..= step_count - 1)` in step mode, `None` when live.
    pub fn step_index(&self) -> Option<isize> {
        self.player.as_ref().map(HistoryPlayer::step_index)
    }

    pub fn step_count(&self) -> usize {
        self.history_sequence().len()
    }

    /// Delaunay triangulation of the current point set, rebuilt on each call.
    pub fn triangulation(&self) -> Triangulation<T> {
        BowyerWatson::new(self.config.delaunay).triangulate(&self.store.vertices())
    }

    pub fn edge_segment(&self, edge: EdgeKey) -> Option<Segment<T>> {
        let (a, b) = edge.endpoints();
        Some((self.store.get(a)?, self.store.get(b)?))
    }

    fn segments(&self, edges: Vec<EdgeKey>) -> Vec<Segment<T>> {
        edges
            .into_iter()
            .filter_map(|e| self.edge_segment(e))
            .collect()
    }

    // ---------- mode control ----------

    /// Freezes the current hull history and rewinds it to step `-1`.
    pub fn enter_step_mode(&mut self) -> usize {
        if self.mode == Mode::Step {
            return self.step_count();
        }
        self.recompute_if_dirty();
        let player = HistoryPlayer::new(self.history.clone());
        let steps = player.step_count();
        self.player = Some(player);
        self.mode = Mode::Step;
        debug!(steps, "entered step mode");
        steps
    }

    /// Drops the replay and resumes live recomputation.
    pub fn exit_step_mode(&mut self) {
        if self.mode == Mode::Live {
            return;
        }
        self.player = None;
        self.mode = Mode::Live;
        self.rebuild_hull();
        debug!("resumed live mode");
    }

    pub fn next(&mut self) -> bool {
        self.player.as_mut().is_some_and(HistoryPlayer::next)
    }

    pub fn prev(&mut self) -> bool {
        self.player.as_mut().is_some_and(HistoryPlayer::prev)
    }

    /// Jumps the replay to the finished hull.
    pub fn reset(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.reset();
        }
    }

    pub fn player(&self) -> Option<&HistoryPlayer> {
        self.player.as_ref()
    }
}
