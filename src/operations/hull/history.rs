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

use ahash::AHashMap;
use tracing::trace;

use crate::geometry::canonical_edge::EdgeKey;
use crate::operations::hull::HullStep;

/// One visibility toggle of one hull edge.
///
/// `slot` is the edge's history index: assigned the first time the edge is
/// touched and shared by every later toggle of the same edge, so a renderer
/// can keep one line object per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HistoryEvent {
    pub step: usize,
    pub slot: usize,
    pub edge: EdgeKey,
    pub visible: bool,
}

/// Coalesced, replayable log of one hull build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    events: Vec<HistoryEvent>,
    slots: Vec<EdgeKey>,
}

impl History {
    pub fn events(&self) -> &[HistoryEvent] {
        &self.events
    }

    /// Every edge ever touched, indexed by slot.
    pub fn slots(&self) -> &[EdgeKey] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn adds(&self) -> usize {
        self.events.iter().filter(|e| e.visible).count()
    }

    pub fn retractions(&self) -> usize {
        self.events.iter().filter(|e| !e.visible).count()
    }
}

/// Folds raw [`HullStep`]s into a [`History`].
///
/// Each edge gets a slot on first touch. A step that would set an edge to the
/// visibility it already has is dropped, so every recorded event flips its
/// edge and can be undone by flipping it back.
#[derive(Debug, Default)]
pub struct HistoryRecorder {
    slot_of: AHashMap<EdgeKey, usize>,
    slots: Vec<EdgeKey>,
    visible: Vec<bool>,
    events: Vec<HistoryEvent>,
    dropped: usize,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: &[HullStep]) -> History {
        let mut rec = HistoryRecorder::new();
        for step in steps {
            rec.record(*step);
        }
        rec.finish()
    }

    /// Returns `true` when the step changed visibility and was kept.
    pub fn record(&mut self, step: HullStep) -> bool {
        let edge = step.edge();
        let slot = match self.slot_of.get(&edge) {
            Some(&s) => s,
            None => {
                let s = self.slots.len();
                self.slot_of.insert(edge, s);
                self.slots.push(edge);
                self.visible.push(false);
                s
            }
        };

        let visible = step.visible();
        if self.visible[slot] == visible {
            self.dropped += 1;
            return false;
        }
        self.visible[slot] = visible;
        self.events.push(HistoryEvent {
            step: self.events.len(),
            slot,
            edge,
            visible,
        });
        true
    }

    pub fn finish(self) -> History {
        trace!(
            events = self.events.len(),
            slots = self.slots.len(),
            dropped = self.dropped,
            "hull history recorded"
        );
        History {
            events: self.events,
            slots: self.slots,
        }
    }
}

/// Forward/backward navigation over a frozen [`History`].
///
/// The cursor counts applied events; [`step_index`](Self::step_index) reports
/// it as `-1` (nothing applied, only the pivot shown) up to
/// `step_count() - 1` (full hull). Moving past either end is a no-op.
#[derive(Clone, Debug)]
pub struct HistoryPlayer {
    history: History,
    slot_of: AHashMap<EdgeKey, usize>,
    visible: Vec<bool>,
    cursor: usize,
}

impl HistoryPlayer {
    pub fn new(history: History) -> Self {
        let slot_of = history
            .slots
            .iter()
            .enumerate()
            .map(|(i, e)| (*e, i))
            .collect();
        let visible = vec![false; history.slots.len()];
        HistoryPlayer {
            history,
            slot_of,
            visible,
            cursor: 0,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn sequence(&self) -> &[HistoryEvent] {
        self.history.events()
    }

    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    pub fn step_index(&self) -> isize {
        self.cursor as isize - 1
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.history.len()
    }

    /// Applies the next event. Returns `false` at the last step.
    pub fn next(&mut self) -> bool {
        let Some(ev) = self.history.events.get(self.cursor) else {
            return false;
        };
        self.visible[ev.slot] = ev.visible;
        self.cursor += 1;
        true
    }

    /// Undoes the current event. Returns `false` at step `-1`.
    pub fn prev(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let ev = self.history.events[self.cursor];
        self.visible[ev.slot] = !ev.visible;
        true
    }

    /// Moves to `step`, clamped to `[-1, step_count() - 1]`.
    pub fn seek(&mut self, step: isize) {
        let target = (step + 1).clamp(0, self.history.len() as isize) as usize;
        while self.cursor < target {
            self.next();
        }
        while self.cursor > target {
            self.prev();
        }
    }

    /// Jumps to the fully built hull.
    pub fn reset(&mut self) {
        self.seek(self.history.len() as isize - 1);
    }

    /// Rewinds to step `-1`.
    pub fn rewind(&mut self) {
        self.seek(-1);
    }

    pub fn is_visible(&self, edge: EdgeKey) -> bool {
        self.slot_of
            .get(&edge)
            .map(|&s| self.visible[s])
            .unwrap_or(false)
    }

    /// Currently shown edges, in slot order.
    pub fn visible_edges(&self) -> Vec<EdgeKey> {
        self.history
            .slots
            .iter()
            .zip(&self.visible)
            .filter_map(|(e, v)| v.then_some(*e))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::PointKey;

    fn e(a: u64, b: u64) -> EdgeKey {
        EdgeKey::new(PointKey(a), PointKey(b))
    }

    #[test]
    fn redundant_steps_are_coalesced() {
        let steps = [
            HullStep::Add(e(0, 1)),
            HullStep::Add(e(1, 0)),
            HullStep::Retire(e(0, 1)),
            HullStep::Retire(e(0, 1)),
            HullStep::Add(e(0, 1)),
        ];
        let h = HistoryRecorder::from_steps(&steps);
        assert_eq!(h.len(), 3);
        assert_eq!(h.slots().len(), 1);
        assert!(h.events().iter().all(|ev| ev.slot == 0));
        assert_eq!(h.adds(), 2);
        assert_eq!(h.retractions(), 1);
    }

    #[test]
    fn retire_of_unseen_edge_is_dropped() {
        let h = HistoryRecorder::from_steps(&[HullStep::Retire(e(2, 3))]);
        assert!(h.is_empty());
        assert_eq!(h.slots(), &[e(2, 3)]);
    }

    #[test]
    fn player_bounds_are_noops() {
        let h = HistoryRecorder::from_steps(&[HullStep::Add(e(0, 1)), HullStep::Add(e(1, 2))]);
        let mut player = HistoryPlayer::new(h);
        assert_eq!(player.step_index(), -1);
        assert!(!player.prev());
        assert!(player.next());
        assert!(player.next());
        assert!(!player.next());
        assert_eq!(player.step_index(), 1);
        assert!(player.is_at_end());
    }

    #[test]
    fn seek_and_reset() {
        let h = HistoryRecorder::from_steps(&[
            HullStep::Add(e(0, 1)),
            HullStep::Add(e(1, 2)),
            HullStep::Retire(e(1, 2)),
            HullStep::Add(e(0, 2)),
        ]);
        let mut player = HistoryPlayer::new(h);
        player.seek(1);
        assert_eq!(player.visible_edges(), vec![e(0, 1), e(1, 2)]);
        player.reset();
        assert_eq!(player.visible_edges(), vec![e(0, 1), e(0, 2)]);
        assert!(!player.is_visible(e(1, 2)));
        player.rewind();
        assert!(player.visible_edges().is_empty());
        player.seek(100);
        assert_eq!(player.step_index(), 3);
    }
}
