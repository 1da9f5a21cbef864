//! Snapshot timeline with a cursor and branch-on-write commits.

use super::entry::HistoryEntry;
use crate::algorithms;
use crate::core::{apply_move, CubeState, Move};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Identity of one timeline lifetime.
///
/// A new id is minted every time the log is replaced (reset, scramble,
/// rewind), so observers can tell a fresh history from a grown one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TimelineId(Uuid);

impl TimelineId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TimelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered log of committed cube snapshots plus a cursor.
///
/// Invariants:
/// - `entries[0]` is the root and has no originating move
/// - `0 <= cursor < len()`
/// - the current cube is always `entries[cursor].state`
///
/// Navigation is snapshot based: [`jump`](Self::jump) exposes a stored
/// state verbatim and never replays moves.
///
/// # Example
///
/// ```rust
/// use cube_trainer::core::{CubeState, Move};
/// use cube_trainer::history::Timeline;
///
/// let r: Move = "R".parse().unwrap();
/// let u: Move = "U".parse().unwrap();
/// let f: Move = "F".parse().unwrap();
///
/// let mut timeline = Timeline::new(CubeState::solved());
/// timeline.commit(r);
/// timeline.commit(u);
/// timeline.jump(0);
/// timeline.commit(f);
///
/// // "U" was discarded when "F" branched off the root.
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline.entries()[1].origin, Some(f));
/// ```
///
/// Timelines serialize for external readers but cannot be deserialized:
/// the only way to obtain one is through operations that keep the
/// invariants.
#[derive(Clone, Debug, Serialize)]
pub struct Timeline {
    id: TimelineId,
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(CubeState::solved())
    }
}

impl Timeline {
    /// Create a timeline holding a single root entry.
    pub fn new(seed: CubeState) -> Self {
        Self {
            id: TimelineId::new(),
            entries: vec![HistoryEntry::root(seed)],
            cursor: 0,
        }
    }

    /// Apply `mv` to the current state and make the result current.
    ///
    /// Entries after the cursor are discarded first, so committing after a
    /// backward jump drops the old redo history.
    pub fn commit(&mut self, mv: Move) -> &CubeState {
        let next = apply_move(self.current(), mv);

        let discarded = self.entries.len() - (self.cursor + 1);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::committed(next, mv));
        self.cursor = self.entries.len() - 1;

        tracing::debug!(
            timeline = %self.id,
            mv = %mv,
            cursor = self.cursor,
            discarded,
            "committed move"
        );

        &self.entries[self.cursor].state
    }

    /// Move the cursor to `index`.
    ///
    /// Out-of-range indices leave the timeline untouched and return
    /// `false`.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            tracing::trace!(
                timeline = %self.id,
                index,
                len = self.entries.len(),
                "ignored out-of-range jump"
            );
            return false;
        }

        self.cursor = index;
        tracing::trace!(timeline = %self.id, cursor = index, "jumped");
        true
    }

    /// Replace the whole log with a single root entry at `seed`.
    pub fn reset(&mut self, seed: CubeState) {
        let previous = self.id;
        *self = Self::new(seed);
        tracing::debug!(previous = %previous, timeline = %self.id, "timeline reset");
    }

    /// Start over from a freshly scrambled state. Same as
    /// [`reset`](Self::reset); the scramble itself is not recorded as
    /// history.
    pub fn scramble(&mut self, seed: CubeState) {
        self.reset(seed);
    }

    /// State at the cursor.
    pub fn current(&self) -> &CubeState {
        &self.entries[self.cursor].state
    }

    /// State of the root entry.
    pub fn root(&self) -> &CubeState {
        &self.entries[0].state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, root included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn id(&self) -> TimelineId {
        self.id
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Moves from the root up to and including the cursor, in order.
    pub fn executed_moves(&self) -> Vec<Move> {
        self.entries[1..=self.cursor]
            .iter()
            .filter_map(|entry| entry.origin)
            .collect()
    }

    /// True when entries exist past the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Moves that carry `entries[from].state` to `entries[to].state`.
    ///
    /// Forward spans replay the recorded moves; backward spans undo them
    /// in reverse order. Same or out-of-range indices give an empty path.
    pub fn navigation_moves(&self, from: usize, to: usize) -> Vec<Move> {
        let len = self.entries.len();
        if from >= len || to >= len || from == to {
            return Vec::new();
        }

        let span = |lo: usize, hi: usize| -> Vec<Move> {
            self.entries[lo + 1..=hi]
                .iter()
                .filter_map(|entry| entry.origin)
                .collect()
        };

        if to > from {
            span(from, to)
        } else {
            algorithms::inverse(&span(to, from))
        }
    }

    /// Time between the root and the last committed entry.
    pub fn duration(&self) -> Option<Duration> {
        if self.entries.len() < 2 {
            return None;
        }
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        last.committed_at
            .signed_duration_since(first.committed_at)
            .to_std()
            .ok()
    }
}
