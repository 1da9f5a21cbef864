//! A single committed snapshot.

use crate::core::{CubeState, Move};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one committed cube state.
///
/// The root entry of a timeline has no originating move; every other entry
/// holds the move that produced its state from the previous entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Cube configuration after the move
    pub state: CubeState,
    /// Move that produced this state, `None` for the root
    pub origin: Option<Move>,
    /// When the entry was committed
    pub committed_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub(crate) fn root(state: CubeState) -> Self {
        Self {
            state,
            origin: None,
            committed_at: Utc::now(),
        }
    }

    pub(crate) fn committed(state: CubeState, origin: Move) -> Self {
        Self {
            state,
            origin: Some(origin),
            committed_at: Utc::now(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.origin.is_none()
    }
}
