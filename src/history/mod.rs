//! Committed move history.
//!
//! The timeline is an append-until-branch log of cube snapshots with a
//! navigable cursor. It is the single owner of every committed
//! `CubeState`.

mod entry;
mod timeline;

pub use entry::HistoryEntry;
pub use timeline::{Timeline, TimelineId};
