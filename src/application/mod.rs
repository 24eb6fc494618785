//! Application layer: the run loop that replays an accounts archive.
//!
//! `AccountLoader` walks the archive sequentially and hands each record to a
//! `RecordSink`, deciding which failures are recovered and which end the run.

pub mod loader;
