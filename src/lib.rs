//! `menagerie` runtime library.
//!
//! A small set of animals (`animal`) each announce their index and sound,
//! either one after another or all at once (`announce`).
//!
//! Concurrent-mode invariants:
//! - every animal is launched on its own thread before the caller blocks
//! - each line is written under one lock, so lines never interleave
//! - the call returns only after every thread has signalled the `latch`

pub mod animal;
pub mod announce;
pub mod error;
pub mod latch;
pub mod zoo;

pub use animal::{new_cat, new_dog, Kind, SharedAnimal};
pub use announce::{announce_concurrently, announce_in_order, AnnounceReport, Mode};
pub use error::AnnounceError;
