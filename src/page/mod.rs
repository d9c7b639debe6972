//! Page surgery: locating and mutating the embedded array literals and
//! statistics counters.
//!
//! The page is treated as a text blob. [`locator`] finds a
//! `const <name> = [ ... ];` span with a non-greedy regex, [`mutator`]
//! appends or removes single-level brace-block entries in the located body,
//! and [`counter`] rewrites the digits of a display counter in place.
//! Nothing here touches the filesystem; callers hand the whole document in
//! and get a whole document back.

pub mod counter;
pub mod error;
pub mod locator;
pub mod mutator;

pub use counter::{CounterAdjustment, CounterPattern, TEMPLATE_COUNTER, TOOL_COUNTER};
pub use error::{PatchError, PatchResult};
pub use locator::{locate, ArrayRegion};
