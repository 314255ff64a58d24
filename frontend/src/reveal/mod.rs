//! One-shot "reveal once scrolled into view" engine.
//!
//! A [`TrackedRegion`](region::TrackedRegion) latches from `Unseen` to
//! `Revealed` the first time its visible fraction meets the configured
//! threshold. The [`RevealScheduler`](scheduler::RevealScheduler) defers only
//! the presentation of that latch. [`VisibilityTracker`] ties both to a
//! host-provided [`VisibilityNotifier`] and owns every resource it acquires.

pub mod notifier;
pub mod region;
pub mod scheduler;
pub mod tracker;

pub use notifier::{Timers, VisibilityNotifier};
pub use tracker::VisibilityTracker;
