//! # Introduction
//!
//! algoviz replays classic array algorithms one step at a time. Each
//! algorithm is unrolled up front into an immutable trace of steps; a
//! playback controller then walks that trace forward and backward, and every
//! step is mapped back onto a line of a sample listing in C++, Java, Python
//! or JavaScript.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → Trace → PlaybackController → (Step, highlighted line) → TUI
//! ```
//!
//! 1. [`algorithms`]: one generator per problem, each a pure function from
//!    input to [`step::Trace`]. Bad input becomes a single explanatory step.
//! 2. [`step`]: the step model: logical line, named variables, an
//!    algorithm-specific state snapshot and terminal flags.
//! 3. [`playback`]: play/pause/seek/speed state machine over trace indices,
//!    with a generation-tagged timer so stale ticks are ignored.
//! 4. [`highlight`]: regex rule table mapping logical lines to physical
//!    lines of a listing.
//! 5. [`catalog`]: the built-in listings and default inputs.
//! 6. [`session`]: ties one problem, its input, trace and controller together.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Problems
//!
//! Two Sum, maximum/minimum, kth maximum/minimum, sort 0/1/2, reverse,
//! cyclic rotation by one, union and intersection of sorted arrays, Kadane's
//! maximum subarray and greedy minimum jumps.

pub mod algorithms;
pub mod catalog;
pub mod highlight;
pub mod playback;
pub mod session;
pub mod step;
pub mod ui;
