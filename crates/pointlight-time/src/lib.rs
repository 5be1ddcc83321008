//! Pointlight Time - phase resolution and frame pacing
//!
//! This crate implements:
//! - Phase Clock: elapsed time → phase (cyclic wrap or transitional clamp)
//! - Timing table: base period/duration per action
//! - Frame clock: the display loop's "advance time" tick

pub mod clock;
pub mod timing;

pub use clock::*;
pub use timing::*;
