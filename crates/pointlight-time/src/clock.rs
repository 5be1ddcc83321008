//! Clock implementations for pointlight
//!
//! - [`PhaseClock`]: elapsed time → normalized action phase
//! - [`FrameClock`]: frame index ↔ elapsed time, owned by the display loop

use pointlight_core::{ActionSpec, DurationSemantics};

use crate::TimingConfig;

/// Normalized progress through an action
/// INVARIANT: cyclic phase is in [0, 1), transitional phase in [0, 1], never NaN
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Phase(f64);

impl Phase {
    pub const START: Phase = Phase(0.0);
    pub const END: Phase = Phase(1.0);

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// A transitional action has reached (and holds) its final pose
    #[inline]
    pub fn is_complete(self) -> bool {
        self.0 == 1.0
    }
}

/// Phase clock - converts elapsed time to phase per duration semantics
#[derive(Debug, Clone, Default)]
pub struct PhaseClock {
    timing: TimingConfig,
}

impl PhaseClock {
    pub fn new(timing: TimingConfig) -> Self {
        PhaseClock { timing }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Base period (cyclic) or duration (transitional) of an action
    pub fn period(&self, spec: &ActionSpec) -> f64 {
        self.timing.seconds(spec.kind)
    }

    /// Period or duration when the action runs `tempo` times faster than
    /// its base timing; infinite unless the tempo is positive and finite
    pub fn effective_period(&self, spec: &ActionSpec, tempo: f64) -> f64 {
        if tempo.is_finite() && tempo > 0.0 {
            self.period(spec) / tempo
        } else {
            f64::INFINITY
        }
    }

    /// Resolve the phase of an action at time `t` (seconds)
    pub fn resolve(&self, spec: &ActionSpec, t: f64) -> Phase {
        resolve_with_period(spec.semantics, t, self.period(spec))
    }

    /// Resolve against the tempo-scaled period. Equivalent to resolving
    /// `t · tempo` at base timing, but exact at `t == effective_period`.
    /// A tempo that is not positive holds the first pose.
    pub fn resolve_at_tempo(&self, spec: &ActionSpec, t: f64, tempo: f64) -> Phase {
        let period = self.effective_period(spec, tempo);
        if !(period.is_finite() && period > 0.0) {
            return Phase::START;
        }
        resolve_with_period(spec.semantics, t, period)
    }
}

fn resolve_with_period(semantics: DurationSemantics, t: f64, period: f64) -> Phase {
    match semantics {
        DurationSemantics::Cyclic => Phase(cyclic_phase(t, period)),
        DurationSemantics::Transitional => Phase(transitional_phase(t, period)),
    }
}

/// `(t / period) mod 1`, kept in [0, 1)
fn cyclic_phase(t: f64, period: f64) -> f64 {
    if !t.is_finite() {
        return 0.0;
    }
    let phase = t.rem_euclid(period) / period;
    // rem_euclid of a tiny negative t can round up to exactly `period`
    if phase >= 1.0 || phase.is_nan() {
        0.0
    } else {
        phase
    }
}

/// `clamp(t / duration, 0, 1)`
fn transitional_phase(t: f64, duration: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    let phase = t / duration;
    if phase.is_nan() {
        0.0
    } else {
        phase.clamp(0.0, 1.0)
    }
}

/// Frame clock - maps a display loop's frame counter to elapsed seconds
/// The only "advance time" tick the engine's callers need
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Frames per second
    fps: f64,
    /// Next frame to be produced
    index: u64,
}

impl FrameClock {
    /// Create a clock at frame 0. Non-positive or non-finite rates fall back
    /// to 60 fps.
    pub fn new(fps: f64) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 60.0 };
        FrameClock { fps, index: 0 }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Index of the next frame
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Elapsed time of an arbitrary frame
    pub fn time_of(&self, index: u64) -> f64 {
        index as f64 / self.fps
    }

    /// Elapsed time of the next frame, without advancing
    pub fn now(&self) -> f64 {
        self.time_of(self.index)
    }

    /// Return the current frame's (index, time) and advance by one frame
    pub fn tick(&mut self) -> (u64, f64) {
        let current = (self.index, self.now());
        self.index = self.index.saturating_add(1);
        current
    }

    /// Jump to a frame (scrubbing); any index is allowed
    pub fn seek(&mut self, index: u64) {
        self.index = index;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60.0)
    }
}
