use super::constants::{MAX_PHASE, MIN_PHASE};

/// How far the oscillator moves through one cycle per output sample.
///
/// A zero `sample_rate` is not guarded; the increment becomes infinite or NaN.
#[inline]
pub fn phase_increment(frequency: f32, sample_rate: f32) -> f32 {
    frequency / sample_rate
}

/// Advances `initial_phase` by `phase_increment` and wraps the result into [0, 1).
#[inline]
pub fn calculate_updated_phase(initial_phase: f32, phase_increment: f32) -> f32 {
    wrap_phase(initial_phase + phase_increment)
}

/// Wraps any finite phase into [0, 1). NaN and infinities propagate as NaN.
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(MAX_PHASE);

    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if wrapped >= MAX_PHASE {
        MIN_PHASE
    } else {
        wrapped
    }
}

/// Reflects `value` back and forth inside [0, max].
#[inline]
pub fn ping_pong(value: f32, max: f32) -> f32 {
    let span = 2.0 * max;
    let modulated = value.rem_euclid(span);

    if modulated > max {
        span - modulated
    } else {
        modulated
    }
}
