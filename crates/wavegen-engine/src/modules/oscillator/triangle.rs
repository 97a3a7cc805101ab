use super::constants::{TRIANGLE_PHASE_SCALE, TRIANGLE_PING_PONG_MAX};
use super::phase::{calculate_updated_phase, phase_increment, ping_pong};
use wavegen_types::sample_state::SampleState;

/// Generates one triangle sample, rising from 0 at the start of the cycle to
/// `amplitude` at half cycle and falling back to 0.
///
/// Unlike the other non-sine shapes there is no volume modifier.
pub fn generate_triangle_sample(
    frequency: f32,
    amplitude: f32,
    initial_phase: f32,
    sample_rate: f32,
) -> SampleState {
    let phase_increment = phase_increment(frequency, sample_rate);
    let sample = ping_pong(initial_phase * TRIANGLE_PHASE_SCALE, TRIANGLE_PING_PONG_MAX) * amplitude;

    SampleState::new(sample, calculate_updated_phase(initial_phase, phase_increment))
}
