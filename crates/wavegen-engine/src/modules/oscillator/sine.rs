use super::constants::RADS_PER_CYCLE;
use super::phase::{calculate_updated_phase, phase_increment};
use wavegen_types::sample_state::SampleState;

/// Generates one sine sample at `initial_phase` and returns it with the advanced phase.
///
/// Amplitude scales the output linearly.
pub fn generate_sine_sample(
    frequency: f32,
    amplitude: f32,
    initial_phase: f32,
    sample_rate: f32,
) -> SampleState {
    let phase_increment = phase_increment(frequency, sample_rate);
    let sample = amplitude * (initial_phase * RADS_PER_CYCLE).sin();

    SampleState::new(sample, calculate_updated_phase(initial_phase, phase_increment))
}
