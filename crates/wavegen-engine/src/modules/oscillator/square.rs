use super::constants::RADS_PER_CYCLE;
use super::phase::{calculate_updated_phase, phase_increment};
use wavegen_types::sample_state::SampleState;

/// Generates one square sample from the sign of the sine at `initial_phase`.
///
/// Zero crossings (phase 0 and 0.5) fall on the low side.
pub fn generate_square_sample(
    frequency: f32,
    amplitude: f32,
    initial_phase: f32,
    sample_rate: f32,
    volume_modifier: f32,
) -> SampleState {
    let phase_increment = phase_increment(frequency, sample_rate);
    let level = amplitude * volume_modifier;

    let sample = if (initial_phase * RADS_PER_CYCLE).sin() > 0.0 {
        level
    } else {
        -level
    };

    SampleState::new(sample, calculate_updated_phase(initial_phase, phase_increment))
}
