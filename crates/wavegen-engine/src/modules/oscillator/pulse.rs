use super::phase::{calculate_updated_phase, phase_increment};
use wavegen_types::sample_state::SampleState;

/// Generates one two-level pulse sample.
///
/// The output is high while `initial_phase < duty_cycle` and low for the rest of
/// the cycle, so a duty cycle of 0 is always low and 1 is always high.
pub fn generate_pulse_sample(
    frequency: f32,
    amplitude: f32,
    initial_phase: f32,
    sample_rate: f32,
    volume_modifier: f32,
    duty_cycle: f32,
) -> SampleState {
    let phase_increment = phase_increment(frequency, sample_rate);
    let level = amplitude * volume_modifier;

    let sample = if initial_phase < duty_cycle {
        level
    } else {
        -level
    };

    SampleState::new(sample, calculate_updated_phase(initial_phase, phase_increment))
}
