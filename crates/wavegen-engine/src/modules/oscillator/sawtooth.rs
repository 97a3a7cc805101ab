use super::constants::SAWTOOTH_PHASE_OFFSET;
use super::phase::{calculate_updated_phase, phase_increment, wrap_phase};
use wavegen_types::sample_state::SampleState;

/// Generates one sawtooth sample: a ramp from 0 up to `amplitude * volume_modifier`,
/// offset by half a cycle so it resets at phase 0.5.
pub fn generate_sawtooth_sample(
    frequency: f32,
    amplitude: f32,
    initial_phase: f32,
    sample_rate: f32,
    volume_modifier: f32,
) -> SampleState {
    let phase_increment = phase_increment(frequency, sample_rate);
    let level = amplitude * volume_modifier;

    let sample = wrap_phase(initial_phase + SAWTOOTH_PHASE_OFFSET) * level;

    SampleState::new(sample, calculate_updated_phase(initial_phase, phase_increment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavegen_types::math::f32s_are_equal;

    const SAMPLE_RATE: f32 = 44100.0;

    #[test]
    fn sawtooth_resets_to_zero_at_half_cycle() {
        let state = generate_sawtooth_sample(440.0, 1.0, 0.5, SAMPLE_RATE, 1.0);
        assert!(f32s_are_equal(state.sample, 0.0));
    }

    #[test]
    fn sawtooth_is_halfway_up_the_ramp_at_the_start_of_the_cycle() {
        let state = generate_sawtooth_sample(440.0, 1.0, 0.0, SAMPLE_RATE, 1.0);
        assert!(f32s_are_equal(state.sample, 0.5));
    }

    #[test]
    fn sawtooth_ramps_linearly_across_the_cycle() {
        let phases: [f32; 5] = [0.5, 0.75, 0.0, 0.25, 0.49];
        let expected: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 0.99];
        for (phase, expected) in phases.iter().zip(expected.iter()) {
            let state = generate_sawtooth_sample(440.0, 1.0, *phase, SAMPLE_RATE, 1.0);
            assert!(
                f32s_are_equal(state.sample, *expected),
                "For: {phase:?}, Expected: {expected:?}, got: {:?}",
                state.sample
            );
        }
    }

    #[test]
    fn sawtooth_level_is_amplitude_times_volume_modifier() {
        let state = generate_sawtooth_sample(440.0, 0.5, 0.0, SAMPLE_RATE, 0.5);
        assert!(f32s_are_equal(state.sample, 0.125));
    }
}
