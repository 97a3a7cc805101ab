mod constants;
mod phase;
mod pulse;
mod sawtooth;
mod sine;
mod square;
mod triangle;

pub use self::pulse::generate_pulse_sample;
pub use self::sawtooth::generate_sawtooth_sample;
pub use self::sine::generate_sine_sample;
pub use self::square::generate_square_sample;
pub use self::triangle::generate_triangle_sample;

use self::phase::wrap_phase;
use crate::settings::{OscillatorSettings, SettingsError};
use wavegen_types::sample_state::SampleState;
use wavegen_types::wave_shape::WaveShape;

/// Generates one sample of `settings.wave_shape` at `phase`. The settings' own
/// start phase is ignored.
pub fn generate_sample(settings: &OscillatorSettings, phase: f32) -> SampleState {
    let sample_rate = settings.sample_rate as f32;

    match settings.wave_shape {
        WaveShape::Sine => {
            generate_sine_sample(settings.frequency, settings.amplitude, phase, sample_rate)
        }
        WaveShape::Pulse => generate_pulse_sample(
            settings.frequency,
            settings.amplitude,
            phase,
            sample_rate,
            settings.volume_modifier,
            settings.duty_cycle,
        ),
        WaveShape::Square => generate_square_sample(
            settings.frequency,
            settings.amplitude,
            phase,
            sample_rate,
            settings.volume_modifier,
        ),
        WaveShape::Sawtooth => generate_sawtooth_sample(
            settings.frequency,
            settings.amplitude,
            phase,
            sample_rate,
            settings.volume_modifier,
        ),
        WaveShape::Triangle => {
            generate_triangle_sample(settings.frequency, settings.amplitude, phase, sample_rate)
        }
    }
}

/// A single oscillator voice. Owns the running phase and feeds each returned
/// phase back into the next generator call.
#[derive(Debug, Clone)]
pub struct Oscillator {
    settings: OscillatorSettings,
    phase: f32,
}

impl Oscillator {
    pub fn new(settings: OscillatorSettings) -> Result<Self, SettingsError> {
        settings.validate().inspect_err(|error| {
            log::warn!(target: "wavegen::oscillator", "Rejected oscillator settings: {error}");
        })?;

        log::debug!(
            target: "wavegen::oscillator",
            shape:? = settings.wave_shape,
            frequency = settings.frequency,
            sample_rate = settings.sample_rate;
            "Constructing oscillator"
        );

        Ok(Self {
            settings,
            phase: settings.phase,
        })
    }

    pub fn generate(&mut self) -> f32 {
        self.next_state().sample
    }

    pub fn next_state(&mut self) -> SampleState {
        let state = generate_sample(&self.settings, self.phase);
        self.phase = state.phase;
        state
    }

    pub fn set_wave_shape(&mut self, wave_shape: WaveShape) {
        if wave_shape == self.settings.wave_shape {
            return;
        }

        log::debug!(target: "wavegen::oscillator", shape:? = wave_shape; "Setting oscillator shape");
        self.settings.wave_shape = wave_shape;
    }

    pub fn set_frequency(&mut self, frequency: f32) -> Result<(), SettingsError> {
        OscillatorSettings::validate_frequency(frequency)?;
        self.settings.frequency = frequency;
        Ok(())
    }

    pub fn set_amplitude(&mut self, amplitude: f32) -> Result<(), SettingsError> {
        OscillatorSettings::validate_amplitude(amplitude)?;
        self.settings.amplitude = amplitude;
        Ok(())
    }

    pub fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<(), SettingsError> {
        OscillatorSettings::validate_duty_cycle(duty_cycle)?;
        self.settings.duty_cycle = duty_cycle;
        Ok(())
    }

    pub fn set_phase(&mut self, phase: f32) -> Result<(), SettingsError> {
        if !phase.is_finite() {
            return Err(SettingsError::InvalidPhase(phase));
        }
        self.phase = wrap_phase(phase);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.phase = self.settings.phase;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn wave_shape(&self) -> WaveShape {
        self.settings.wave_shape
    }

    pub fn settings(&self) -> &OscillatorSettings {
        &self.settings
    }
}
