use serde::{Deserialize, Serialize};
use thiserror::Error;
use wavegen_types::defaults::Defaults;
use wavegen_types::math::{is_normalized_phase, is_unit_interval};
use wavegen_types::wave_shape::WaveShape;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Sample rate must be greater than zero, got {0}")]
    InvalidSampleRate(u32),

    #[error("Frequency must be finite and not negative, got {0}")]
    InvalidFrequency(f32),

    #[error("Amplitude must be finite, got {0}")]
    InvalidAmplitude(f32),

    #[error("Volume modifier must be finite, got {0}")]
    InvalidVolumeModifier(f32),

    #[error("Duty cycle must be between 0 and 1, got {0}")]
    InvalidDutyCycle(f32),

    #[error("Phase must be in [0, 1), got {0}")]
    InvalidPhase(f32),

    #[error("Could not parse oscillator settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything an [`Oscillator`](crate::Oscillator) needs to produce samples.
///
/// Missing fields take their value from [`Defaults`] when deserialized, so a
/// settings document only has to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorSettings {
    pub wave_shape: WaveShape,
    pub frequency: f32,
    pub amplitude: f32,
    pub sample_rate: u32,
    pub volume_modifier: f32,
    pub duty_cycle: f32,
    /// Start phase, also used by `Oscillator::reset`
    pub phase: f32,
}

impl Default for OscillatorSettings {
    fn default() -> Self {
        Self {
            wave_shape: WaveShape::default(),
            frequency: Defaults::FREQUENCY,
            amplitude: Defaults::AMPLITUDE,
            sample_rate: Defaults::SAMPLE_RATE,
            volume_modifier: Defaults::VOLUME_MODIFIER,
            duty_cycle: Defaults::DUTY_CYCLE,
            phase: Defaults::PHASE,
        }
    }
}

impl OscillatorSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        Self::validate_sample_rate(self.sample_rate)?;
        Self::validate_frequency(self.frequency)?;
        Self::validate_amplitude(self.amplitude)?;
        Self::validate_volume_modifier(self.volume_modifier)?;
        Self::validate_duty_cycle(self.duty_cycle)?;
        Self::validate_phase(self.phase)
    }

    pub fn validate_sample_rate(sample_rate: u32) -> Result<(), SettingsError> {
        if sample_rate == 0 {
            return Err(SettingsError::InvalidSampleRate(sample_rate));
        }
        Ok(())
    }

    pub fn validate_frequency(frequency: f32) -> Result<(), SettingsError> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(SettingsError::InvalidFrequency(frequency));
        }
        Ok(())
    }

    pub fn validate_amplitude(amplitude: f32) -> Result<(), SettingsError> {
        if !amplitude.is_finite() {
            return Err(SettingsError::InvalidAmplitude(amplitude));
        }
        Ok(())
    }

    pub fn validate_volume_modifier(volume_modifier: f32) -> Result<(), SettingsError> {
        if !volume_modifier.is_finite() {
            return Err(SettingsError::InvalidVolumeModifier(volume_modifier));
        }
        Ok(())
    }

    pub fn validate_duty_cycle(duty_cycle: f32) -> Result<(), SettingsError> {
        if !is_unit_interval(duty_cycle) {
            return Err(SettingsError::InvalidDutyCycle(duty_cycle));
        }
        Ok(())
    }

    pub fn validate_phase(phase: f32) -> Result<(), SettingsError> {
        if !is_normalized_phase(phase) {
            return Err(SettingsError::InvalidPhase(phase));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(OscillatorSettings::default().validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let settings =
            OscillatorSettings::from_json(r#"{ "wave_shape": "pulse", "duty_cycle": 0.25 }"#)
                .unwrap();
        assert_eq!(settings.wave_shape, WaveShape::Pulse);
        assert_eq!(settings.duty_cycle, 0.25);
        assert_eq!(settings.frequency, Defaults::FREQUENCY);
        assert_eq!(settings.sample_rate, Defaults::SAMPLE_RATE);
    }

    #[test]
    fn to_json_output_reads_back_to_the_same_settings() {
        let settings = OscillatorSettings {
            wave_shape: WaveShape::Sawtooth,
            frequency: 110.0,
            amplitude: 0.75,
            sample_rate: 96000,
            volume_modifier: 0.6,
            duty_cycle: 0.1,
            phase: 0.5,
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"sawtooth\""));
        assert_eq!(OscillatorSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        assert!(matches!(
            OscillatorSettings::from_json("{ \"frequency\": "),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            OscillatorSettings::from_json(r#"{ "wave_shape": "noise" }"#),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn from_json_rejects_out_of_range_values() {
        assert!(matches!(
            OscillatorSettings::from_json(r#"{ "sample_rate": 0 }"#),
            Err(SettingsError::InvalidSampleRate(0))
        ));
        assert!(matches!(
            OscillatorSettings::from_json(r#"{ "phase": 1.0 }"#),
            Err(SettingsError::InvalidPhase(_))
        ));
    }

    #[test]
    fn validate_rejects_each_invalid_field() {
        let defaults = OscillatorSettings::default();
        let cases = [
            OscillatorSettings {
                frequency: -440.0,
                ..defaults
            },
            OscillatorSettings {
                frequency: f32::INFINITY,
                ..defaults
            },
            OscillatorSettings {
                amplitude: f32::NAN,
                ..defaults
            },
            OscillatorSettings {
                volume_modifier: f32::NEG_INFINITY,
                ..defaults
            },
            OscillatorSettings {
                duty_cycle: -0.1,
                ..defaults
            },
            OscillatorSettings {
                phase: f32::NAN,
                ..defaults
            },
        ];
        for settings in cases {
            assert!(
                settings.validate().is_err(),
                "Expected an error for: {settings:?}"
            );
        }
    }

    #[test]
    fn validate_accepts_the_ends_of_the_duty_cycle_range() {
        for duty_cycle in [0.0, 1.0] {
            let settings = OscillatorSettings {
                duty_cycle,
                ..Default::default()
            };
            assert!(settings.validate().is_ok());
        }
    }

    #[test]
    fn errors_describe_the_rejected_value() {
        let error = OscillatorSettings::validate_duty_cycle(2.0).unwrap_err();
        assert_eq!(error.to_string(), "Duty cycle must be between 0 and 1, got 2");
    }
}
