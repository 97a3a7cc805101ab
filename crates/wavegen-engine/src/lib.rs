pub mod modules;
pub mod settings;

pub use modules::oscillator::{
    Oscillator, generate_pulse_sample, generate_sample, generate_sawtooth_sample,
    generate_sine_sample, generate_square_sample, generate_triangle_sample,
};
pub use settings::{OscillatorSettings, SettingsError};
pub use wavegen_types::defaults::Defaults;
pub use wavegen_types::sample_state::SampleState;
pub use wavegen_types::wave_shape::WaveShape;
