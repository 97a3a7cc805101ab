pub struct Defaults {}

impl Defaults {
    // Output Defaults
    pub const SAMPLE_RATE: u32 = 44100;

    // Oscillator Defaults
    pub const FREQUENCY: f32 = 261.625;
    pub const AMPLITUDE: f32 = 1.0;
    pub const VOLUME_MODIFIER: f32 = 1.0;
    pub const DUTY_CYCLE: f32 = 0.5;
    pub const PHASE: f32 = 0.0;
}
