// SHARED CONSTANTS
pub const RADS_PER_CYCLE: f32 = std::f32::consts::TAU;
pub const MIN_PHASE: f32 = 0.0;
pub const MAX_PHASE: f32 = 1.0;

// Oscillator Shape Specific Constants
pub const SAWTOOTH_PHASE_OFFSET: f32 = 0.5;
pub const TRIANGLE_PHASE_SCALE: f32 = 2.0;
pub const TRIANGLE_PING_PONG_MAX: f32 = 1.0;
