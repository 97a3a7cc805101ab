pub mod defaults;
pub mod math;
pub mod sample_state;
pub mod wave_shape;
