/// One generated sample together with the phase to pass into the next call.
///
/// The layout is `#[repr(C)]` so the pair can be handed to a binding layer as
/// two consecutive `f32` values.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SampleState {
    /// Output amplitude for this call
    pub sample: f32,
    /// Next phase, normalized into [0, 1)
    pub phase: f32,
}

impl SampleState {
    pub const fn new(sample: f32, phase: f32) -> Self {
        Self { sample, phase }
    }
}
