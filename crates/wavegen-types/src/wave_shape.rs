use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount, EnumIter, FromRepr};

#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumCount,
    EnumIter,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum WaveShape {
    #[default]
    Sine = 0,
    Pulse = 1,
    Square = 2,
    Sawtooth = 3,
    Triangle = 4,
}

impl WaveShape {
    pub fn from_i32(index: i32) -> Option<Self> {
        Self::from_repr(index)
    }
}
