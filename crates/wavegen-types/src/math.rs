const ALTERNATE_EPSILON: f32 = 1e-6;
const UNIT_MIN: f32 = 0.0;
const UNIT_MAX: f32 = 1.0;

#[inline]
pub fn f32s_are_equal(value_1: f32, value_2: f32) -> bool {
    if value_1.is_nan() && value_2.is_nan() {
        return true;
    }
    if value_1.is_infinite() && value_2.is_infinite() {
        return value_1.signum() == value_2.signum();
    }

    (value_1 - value_2).abs() <= ALTERNATE_EPSILON
}

// True when the phase lies in the half-open cycle range [0, 1)
#[inline]
pub fn is_normalized_phase(phase: f32) -> bool {
    (UNIT_MIN..UNIT_MAX).contains(&phase)
}

// True when the value lies in the closed range [0, 1]
#[inline]
pub fn is_unit_interval(value: f32) -> bool {
    (UNIT_MIN..=UNIT_MAX).contains(&value)
}
