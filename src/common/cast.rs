use num_traits::ToPrimitive;

use super::layout::MAX_LEVEL;

// Rounds any numeric height to the nearest level and clamps it into 0..=7.
// Values that can't be represented as f64 (or NaN) read as level 0.
pub fn to_level<T: ToPrimitive>(v: &T) -> u8 {
    let v = match v.to_f64() {
        Some(v) if !v.is_nan() => v,
        _ => return 0,
    };

    v.round().clamp(0.0, MAX_LEVEL as f64).to_u8().unwrap_or(0)
}
