use super::{JassFloat, EXPONENT_BIAS, MANTISSA_BITS, SIGN_MASK};

// Boundary conversions carry the bits over as-is; host rounding happens only when
// a caller builds the f32 in the first place.
impl From<f32> for JassFloat {
    fn from(x: f32) -> Self {
        Self(x.to_bits())
    }
}

impl From<JassFloat> for f32 {
    fn from(x: JassFloat) -> Self {
        f32::from_bits(x.0)
    }
}

/// Signed integer to float, truncating magnitudes wider than 24 bits.
impl From<i32> for JassFloat {
    fn from(n: i32) -> Self {
        if n == 0 {
            return JassFloat::ZERO;
        }

        let sign = (n as u32) & SIGN_MASK;
        let magnitude = n.unsigned_abs();
        let lead = 31 - magnitude.leading_zeros() as i32;

        let frac = if lead > MANTISSA_BITS as i32 {
            magnitude >> (lead - MANTISSA_BITS as i32)
        } else {
            magnitude << (MANTISSA_BITS as i32 - lead)
        };

        JassFloat::compose(sign, EXPONENT_BIAS + lead, frac)
    }
}
