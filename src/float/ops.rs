use super::{JassFloat, EXPONENT_BIAS, MANTISSA_BITS, SIGN_MASK};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Exponent difference limit, compared with the exponents still in field position.
// Anything past it returns the larger operand untouched.
const ALIGN_GUARD: i32 = 0x0B7F_FFFF;

// Bit holding the leading one of a doubled significand.
const DOUBLED_LEAD_BIT: i32 = MANTISSA_BITS as i32 + 1;

impl Add for JassFloat {
    type Output = JassFloat;

    fn add(self, rhs: JassFloat) -> Self::Output {
        let exp1 = self.exponent();
        let exp2 = rhs.exponent();

        // Zero and subnormal operands flush to zero
        if exp1 == 0 {
            return rhs;
        }
        if exp2 == 0 {
            return self;
        }

        let delta = (exp1 - exp2) << MANTISSA_BITS;
        if delta > ALIGN_GUARD {
            return self;
        }
        if delta < -ALIGN_GUARD {
            return rhs;
        }

        // Align on the larger exponent. Arithmetic shift, bits fall off.
        let (frac1, frac2, base_exp) = if exp1 >= exp2 {
            let shift = exp1 - exp2;
            (self.signed_significand(), rhs.signed_significand() >> shift, exp1)
        } else {
            let shift = exp2 - exp1;
            (self.signed_significand() >> shift, rhs.signed_significand(), exp2)
        };

        let sum = frac1 + frac2;
        if sum == 0 {
            return JassFloat::ZERO;
        }

        let sign = if sum < 0 { SIGN_MASK } else { 0 };
        let magnitude = sum.unsigned_abs();

        // Renormalize so the leading one sits on the implicit bit
        let lead = 31 - magnitude.leading_zeros() as i32;
        let result_exp = base_exp + lead - DOUBLED_LEAD_BIT;
        let result_frac = if lead > MANTISSA_BITS as i32 {
            magnitude >> (lead - MANTISSA_BITS as i32)
        } else {
            magnitude << (MANTISSA_BITS as i32 - lead)
        };

        if result_exp <= 0 {
            return JassFloat::ZERO;
        }

        JassFloat::compose(sign, result_exp, result_frac)
    }
}

impl Sub for JassFloat {
    type Output = JassFloat;

    fn sub(self, rhs: JassFloat) -> Self::Output {
        self + (-rhs)
    }
}

impl Neg for JassFloat {
    type Output = JassFloat;

    fn neg(self) -> Self::Output {
        JassFloat(self.0 ^ SIGN_MASK)
    }
}

impl Mul for JassFloat {
    type Output = JassFloat;

    fn mul(self, rhs: JassFloat) -> Self::Output {
        // Sign is dropped along with flushed operands
        if self.is_flushed() || rhs.is_flushed() {
            return JassFloat::ZERO;
        }

        let sign = (self.0 ^ rhs.0) & SIGN_MASK;
        let product = self.significand() as u64 * rhs.significand() as u64;

        // 24x24 -> 48 bits; the top bit decides the normalization shift
        let (result_frac, carry) = if product & (1 << 47) != 0 {
            ((product >> 24) as u32, 1)
        } else {
            ((product >> 23) as u32, 0)
        };

        let result_exp = self.exponent() + rhs.exponent() - EXPONENT_BIAS + carry;
        if result_exp < 1 {
            return JassFloat::ZERO;
        }

        JassFloat::compose(sign, result_exp, result_frac)
    }
}

impl AddAssign for JassFloat {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for JassFloat {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for JassFloat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn f(bits: u32) -> JassFloat {
        JassFloat::from_bits(bits)
    }

    #[test]
    fn test_basic_arithmetic() {
        // 1.0, 2.0, 0.5, -1.0
        let one = JassFloat::ONE;
        let two = f(0x4000_0000);
        let half = f(0x3F00_0000);
        let neg_one = JassFloat::NEG_ONE;
        let zero = JassFloat::ZERO;

        // Addition
        assert_eq!(one + one, two);
        assert_eq!(one + neg_one, zero);
        assert_eq!(zero + one, one);

        // Subtraction
        assert_eq!(two - one, one);
        assert_eq!(one - two, neg_one);
        assert_eq!(one - one, zero);

        // Multiplication
        assert_eq!(one * one, one);
        assert_eq!(two * half, one);
        assert_eq!(f(0xC040_0000) * f(0x4020_0000), f(0xC0F0_0000)); // -3 * 2.5
    }

    #[test]
    fn test_add_truncates() {
        // 0.1 + 0.2 lands one ulp below the rounded IEEE result
        assert_eq!((f(0x3DCC_CCCD) + f(0x3E4C_CCCD)).to_bits(), 0x3E99_9999);
        // 1.0 - 1.75
        assert_eq!((JassFloat::ONE - f(0x3FE0_0000)).to_bits(), 0xBF40_0000);
    }

    #[test]
    fn test_add_alignment_guard() {
        // Exponent gap of 23 already returns the larger operand
        assert_eq!(JassFloat::ONE + f(0x3400_0000), JassFloat::ONE);
        assert_eq!(f(0x3400_0000) + JassFloat::ONE, JassFloat::ONE);
        // Gap of 22 still contributes
        assert_eq!((JassFloat::ONE + f(0x3480_0000)).to_bits(), 0x3F80_0002);
    }

    #[test]
    fn test_add_flushes_subnormals() {
        let tiny = f(0x0000_0001);
        let neg_tiny = f(0x8040_0000);
        let x = f(0x4049_0FDB);
        assert_eq!(x + tiny, x);
        assert_eq!(tiny + x, x);
        assert_eq!(x - neg_tiny, x);
        // Returned unchanged, including negative zero
        assert_eq!(f(SIGN_MASK) + f(SIGN_MASK), f(SIGN_MASK));
    }

    #[test]
    fn test_add_underflow_flushes() {
        let min_normal = f(0x0080_0000);
        let just_above = f(0x0080_0001);
        assert_eq!(just_above - min_normal, JassFloat::ZERO);
    }

    #[test]
    fn test_mul_special_cases() {
        let neg_zero = f(SIGN_MASK);
        let neg_sub = f(0x8000_1234);
        let neg_two = f(0xC000_0000);

        assert_eq!(neg_zero * neg_two, JassFloat::ZERO);
        assert_eq!(neg_two * neg_sub, JassFloat::ZERO);
        assert_eq!(JassFloat::ZERO * JassFloat::ONE, JassFloat::ZERO);

        // 0.1 * 0.1 truncates
        assert_eq!((f(0x3DCC_CCCD) * f(0x3DCC_CCCD)).to_bits(), 0x3C23_D70A);
        // 1e-20 * 1e-20 is below the smallest normal
        assert_eq!(f(0x1E3C_E508) * f(0x1E3C_E508), JassFloat::ZERO);
    }

    #[test]
    fn test_neg_and_sub_identities() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..1000 {
            // Normal, finite patterns only
            let exp = rng.gen_range(1u32..=254);
            let bits = (rng.gen::<u32>() & (SIGN_MASK | 0x007F_FFFF)) | (exp << 23);
            let x = f(bits);

            assert_eq!(-(-x), x);
            assert_eq!(x + JassFloat::ZERO, x);
            assert_eq!(x - JassFloat::ZERO, x);
            assert_eq!(x - x, JassFloat::ZERO);
            assert_eq!(x + (-x), JassFloat::ZERO);
            assert_eq!(x * JassFloat::ONE, x);
        }
    }

    #[test]
    fn test_exact_round_trip() {
        // Operands whose sum needs no truncation come back unchanged
        let a = f(0x3FC0_0000); // 1.5
        let b = f(0x3E80_0000); // 0.25
        assert_eq!((a + b) - b, a);
        assert_eq!((a - b) + b, a);
    }

    #[test]
    fn test_compound_assignments() {
        let mut val = JassFloat::ONE;
        let two = f(0x4000_0000);

        val += JassFloat::ONE;
        assert_eq!(val, two);

        val -= JassFloat::ONE;
        assert_eq!(val, JassFloat::ONE);

        val *= two;
        assert_eq!(val, two);
    }
}
