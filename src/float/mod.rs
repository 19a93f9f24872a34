//! Software 32-bit float matching the game engine's arithmetic unit.
//!
//! Values are raw IEEE-754 single precision bit patterns, but the arithmetic
//! deviates from IEEE-754 the same way the engine does:
//! - operands with a zero exponent field (zero, subnormals) are flushed to zero,
//! - shifted-out bits are truncated, never rounded,
//! - there is no NaN or infinity handling.
//!
//! Host float arithmetic is never used. `f32` only appears at the conversion
//! boundary (see `cast.rs`).
mod cast;
mod ops;

/// A newtype wrapper over the raw bits of an engine 32-bit float
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct JassFloat(pub(crate) u32);

pub(crate) const SIGN_MASK: u32 = 0x8000_0000;
pub(crate) const EXPONENT_MASK: u32 = 0x7F80_0000;
pub(crate) const MANTISSA_MASK: u32 = 0x007F_FFFF;
pub(crate) const IMPLICIT_BIT: u32 = 0x0080_0000;
pub(crate) const MANTISSA_BITS: u32 = 23;
pub(crate) const EXPONENT_BIAS: i32 = 127;

impl JassFloat {
    /// Positive zero
    pub const ZERO: Self = Self(0);
    /// 1.0
    pub const ONE: Self = Self(0x3F80_0000);
    /// -1.0
    pub const NEG_ONE: Self = Self(0xBF80_0000);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Biased exponent field (0..=255)
    pub const fn exponent(self) -> i32 {
        ((self.0 & EXPONENT_MASK) >> MANTISSA_BITS) as i32
    }

    /// Stored 23-bit mantissa, without the implicit leading one
    pub const fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    /// True when the engine treats this value as zero.
    pub const fn is_flushed(self) -> bool {
        self.0 & EXPONENT_MASK == 0
    }

    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_MASK)
    }

    /// 24-bit significand with the implicit leading one restored.
    pub(crate) const fn significand(self) -> u32 {
        self.mantissa() | IMPLICIT_BIT
    }

    /// Doubled significand, negated for negative values. Fits in 26 signed bits.
    pub(crate) const fn signed_significand(self) -> i32 {
        let doubled = (self.significand() << 1) as i32;
        if self.is_sign_negative() {
            -doubled
        } else {
            doubled
        }
    }

    /// Packs the fields into a pattern. Only the low 8 bits of `exponent` and the
    /// low 23 bits of `mantissa` are kept.
    pub(crate) const fn compose(sign: u32, exponent: i32, mantissa: u32) -> Self {
        Self(
            (sign & SIGN_MASK)
                | (((exponent as u32) & 0xFF) << MANTISSA_BITS)
                | (mantissa & MANTISSA_MASK),
        )
    }
}
