//! The engine's random number generator.
//!
//! Mirrors the three script natives: `SetRandomSeed`, `GetRandomInt` and
//! `GetRandomReal`. Given the same seed and call sequence, every output is
//! bit-identical to the engine.
mod seed;
mod table;

pub use table::{ConstantTable, TABLE_LEN, TABLE_SPAN};

use crate::float::{JassFloat, MANTISSA_MASK};
use ::log::{debug, trace};
use std::fmt;

/// Spans narrower than this are treated as empty by `get_random_real`.
pub const REAL_EPSILON: JassFloat = JassFloat::from_bits(0x3456_BF95);

// (subtrahend, wrap) per lane, high byte first
const LANE_OFFSETS: [(u8, u8); 4] = [(0x04, 0xB8), (0x0C, 200), (0x18, 0xD4), (0x1C, 0xD8)];

#[inline]
fn lane_index(byte: u8, (offset, wrap): (u8, u8)) -> u8 {
    if byte >= offset {
        byte - offset
    } else {
        byte + wrap
    }
}

/// Generator state plus the table it steps through.
#[derive(Clone, PartialEq, Eq)]
pub struct JassPrng<'t> {
    seed_bits: u32,
    current: u32,
    table: &'t ConstantTable,
}

impl fmt::Debug for JassPrng<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JassPrng")
            .field("seed_bits", &format_args!("{:#010x}", self.seed_bits))
            .field("current", &format_args!("{:#010x}", self.current))
            .finish_non_exhaustive()
    }
}

impl JassPrng<'static> {
    /// Seeded generator over the engine's own table.
    pub fn new(seed: i32) -> Self {
        Self::with_table(ConstantTable::game_dll(), seed)
    }

    /// Zeroed, unseeded state over the engine's table.
    pub fn unseeded() -> Self {
        Self {
            seed_bits: 0,
            current: 0,
            table: ConstantTable::game_dll(),
        }
    }
}

impl Default for JassPrng<'static> {
    fn default() -> Self {
        Self::unseeded()
    }
}

impl<'t> JassPrng<'t> {
    pub fn with_table(table: &'t ConstantTable, seed: i32) -> Self {
        let mut rng = Self {
            seed_bits: 0,
            current: 0,
            table,
        };
        rng.set_random_seed(seed);
        rng
    }

    /// Reseeds, then steps once to warm up like the engine does.
    pub fn set_random_seed(&mut self, seed: i32) {
        self.seed_bits = seed::scramble(seed);
        self.current = seed as u32;
        debug!("seeded with {} (seed bits {:#010x})", seed, self.seed_bits);

        self.step();
    }

    /// Advances the state and returns the raw 32-bit output.
    pub fn step(&mut self) -> u32 {
        let lanes = self.seed_bits.to_be_bytes();
        let mut indices = [0u8; 4];
        for (index, (&byte, &lane)) in indices.iter_mut().zip(lanes.iter().zip(&LANE_OFFSETS)) {
            *index = lane_index(byte, lane);
        }
        let [i0, i1, i2, i3] = indices;

        let mix = self.table.get(i2).rotate_left(3)
            ^ self.table.get(i1).rotate_left(2)
            ^ self.table.get(i3)
            ^ self.table.get(i0).rotate_left(1);

        self.current = self.current.wrapping_add(mix);
        self.seed_bits = u32::from_be_bytes(indices);
        trace!(
            "step: lanes {:02x?} -> {:02x?}, output {:#010x}",
            lanes,
            indices,
            self.current
        );

        self.current
    }

    /// Integer in the inclusive span between `min` and `max`, in either order.
    ///
    /// Equal bounds return immediately without touching the state.
    pub fn get_random_int(&mut self, min: i32, max: i32) -> i32 {
        if min == max {
            trace!("get_random_int: empty span at {}", min);
            return min;
        }

        let (lo, hi) = if min < max { (min, max) } else { (max, min) };
        let range = hi.wrapping_sub(lo) as u32 as u64;

        // Fixed-point scale of the raw output onto [0, range]
        let raw = self.step() as u64;
        let offset = ((raw * (range + 1)) >> 32) as u32;

        lo.wrapping_add(offset as i32)
    }

    /// Real in the span between `min` and `max`, computed with the engine's
    /// float arithmetic.
    ///
    /// The span is order-independent but the result is always offset from
    /// `min`. Spans narrower than `REAL_EPSILON` return `min` without stepping.
    pub fn get_random_real(&mut self, min: f32, max: f32) -> f32 {
        let lo = JassFloat::from(min);
        let hi = JassFloat::from(max);

        // Magnitude compare on the bit patterns; valid for any finite value
        if (lo - hi).abs().to_bits() < REAL_EPSILON.to_bits() {
            trace!("get_random_real: empty span at {}", min);
            return min;
        }

        let width = if min <= max { hi - lo } else { lo - hi };

        // [1, 2) from the low mantissa bits, shifted down to [0, 1)
        let raw = self.step();
        let unit = JassFloat::from_bits((raw & MANTISSA_MASK) | JassFloat::ONE.to_bits())
            + JassFloat::NEG_ONE;

        f32::from(lo + width * unit)
    }

    /// `(seed_bits, current)`
    pub fn state(&self) -> (u32, u32) {
        (self.seed_bits, self.current)
    }

    pub(crate) fn set_state(&mut self, seed_bits: u32, current: u32) {
        self.seed_bits = seed_bits;
        self.current = current;
    }

    pub fn table(&self) -> &'t ConstantTable {
        self.table
    }
}
