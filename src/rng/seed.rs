/// Packs a seed into the four table-index lanes.
///
/// Layout, with 2-bit zero gaps under each field:
///   [31..26]  ((seed / 47) * 17 + seed) & 0x3F
///   [23..18]  seed % 53
///   [15..10]  seed % 59
///   [7..2]    seed % 61
///
/// The seed is taken as unsigned for the division and the remainders.
pub(crate) fn scramble(seed: i32) -> u32 {
    let s = seed as u32;

    let low = (s % 61) << 2;
    let mid_low = (s % 59) << 10;
    let mid_high = (s % 53) << 18;
    let high = ((s / 47).wrapping_mul(17).wrapping_add(s) & 0x3F) << 26;

    high | mid_high | mid_low | low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_fields() {
        // 12345 % 61 = 23, % 59 = 14, % 53 = 49, (262 * 17 + 12345) & 63 = 31
        let bits = scramble(12345);
        assert_eq!(bits & 0xFF, 23 << 2);
        assert_eq!((bits >> 8) & 0xFF, 14 << 2);
        assert_eq!((bits >> 16) & 0xFF, 49 << 2);
        assert_eq!(bits >> 24, 31 << 2);
    }

    #[test]
    fn test_scramble_zero() {
        assert_eq!(scramble(0), 0);
    }

    #[test]
    fn test_scramble_gaps_stay_clear() {
        for seed in [-1, 1, 46, 47, i32::MIN, i32::MAX, 0x1234_5678] {
            assert_eq!(scramble(seed) & 0x0303_0303, 0, "seed {}", seed);
        }
    }

    #[test]
    fn test_scramble_negative_is_unsigned() {
        // -1 is scrambled as 0xFFFFFFFF
        let s = u32::MAX;
        let expected = ((s % 61) << 2)
            | ((s % 59) << 10)
            | ((s % 53) << 18)
            | ((((s / 47) * 17).wrapping_add(s) & 0x3F) << 26);
        assert_eq!(scramble(-1), expected);
    }
}
