// Gray code tables for 3 bit symbols
// Adjacent levels differ by a single bit, so a bar read one level off corrupts one bit
//------------------------------------------------------------------------------

pub static TO_GRAY: [u8; 8] = [0, 1, 3, 2, 6, 7, 5, 4];

pub static FROM_GRAY: [u8; 8] = [0, 1, 3, 2, 7, 6, 4, 5];

#[inline]
pub fn to_gray(v: u8) -> u8 {
    debug_assert!(v < 8, "Symbol out of range: {v}");
    TO_GRAY[(v & 0b111) as usize]
}

#[inline]
pub fn from_gray(g: u8) -> u8 {
    debug_assert!(g < 8, "Gray code out of range: {g}");
    FROM_GRAY[(g & 0b111) as usize]
}

#[cfg(test)]
mod gray_tests {
    use super::{from_gray, to_gray, FROM_GRAY, TO_GRAY};

    #[test]
    fn test_tables_are_inverse() {
        for v in 0..8 {
            assert_eq!(from_gray(to_gray(v)), v);
            assert_eq!(to_gray(from_gray(v)), v);
        }
    }

    #[test]
    fn test_matches_reflected_binary() {
        for v in 0..8u8 {
            assert_eq!(TO_GRAY[v as usize], v ^ (v >> 1));
        }
    }

    #[test]
    fn test_adjacent_values_differ_by_one_bit() {
        for v in 0..7 {
            let dist = (to_gray(v) ^ to_gray(v + 1)).count_ones();
            assert_eq!(dist, 1, "Gray codes of {v} and {} differ by {dist} bits", v + 1);
        }
    }

    #[test]
    fn test_tables_are_permutations() {
        for table in [TO_GRAY, FROM_GRAY] {
            let mut sorted = table;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7]);
        }
    }
}
