use super::codec::SYMBOL_COUNT;

// Spread permutation
// Position i takes symbol (i * 7) mod 16. 7 and 16 are coprime, so this is a bijection which
// keeps neighbouring symbols apart on the physical bar row
//------------------------------------------------------------------------------

pub const SPREAD_STEP: usize = 7;

#[inline]
fn origin(i: usize) -> usize {
    (i * SPREAD_STEP) % SYMBOL_COUNT
}

pub fn permute<T: Copy + Default>(symbols: &[T; SYMBOL_COUNT]) -> [T; SYMBOL_COUNT] {
    let mut res = [T::default(); SYMBOL_COUNT];
    for (i, r) in res.iter_mut().enumerate() {
        *r = symbols[origin(i)];
    }
    res
}

pub fn unpermute<T: Copy + Default>(permuted: &[T; SYMBOL_COUNT]) -> [T; SYMBOL_COUNT] {
    let mut res = [T::default(); SYMBOL_COUNT];
    for (i, p) in permuted.iter().enumerate() {
        res[origin(i)] = *p;
    }
    res
}
