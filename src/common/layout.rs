use num_traits::ToPrimitive;

use super::{
    cast::to_level,
    codec::{pack, unpack, SYMBOL_COUNT},
    error::{BarError, BarResult},
    gray::{from_gray, to_gray},
    permute::{permute, unpermute},
};

// Bar row geometry
//
// slot:  0 | 1 .. 10 | 11 | 12 .. 17 | 18 .. 21 | 22
// level: 0 | data    | 7  | data     | 0 (pad)  | 0
//------------------------------------------------------------------------------

pub const SLOT_COUNT: usize = 23;
pub const MAX_LEVEL: u8 = 7;
pub const LEVEL_COUNT: usize = MAX_LEVEL as usize + 1;

pub const START_SLOT: usize = 0;
pub const CENTER_SLOT: usize = 11;
pub const END_SLOT: usize = SLOT_COUNT - 1;

pub const DATA_SLOTS: usize = SLOT_COUNT - 3;
const HALF_DATA: usize = DATA_SLOTS / 2;

// Tolerances for reading reference markers
pub const EDGE_MARKER_MAX: f64 = 1.0;
pub const CENTER_MARKER_MIN: f64 = 6.0;

// Maps the i-th data position onto its slot in the bar row
#[inline]
pub fn data_slot(i: usize) -> usize {
    debug_assert!(i < DATA_SLOTS, "Data position out of range: {i}");
    if i < HALF_DATA {
        i + 1
    } else {
        i + 2
    }
}

// Encode
//------------------------------------------------------------------------------

pub fn assemble(permuted: &[u8; SYMBOL_COUNT]) -> [u8; SLOT_COUNT] {
    let mut bars = [0u8; SLOT_COUNT];
    bars[CENTER_SLOT] = MAX_LEVEL;
    for (i, &p) in permuted.iter().enumerate() {
        bars[data_slot(i)] = p;
    }
    bars
}

pub fn encode_levels(id: u64) -> BarResult<[u8; SLOT_COUNT]> {
    let symbols = pack(id)?;
    let gray = symbols.map(to_gray);
    Ok(assemble(&permute(&gray)))
}

// Decode
//------------------------------------------------------------------------------

pub fn validate_markers<T: ToPrimitive>(heights: &[T]) -> BarResult<()> {
    if heights.len() != SLOT_COUNT {
        return Err(BarError::WrongSlotCount(heights.len()));
    }

    let level = |i: usize| heights[i].to_f64().unwrap_or(f64::NAN);

    // NaN fails every comparison and is rejected
    let edge_ok = |v: f64| v <= EDGE_MARKER_MAX;
    if !edge_ok(level(START_SLOT)) || !edge_ok(level(END_SLOT)) {
        return Err(BarError::InvalidMarkers);
    }
    let center = level(CENTER_SLOT);
    if center.is_nan() || center < CENTER_MARKER_MIN {
        return Err(BarError::InvalidCenterMarker);
    }
    Ok(())
}

/// Strips the reference markers and reverses the spread permutation. Padding slots are
/// ignored, and every value is rounded and clamped to a level before Gray decoding.
pub fn disassemble<T: ToPrimitive>(heights: &[T]) -> BarResult<[u8; SYMBOL_COUNT]> {
    validate_markers(heights)?;

    let mut permuted = [0u8; SYMBOL_COUNT];
    for (i, p) in permuted.iter_mut().enumerate() {
        *p = to_level(&heights[data_slot(i)]);
    }

    Ok(unpermute(&permuted).map(from_gray))
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Decoded {
    pub id: u64,
    pub verified: bool,
}

impl Decoded {
    /// Hands out the id only if its checksum matched.
    pub fn verify(self) -> BarResult<u64> {
        if self.verified {
            Ok(self.id)
        } else {
            Err(BarError::ChecksumMismatch(self.id))
        }
    }
}

pub fn decode_levels<T: ToPrimitive>(heights: &[T]) -> BarResult<Decoded> {
    let symbols = disassemble(heights)?;
    let unpacked = unpack(&symbols);
    log::debug!("Unpacked id {} (checksum matched: {})", unpacked.id, unpacked.matched);
    Ok(Decoded { id: unpacked.id, verified: unpacked.matched })
}
