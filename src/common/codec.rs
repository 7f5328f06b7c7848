use super::{
    crc::crc8,
    error::{BarError, BarResult},
};

pub const ID_BITS: usize = 40;
pub const MAX_ID: u64 = (1 << ID_BITS) - 1;
pub const ID_BYTES: usize = ID_BITS / 8;
pub const CRC_BITS: usize = 8;
pub const PAYLOAD_BITS: usize = ID_BITS + CRC_BITS;
pub const SYMBOL_BITS: usize = 3;
pub const SYMBOL_COUNT: usize = PAYLOAD_BITS / SYMBOL_BITS;

const SYMBOL_MASK: u64 = (1 << SYMBOL_BITS) - 1;

// Identifier bytes
//------------------------------------------------------------------------------

// Big endian, zero extended to 5 bytes
pub fn id_bytes(id: u64) -> [u8; ID_BYTES] {
    debug_assert!(id <= MAX_ID, "Id exceeds 40 bits: {id}");
    let be = id.to_be_bytes();
    let mut res = [0u8; ID_BYTES];
    res.copy_from_slice(&be[be.len() - ID_BYTES..]);
    res
}

pub fn checksum(id: u64) -> u8 {
    crc8(&id_bytes(id))
}

// Packing
// 48 bit payload = id (40 bits) | crc (8 bits), cut into 16 symbols of 3 bits, MSB first
//------------------------------------------------------------------------------

pub fn pack(id: u64) -> BarResult<[u8; SYMBOL_COUNT]> {
    if id > MAX_ID {
        return Err(BarError::InvalidInput);
    }

    let payload = (id << CRC_BITS) | checksum(id) as u64;

    let mut symbols = [0u8; SYMBOL_COUNT];
    for (i, s) in symbols.iter_mut().enumerate() {
        let shift = (SYMBOL_COUNT - 1 - i) * SYMBOL_BITS;
        *s = ((payload >> shift) & SYMBOL_MASK) as u8;
    }
    Ok(symbols)
}

// Unpacking
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Unpacked {
    pub id: u64,
    pub matched: bool,
}

pub fn unpack(symbols: &[u8; SYMBOL_COUNT]) -> Unpacked {
    let payload = symbols
        .iter()
        .fold(0u64, |acc, &s| (acc << SYMBOL_BITS) | (s as u64 & SYMBOL_MASK));

    let id = payload >> CRC_BITS;
    let claimed = (payload & 0xFF) as u8;

    Unpacked { id, matched: checksum(id) == claimed }
}

#[cfg(test)]
mod codec_tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{checksum, id_bytes, pack, unpack, Unpacked, MAX_ID, SYMBOL_COUNT};
    use crate::common::error::BarError;

    #[test_case(0, [0, 0, 0, 0, 0]; "zero")]
    #[test_case(1234567890, [0x00, 0x49, 0x96, 0x02, 0xD2]; "fits_32_bits")]
    #[test_case(MAX_ID, [0xFF, 0xFF, 0xFF, 0xFF, 0xFF]; "max")]
    #[test_case(0x01_0000_0000, [0x01, 0x00, 0x00, 0x00, 0x00]; "fifth_byte")]
    fn test_id_bytes(id: u64, exp: [u8; 5]) {
        assert_eq!(id_bytes(id), exp);
    }

    #[test]
    fn test_checksum_reference() {
        assert_eq!(checksum(1234567890), 0xF3);
    }

    #[test]
    fn test_pack_zero() {
        assert_eq!(pack(0).unwrap(), [0; SYMBOL_COUNT]);
    }

    #[test]
    fn test_pack_one() {
        // payload = 0x0107
        let mut exp = [0; SYMBOL_COUNT];
        exp[13] = 0b100;
        exp[14] = 0b000;
        exp[15] = 0b111;
        assert_eq!(pack(1).unwrap(), exp);
    }

    #[test]
    fn test_pack_out_of_range() {
        assert_eq!(pack(MAX_ID + 1), Err(BarError::InvalidInput));
        assert_eq!(pack(u64::MAX), Err(BarError::InvalidInput));
    }

    #[test]
    fn test_unpack_detects_corruption() {
        let mut symbols = pack(1234567890).unwrap();
        symbols[4] ^= 0b010;
        let Unpacked { matched, .. } = unpack(&symbols);
        assert!(!matched);
    }

    #[test]
    fn test_unpack_returns_id_on_mismatch() {
        let mut symbols = pack(987654321).unwrap();
        // Last symbol only holds checksum bits
        symbols[SYMBOL_COUNT - 1] ^= 0b001;
        assert_eq!(unpack(&symbols), Unpacked { id: 987654321, matched: false });
    }

    proptest! {
        #[test]
        fn proptest_pack_roundtrip(id in 0..=MAX_ID) {
            let symbols = pack(id).unwrap();
            prop_assert!(symbols.iter().all(|&s| s < 8));
            prop_assert_eq!(unpack(&symbols), Unpacked { id, matched: true });
        }
    }
}
