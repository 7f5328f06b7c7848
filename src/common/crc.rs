// CRC-8 checksum
// Polynomial x^8 + x^2 + x + 1 (0x07), initial value 0, no reflection, MSB first
//------------------------------------------------------------------------------

pub const CRC8_POLY: u8 = 0x07;

pub fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |mut crc, &b| {
        crc ^= b;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 { (crc << 1) ^ CRC8_POLY } else { crc << 1 };
        }
        crc
    })
}
