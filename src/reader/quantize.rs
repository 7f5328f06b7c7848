use super::scanner::Bar;
use crate::common::{cast::to_level, LEVEL_COUNT, SLOT_COUNT};

// Height quantization
// The tallest bar is taken as level 7, i.e. 8 units tall. A bar of h pixels reads as
// round(h / unit) - 1. The result is padded with zeros or truncated to 23 slots.
//------------------------------------------------------------------------------

pub fn quantize(bars: &[Bar]) -> [u8; SLOT_COUNT] {
    let mut levels = [0u8; SLOT_COUNT];

    let max_h = bars.iter().map(Bar::height).max().unwrap_or(0);
    if max_h == 0 {
        return levels;
    }
    let unit = max_h as f64 / LEVEL_COUNT as f64;

    for (l, b) in levels.iter_mut().zip(bars) {
        *l = to_level(&(b.height() as f64 / unit - 1.0));
    }

    log::debug!("Quantized {} bars with unit {unit:.2}px: {levels:?}", bars.len());
    levels
}

#[cfg(test)]
mod quantize_tests {
    use super::quantize;
    use crate::reader::scanner::Bar;

    fn bar(height: u32) -> Bar {
        Bar { left: 0, right: 9, top: 100, bottom: 100 + height - 1 }
    }

    #[test]
    fn test_exact_heights() {
        let bars = (0..8).map(|l| bar((l + 1) * 10)).collect::<Vec<_>>();
        let levels = quantize(&bars);
        assert_eq!(levels[..8], [0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(levels[8..].iter().all(|&l| l == 0));
    }

    #[test]
    fn test_noisy_heights() {
        // unit = 12
        let bars = [96, 13, 23, 40, 58, 61, 85].map(bar);
        assert_eq!(quantize(&bars)[..7], [7, 0, 1, 2, 4, 4, 6]);
    }

    #[test]
    fn test_truncates_extra_bars() {
        let bars = (0..30).map(|i| bar(if i == 29 { 80 } else { 20 })).collect::<Vec<_>>();
        let levels = quantize(&bars);
        assert_eq!(levels.len(), 23);
        assert!(levels.iter().all(|&l| l == 1));
    }

    #[test]
    fn test_no_bars() {
        assert_eq!(quantize(&[]), [0; 23]);
    }
}
