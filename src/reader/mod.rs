pub mod mode;
pub mod prepare;
pub mod quantize;
pub mod scanner;

pub use mode::ScanMode;

use image::{GenericImageView, Pixel};

use crate::common::{
    error::{BarError, BarResult},
    layout::{decode_levels, Decoded, SLOT_COUNT},
};
use prepare::BarImage;
use quantize::quantize;
use scanner::{scan_line, Bar};

// Fewest bars the best scan line must yield
pub const MIN_BARS: usize = 15;

// Bar detection
//------------------------------------------------------------------------------

/// Finds the bar row in the image and returns its quantized levels.
pub fn detect_bars<I>(img: &I, mode: ScanMode) -> BarResult<[u8; SLOT_COUNT]>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let img = BarImage::prepare(img, mode)?;
    let bars = locate_bars(&img, mode);

    if bars.len() < MIN_BARS {
        return Err(BarError::InsufficientBars(bars.len()));
    }

    Ok(quantize(&bars))
}

// Returns bars from the scan line that yields the most; the earliest line wins ties
fn locate_bars(img: &BarImage, mode: ScanMode) -> Vec<Bar> {
    let min_width = mode.min_bar_width(img.w);
    let last_row = img.h.saturating_sub(1);

    let mut best: Vec<Bar> = Vec::new();
    for &frac in mode.scan_lines() {
        let y = ((img.h as f64 * frac) as u32).min(last_row);
        let bars = scan_line(img, y, min_width);
        log::debug!("Scan line {frac:.2} (y {y}): {} bars", bars.len());
        if bars.len() > best.len() {
            best = bars;
        }
    }
    best
}

// Reader
//------------------------------------------------------------------------------

pub struct BarReader();

impl BarReader {
    pub fn read<I>(img: &I, mode: ScanMode) -> BarResult<Decoded>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let (w, h) = img.dimensions();
        log::debug!("Reading {w}x{h} image in {mode:?} mode...");

        let levels = detect_bars(img, mode)?;
        log::debug!("Detected levels {levels:?}");

        let decoded = decode_levels(&levels)?;
        if !decoded.verified {
            log::warn!("Checksum mismatch, id {} is unverified", decoded.id);
        }
        Ok(decoded)
    }
}

/// Image decode entry point.
pub fn decode_image<I>(img: &I, small: bool) -> BarResult<Decoded>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    BarReader::read(img, ScanMode::from(small))
}
