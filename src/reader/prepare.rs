use image::{GenericImageView, Pixel};

use super::mode::ScanMode;
use crate::common::error::{BarError, BarResult};

// Number of samples taken along each axis when estimating background
const SAMPLE_GRID: u32 = 80;

// Fraction of contrast the threshold sits away from background
const THRESHOLD_RATIO: f64 = 0.45;

#[inline]
pub fn brightness<P: Pixel<Subpixel = u8>>(p: &P) -> f64 {
    let rgb = p.to_rgb();
    (rgb[0] as f64 + rgb[1] as f64 + rgb[2] as f64) / 3.0
}

// Polarity
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Polarity {
    Light, // Bars brighter than background
    Dark,  // Bars darker than background
}

// Threshold
// Steps:
// 1. Samples brightness on a coarse grid across the whole image
// 2. Takes median as background and the extremes as candidate bar brightness
// 3. Bars lie on the side of background which deviates more
// 4. Threshold sits 45% of the way from background towards the bars
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Threshold {
    pub background: f64,
    pub contrast: f64,
    pub level: f64,
    pub polarity: Polarity,
}

impl Threshold {
    pub fn estimate<I>(img: &I, mode: ScanMode) -> BarResult<Self>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let mut samples = sample_brightness(img);
        if samples.is_empty() {
            return Err(BarError::LowContrast);
        }
        samples.sort_by(f64::total_cmp);

        let background = samples[samples.len() / 2];
        let min = samples[0];
        let max = samples[samples.len() - 1];

        let light_diff = max - background;
        let dark_diff = background - min;
        let (polarity, contrast) = if light_diff > dark_diff {
            (Polarity::Light, light_diff)
        } else {
            (Polarity::Dark, dark_diff)
        };

        log::debug!(
            "Background {background:.1}, range {min:.1}..{max:.1}, {polarity:?} bars, contrast {contrast:.1}"
        );

        if contrast < mode.min_contrast() {
            return Err(BarError::LowContrast);
        }

        let offset = contrast * THRESHOLD_RATIO;
        let level = match polarity {
            Polarity::Light => background + offset,
            Polarity::Dark => background - offset,
        }
        .clamp(0.0, 255.0);

        Ok(Self { background, contrast, level, polarity })
    }

    #[inline]
    pub fn is_bar(&self, brightness: f64) -> bool {
        match self.polarity {
            Polarity::Light => brightness > self.level,
            Polarity::Dark => brightness < self.level,
        }
    }
}

fn sample_brightness<I>(img: &I) -> Vec<f64>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (w, h) = img.dimensions();
    let step_x = (w / SAMPLE_GRID).max(1) as usize;
    let step_y = (h / SAMPLE_GRID).max(1) as usize;

    let mut samples = Vec::with_capacity((w as usize / step_x + 1) * (h as usize / step_y + 1));
    for y in (0..h).step_by(step_y) {
        for x in (0..w).step_by(step_x) {
            samples.push(brightness(&img.get_pixel(x, y)));
        }
    }
    samples
}

// Binarized image for bar scanning
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BarImage {
    buffer: Vec<bool>,
    pub threshold: Threshold,
    pub w: u32,
    pub h: u32,
}

impl BarImage {
    /// Estimates the threshold for the image and marks every pixel on the bar side of it.
    pub fn prepare<I>(img: &I, mode: ScanMode) -> BarResult<Self>
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let threshold = Threshold::estimate(img, mode)?;
        let (w, h) = img.dimensions();

        let mut buffer = Vec::with_capacity((w as usize) * (h as usize));
        for y in 0..h {
            for x in 0..w {
                buffer.push(threshold.is_bar(brightness(&img.get_pixel(x, y))));
            }
        }

        Ok(Self { buffer, threshold, w, h })
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.w || y >= self.h {
            return None;
        }
        Some(self.buffer[y as usize * self.w as usize + x as usize])
    }

    #[inline]
    pub fn is_bar(&self, x: u32, y: u32) -> bool {
        self.get(x, y).unwrap_or(false)
    }
}
