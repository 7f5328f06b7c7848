use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::Barcode;
use crate::common::{LEVEL_COUNT, SLOT_COUNT};

// Render config
//------------------------------------------------------------------------------

// Largest accepted scale factor, and the largest any single dimension may grow to
pub const MAX_SCALE: u32 = 64;
const MAX_PX: u32 = 6 * MAX_SCALE;

// Bar of level L is (L + 1) units tall, centred vertically. One spare unit is left above and
// below the tallest bar.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RenderConfig {
    bar_width: u32,
    gap: u32,
    unit: u32,
    margin: u32,
    fg: Rgb<u8>,
    bg: Rgb<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::scaled(4)
    }
}

impl RenderConfig {
    pub fn scaled(scale: u32) -> Self {
        let scale = scale.clamp(1, MAX_SCALE);
        Self {
            bar_width: 3 * scale,
            gap: 2 * scale,
            unit: 3 * scale,
            margin: 6 * scale,
            fg: Rgb([0, 0, 0]),
            bg: Rgb([255, 255, 255]),
        }
    }

    pub fn bar_width(&mut self, bar_width: u32) -> &mut Self {
        self.bar_width = bar_width.clamp(1, MAX_PX);
        self
    }

    pub fn gap(&mut self, gap: u32) -> &mut Self {
        self.gap = gap.min(MAX_PX);
        self
    }

    pub fn unit(&mut self, unit: u32) -> &mut Self {
        self.unit = unit.clamp(1, MAX_PX);
        self
    }

    pub fn margin(&mut self, margin: u32) -> &mut Self {
        self.margin = margin.min(MAX_PX);
        self
    }

    pub fn fg(&mut self, fg: Rgb<u8>) -> &mut Self {
        self.fg = fg;
        self
    }

    pub fn bg(&mut self, bg: Rgb<u8>) -> &mut Self {
        self.bg = bg;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        let slots = SLOT_COUNT as u32;
        let w = 2 * self.margin + slots * self.bar_width + (slots - 1) * self.gap;
        let h = (LEVEL_COUNT as u32 + 2) * self.unit;
        (w, h)
    }

    // Left column of the bar in given slot
    pub fn bar_x(&self, slot: usize) -> u32 {
        self.margin + slot as u32 * (self.bar_width + self.gap)
    }

    // Top row and height of a bar of given level
    pub fn bar_span(&self, level: u8) -> (u32, u32) {
        let (_, h) = self.dimensions();
        let bh = (level as u32 + 1) * self.unit;
        ((h - bh) / 2, bh)
    }
}

// Rendering
//------------------------------------------------------------------------------

impl Barcode {
    pub fn to_image(&self, scale: u32) -> RgbImage {
        self.render_with(&RenderConfig::scaled(scale))
    }

    pub fn render_with(&self, cfg: &RenderConfig) -> RgbImage {
        let (w, h) = cfg.dimensions();
        let mut canvas = RgbImage::from_pixel(w, h, cfg.bg);

        for (slot, &level) in self.bars().iter().enumerate() {
            let x = cfg.bar_x(slot);
            let (y, bh) = cfg.bar_span(level);
            let rect = Rect::at(x as i32, y as i32).of_size(cfg.bar_width, bh);
            draw_filled_rect_mut(&mut canvas, rect, cfg.fg);
        }

        canvas
    }

    // Bottom aligned columns, one character per bar
    pub fn render_as_string(&self) -> String {
        let mut canvas = String::new();
        for row in (0..LEVEL_COUNT as u8).rev() {
            for &level in self.bars().iter() {
                canvas.push(if level >= row { '█' } else { ' ' });
            }
            canvas.push('\n');
        }
        canvas
    }
}

#[cfg(test)]
mod render_tests {
    use image::Rgb;

    use super::{RenderConfig, MAX_SCALE};
    use crate::barcode::Barcode;

    #[test]
    fn test_dimensions() {
        let cfg = RenderConfig::scaled(4);
        assert_eq!(cfg.dimensions(), (2 * 24 + 23 * 12 + 22 * 8, 120));
        assert_eq!(cfg.bar_span(7), (12, 96));
        assert_eq!(cfg.bar_span(0), (54, 12));
    }

    #[test]
    fn test_scale_is_capped() {
        let cfg = RenderConfig::scaled(2_000_000_000);
        assert_eq!(cfg, RenderConfig::scaled(MAX_SCALE));
        assert_eq!(cfg.dimensions(), (2 * 384 + 23 * 192 + 22 * 128, 1920));
        assert_eq!(RenderConfig::scaled(0), RenderConfig::scaled(1));
    }

    #[test]
    fn test_setters_are_capped() {
        let mut cfg = RenderConfig::default();
        cfg.bar_width(u32::MAX).gap(u32::MAX).unit(u32::MAX).margin(u32::MAX);
        assert_eq!(cfg.dimensions(), (47 * 384, 10 * 384));
        assert_eq!(cfg.bar_span(7), (384, 8 * 384));
        assert_eq!(cfg.bar_x(22), 384 + 22 * 768);
    }

    #[test]
    fn test_bar_pixels() {
        let code = Barcode::new(1234567890u64).unwrap();
        let cfg = RenderConfig::default();
        let img = code.render_with(&cfg);
        let black = Rgb([0, 0, 0]);
        let white = Rgb([255, 255, 255]);

        for (slot, &level) in code.bars().iter().enumerate() {
            let x = cfg.bar_x(slot) + 1;
            let (top, bh) = cfg.bar_span(level);
            assert_eq!(*img.get_pixel(x, top), black, "Top of bar {slot}");
            assert_eq!(*img.get_pixel(x, top + bh - 1), black, "Bottom of bar {slot}");
            assert_eq!(*img.get_pixel(x, top - 1), white, "Above bar {slot}");
            assert_eq!(*img.get_pixel(x, top + bh), white, "Below bar {slot}");
        }
    }

    #[test]
    fn test_custom_colors() {
        let code = Barcode::new(7u64).unwrap();
        let mut cfg = RenderConfig::scaled(3);
        cfg.fg(Rgb([250, 250, 250])).bg(Rgb([20, 30, 40]));
        let img = code.render_with(&cfg);
        assert_eq!(*img.get_pixel(0, 0), Rgb([20, 30, 40]));
        let (top, _) = cfg.bar_span(7);
        assert_eq!(*img.get_pixel(cfg.bar_x(11), top), Rgb([250, 250, 250]));
    }

    #[test]
    fn test_render_as_string() {
        let code = Barcode::new(0u64).unwrap();
        let s = code.render_as_string();
        let rows = s.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 8);
        // Only the centre marker reaches the top row
        assert_eq!(rows[0].chars().filter(|&c| c == '█').count(), 1);
        assert_eq!(rows[7].chars().filter(|&c| c == '█').count(), 23);
    }
}
