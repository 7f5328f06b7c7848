// Scan mode
// Small mode is meant for barcodes occupying a small part of the frame: it accepts fainter
// contrast, scans more lines and keeps narrower runs
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum ScanMode {
    #[default]
    Normal,
    Small,
}

static NORMAL_LINES: [f64; 5] = [0.4, 0.45, 0.5, 0.55, 0.6];

static SMALL_LINES: [f64; 7] = [0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65];

impl From<bool> for ScanMode {
    fn from(small: bool) -> Self {
        if small {
            Self::Small
        } else {
            Self::Normal
        }
    }
}

impl ScanMode {
    pub fn min_contrast(self) -> f64 {
        match self {
            Self::Normal => 10.0,
            Self::Small => 6.0,
        }
    }

    // Scan lines as fractions of image height, top to bottom
    pub fn scan_lines(self) -> &'static [f64] {
        match self {
            Self::Normal => &NORMAL_LINES,
            Self::Small => &SMALL_LINES,
        }
    }

    pub fn min_bar_width(self, img_w: u32) -> u32 {
        match self {
            Self::Normal => 8,
            Self::Small => (img_w / 100).clamp(2, 8),
        }
    }
}
