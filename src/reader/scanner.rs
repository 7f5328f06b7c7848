use super::prepare::BarImage;

// Bar
//------------------------------------------------------------------------------

//     top ->  ███
//             ███
// scan line ->███<- run
//             ███
//  bottom ->  ███
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bar {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Bar {
    pub fn center(&self) -> u32 {
        (self.left + self.right) / 2
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

// Run scanner
// Tracks maximal runs of bar pixels along a row
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Run {
    left: u32,
    right: u32,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct RunScanner {
    start: Option<u32>, // Start of the open run
    pos: u32,           // Current position
}

impl RunScanner {
    fn new() -> Self {
        Self { start: None, pos: 0 }
    }

    // Returns the run that just closed
    fn advance(&mut self, is_bar: bool) -> Option<Run> {
        let pos = self.pos;
        self.pos += 1;

        match (self.start, is_bar) {
            (None, true) => {
                self.start = Some(pos);
                None
            }
            (Some(left), false) => {
                self.start = None;
                Some(Run { left, right: pos - 1 })
            }
            _ => None,
        }
    }
}

// Line scan
//------------------------------------------------------------------------------

/// Scans the row `y` left to right and measures the vertical extent of every run that is at
/// least `min_width` wide.
pub fn scan_line(img: &BarImage, y: u32, min_width: u32) -> Vec<Bar> {
    let mut runs = Vec::with_capacity(32);
    let mut scanner = RunScanner::new();

    for x in 0..img.w {
        runs.extend(scanner.advance(img.is_bar(x, y)));
    }

    // Closes a run touching the right edge of the image
    runs.extend(scanner.advance(false));

    runs.into_iter()
        .map(|r| Bar { left: r.left, right: r.right, top: y, bottom: y })
        .filter(|b| b.width() >= min_width)
        .map(|b| measure(img, b))
        .collect()
}

// Expands up & down from the scan line through the bar's centre column
fn measure(img: &BarImage, mut bar: Bar) -> Bar {
    let cx = bar.center();

    while bar.top > 0 && img.is_bar(cx, bar.top - 1) {
        bar.top -= 1;
    }

    while bar.bottom + 1 < img.h && img.is_bar(cx, bar.bottom + 1) {
        bar.bottom += 1;
    }

    log::trace!("Bar at x {}..={} spans y {}..={}", bar.left, bar.right, bar.top, bar.bottom);
    bar
}
