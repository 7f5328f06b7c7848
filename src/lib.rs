//! # skyline
//!
//! A Rust library for encoding 40-bit identifiers into bar-height barcodes and reading them
//! back from images. Each barcode is a row of 23 bars whose heights take one of 8 levels.
//!
//! ## Features
//!
//! - **Encoding**: Packs an identifier and its CRC-8 checksum into 16 three-bit symbols
//! - **Error spreading**: Gray codes each symbol and spreads neighbouring symbols apart, so a
//!   misread bar damages as few payload bits as possible
//! - **Error detection**: Every decode recomputes the checksum and flags mismatching ids
//! - **Image reading**: Adaptive thresholding, run-length bar detection and height
//!   quantization on any `image` buffer
//!
//! ## Quick Start
//!
//! ### Encoding an identifier
//!
//! ```rust
//! use skyline::Barcode;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = Barcode::new(1234567890u64)?;
//! println!("{}", code.bars()); // 0 0 5 5 5 1 6 7 0 0 2 7 3 2 6 7 0 0 0 0 0 0 0
//!
//! let img = code.to_image(4); // 4x scale factor
//! # let _ = img;
//! # Ok(())
//! # }
//! ```
//!
//! ### Decoding levels
//!
//! ```rust
//! use skyline::{decode, encode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bars = encode(1234567890u64)?;
//! let decoded = decode(&bars)?;
//! assert_eq!(decoded.verify()?, 1234567890);
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading an image
//!
//! ```rust,no_run
//! use skyline::reader::{BarReader, ScanMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("barcode.png")?;
//! let decoded = BarReader::read(&img, ScanMode::Normal)?;
//! if decoded.verified {
//!     println!("Decoded: {}", decoded.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Bar layout
//!
//! | Slot    | Content                          |
//! |---------|----------------------------------|
//! | 0       | Start marker, level 0            |
//! | 1..=10  | Permuted symbols 0..=9           |
//! | 11      | Centre marker, level 7           |
//! | 12..=17 | Permuted symbols 10..=15         |
//! | 18..=21 | Padding, level 0                 |
//! | 22      | End marker, level 0              |
//!
//! ## Checksum mismatches
//!
//! A decode that passes the structural checks always yields an id. If the checksum doesn't
//! match, the id is returned with `verified == false`; use [`Decoded::verify`] to turn that
//! into [`BarError::ChecksumMismatch`]. Image failures ([`BarError::LowContrast`],
//! [`BarError::InsufficientBars`]) are reported by [`BarError::is_detection_error`].

#![allow(clippy::items_after_test_module)]

pub mod barcode;
pub(crate) mod common;
pub mod reader;

pub use barcode::{encode, Barcode, RenderConfig, MAX_SCALE};
pub use common::{
    checksum, crc8,
    error::{BarError, BarResult},
    from_gray, pack, permute, to_gray, unpack, unpermute, Bars, Decoded, Unpacked, MAX_ID,
    SLOT_COUNT, SYMBOL_COUNT,
};
pub use reader::{decode_image, BarReader, ScanMode};

use num_traits::ToPrimitive;

/// Decode entry point. Accepts integer levels or analog heights; values are rounded and
/// clamped to levels.
pub fn decode<T: ToPrimitive>(heights: &[T]) -> BarResult<Decoded> {
    common::decode_levels(heights)
}
