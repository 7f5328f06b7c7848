use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BarError {
    // Encoder
    InvalidInput,

    // Layout decoder
    WrongSlotCount(usize),
    InvalidMarkers,
    InvalidCenterMarker,

    // Image reader
    LowContrast,
    InsufficientBars(usize),

    // Checksum, carries the unverified id
    ChecksumMismatch(u64),
}

impl BarError {
    /// True for failures caused by the image itself (lighting, framing), as opposed to a bar
    /// sequence that was read but didn't hold together.
    pub fn is_detection_error(&self) -> bool {
        matches!(self, Self::LowContrast | Self::InsufficientBars(_))
    }
}

impl Display for BarError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match *self {
            // Encoder
            Self::InvalidInput => f.write_str("Identifier out of range"),

            // Layout decoder
            Self::WrongSlotCount(n) => write!(f, "Wrong slot count: expected 23, found {n}"),
            Self::InvalidMarkers => f.write_str("Invalid start/end markers"),
            Self::InvalidCenterMarker => f.write_str("Invalid center marker"),

            // Image reader
            Self::LowContrast => f.write_str("Contrast too low to separate bars from background"),
            Self::InsufficientBars(n) => write!(f, "Insufficient bars: found {n}"),

            // Checksum
            Self::ChecksumMismatch(id) => write!(f, "Checksum mismatch for unverified id {id}"),
        }
    }
}

impl std::error::Error for BarError {}

pub type BarResult<T> = Result<T, BarError>;
