mod render;

pub use render::{RenderConfig, MAX_SCALE};

use num_traits::PrimInt;

use crate::common::{
    error::{BarError, BarResult},
    Bars, MAX_ID,
};

// Encode entry point
//------------------------------------------------------------------------------

/// Encodes an identifier in `0..2^40` into its 23 bar levels. Negative or wider values are
/// rejected with [`BarError::InvalidInput`].
pub fn encode<T: PrimInt>(id: T) -> BarResult<Bars> {
    let id = id.to_u64().filter(|&id| id <= MAX_ID).ok_or(BarError::InvalidInput)?;
    Bars::encode(id)
}

// Barcode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Barcode {
    id: u64,
    bars: Bars,
}

impl Barcode {
    pub fn new<T: PrimInt>(id: T) -> BarResult<Self> {
        let bars = encode(id)?;
        let id = id.to_u64().ok_or(BarError::InvalidInput)?;
        log::debug!("Encoded {id} as [{bars}]");
        Ok(Self { id, bars })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn bars(&self) -> &Bars {
        &self.bars
    }

    pub fn metadata(&self) -> String {
        format!("{{ Id: {}, Checksum: {:#04x}, Levels: [{}] }}", self.id, self.checksum(), self.bars)
    }

    pub fn checksum(&self) -> u8 {
        crate::common::checksum(self.id)
    }
}
