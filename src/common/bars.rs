use std::{
    fmt::{Display, Error, Formatter},
    ops::Deref,
    str::FromStr,
};

use super::{
    error::{BarError, BarResult},
    layout::{decode_levels, encode_levels, Decoded, MAX_LEVEL, SLOT_COUNT},
};

// Bar row
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Bars([u8; SLOT_COUNT]);

impl Bars {
    pub fn encode(id: u64) -> BarResult<Self> {
        encode_levels(id).map(Self)
    }

    pub fn decode(&self) -> BarResult<Decoded> {
        decode_levels(&self.0)
    }

    pub fn levels(&self) -> &[u8; SLOT_COUNT] {
        &self.0
    }
}

impl Deref for Bars {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&[u8]> for Bars {
    type Error = BarError;

    fn try_from(levels: &[u8]) -> BarResult<Self> {
        let levels: [u8; SLOT_COUNT] =
            levels.try_into().map_err(|_| BarError::WrongSlotCount(levels.len()))?;
        if levels.iter().any(|&l| l > MAX_LEVEL) {
            return Err(BarError::InvalidInput);
        }
        Ok(Self(levels))
    }
}

impl Display for Bars {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        for (i, l) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{l}")?;
        }
        Ok(())
    }
}

// Accepts levels separated by whitespace and/or commas
impl FromStr for Bars {
    type Err = BarError;

    fn from_str(s: &str) -> BarResult<Self> {
        let levels = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<u8>().map_err(|_| BarError::InvalidInput))
            .collect::<BarResult<Vec<_>>>()?;
        Self::try_from(levels.as_slice())
    }
}
