pub mod bars;
pub mod cast;
pub mod codec;
pub mod crc;
pub mod error;
pub mod gray;
pub mod layout;
pub mod permute;

pub use bars::*;
pub use codec::*;
pub use crc::*;
pub use gray::*;
pub use layout::*;
pub use permute::*;
