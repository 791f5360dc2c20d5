pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::Decoder;
pub use encode::Encoder;
