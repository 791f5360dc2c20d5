pub mod base_common;
pub mod base_n;
pub mod chronometer;
pub mod configuration;
pub mod create_server;
pub mod error;
pub mod logger;
pub mod server;
pub mod state;
pub mod uuid;

pub use base_common::{Alphabet, DEFAULT_ALPHABET};
pub use base_n::{Decoder, Encoder};
