pub mod alphabet;

pub use alphabet::{symbol_width, Alphabet, DEFAULT_ALPHABET};
