use super::Alphabet;
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidSymbol { symbol: char, index: usize },
    NotInitialized,
    Overflow,
    TooLong { length: usize, max: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { symbol, index } => write!(f, "Invalid symbol '{}' at index {}", symbol, index),
            Self::NotInitialized => write!(f, "Alphabet was built without an index map"),
            Self::Overflow => write!(f, "Value does not fit in 128 bits"),
            Self::TooLong { length, max } => write!(f, "Input of {} symbols exceeds the maximum of {}", length, max),
        }
    }
}

impl Error {
    fn from_alphabet(error: alphabet::Error, index: usize) -> Self {
        match error {
            alphabet::Error::NotInitialized => Self::NotInitialized,
            alphabet::Error::SymbolNotFound { symbol } => Self::InvalidSymbol { symbol, index },
        }
    }
}

/// Reads strings written by [`super::Encoder`] back into 128-bit values.
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn decode(&self, input: &str) -> Result<u128, Error> {
        let symbols: Vec<char> = input.chars().collect();
        let max = self.alphabet.max_encoded_length();
        if symbols.len() > max {
            return Err(Error::TooLong { length: symbols.len(), max });
        }

        let base = self.alphabet.len() as u128;
        let mut value: u128 = 0;
        for (index, &symbol) in symbols.iter().enumerate().rev() {
            let digit = self.alphabet.index(symbol).map_err(|error| Error::from_alphabet(error, index))?;
            value = value
                .checked_mul(base)
                .and_then(|value| value.checked_add(digit as u128))
                .ok_or(Error::Overflow)?;
        }
        Ok(value)
    }
}
