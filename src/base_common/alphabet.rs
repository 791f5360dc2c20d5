use std::{collections::HashMap, error, fmt};

/// Digits and letters without the visually ambiguous `0`, `1`, `I`, `O` and `l`.
pub const DEFAULT_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Size in bits of the values an alphabet is sized for.
pub const VALUE_BITS: u32 = 128;

const RUNE_1_MAX: u32 = 0x7F;
const RUNE_2_MAX: u32 = 0x7FF;
const RUNE_3_MAX: u32 = 0xFFFF;
const SURROGATE_MIN: u32 = 0xD800;
const SURROGATE_MAX: u32 = 0xDFFF;
const MAX_RUNE: u32 = 0x10FFFF;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    NotInitialized,
    SymbolNotFound { symbol: char },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Index map is not initialized"),
            Self::SymbolNotFound { symbol } => write!(f, "Symbol '{}' is not part of the alphabet", symbol),
        }
    }
}

/// Number of bytes a code point occupies in UTF-8.
///
/// Surrogates and values past `U+10FFFF` cannot be encoded; they fall back to 3.
pub const fn symbol_width(code_point: u32) -> usize {
    match code_point {
        0..=RUNE_1_MAX => 1,
        0..=RUNE_2_MAX => 2,
        SURROGATE_MIN..=SURROGATE_MAX => 3,
        0..=RUNE_3_MAX => 3,
        0..=MAX_RUNE => 4,
        _ => 3,
    }
}

/// Sorted, deduplicated set of symbols used as the digits of a base-N encoding.
#[derive(Clone, Debug)]
pub struct Alphabet {
    symbols: Vec<char>,
    max_encoded_length: usize,
    max_symbol_width: usize,
    indexes: Option<HashMap<char, usize>>,
}

impl Alphabet {
    /// Builds an alphabet that supports both encoding and symbol lookup.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` holds fewer than two distinct characters.
    pub fn new(symbols: &str) -> Self {
        let mut alphabet = Self::new_encode(symbols);
        let indexes = alphabet.symbols.iter().enumerate().map(|(index, &symbol)| (symbol, index)).collect();
        alphabet.indexes = Some(indexes);
        alphabet
    }

    /// Builds an alphabet without the lookup map. [`Alphabet::index`] always fails on it.
    ///
    /// # Panics
    ///
    /// Panics if `symbols` holds fewer than two distinct characters.
    pub fn new_encode(symbols: &str) -> Self {
        let mut symbols: Vec<char> = symbols.chars().collect();
        symbols.sort_unstable();
        symbols.dedup();

        if symbols.len() < 2 {
            panic!("encoding alphabet must be at least two characters");
        }

        let max_encoded_length = (VALUE_BITS as f64 / (symbols.len() as f64).log2()).ceil() as usize;
        let max_symbol_width = symbols.iter().map(|&symbol| symbol_width(symbol as u32)).fold(1, usize::max);

        Self {
            symbols,
            max_encoded_length,
            max_symbol_width,
            indexes: None,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the digit value of `symbol`.
    pub fn index(&self, symbol: char) -> Result<usize, Error> {
        let indexes = self.indexes.as_ref().ok_or(Error::NotInitialized)?;
        indexes.get(&symbol).copied().ok_or(Error::SymbolNotFound { symbol })
    }

    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols needed to represent any 128-bit value.
    pub fn max_encoded_length(&self) -> usize {
        self.max_encoded_length
    }

    pub fn max_symbol_width(&self) -> usize {
        self.max_symbol_width
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{}", symbol))
    }
}
