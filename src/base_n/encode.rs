use super::Alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoding.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Writes 128-bit values as fixed-length strings, least significant digit first.
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Upper bound on the UTF-8 length of any encoding.
    pub fn max_encoded_bytes(&self) -> usize {
        self.alphabet.max_encoded_length() * self.alphabet.max_symbol_width()
    }

    fn digits(&self, value: u128) -> impl Iterator<Item = char> + '_ {
        let base = self.alphabet.len() as u128;
        let mut value = value;
        (0..self.alphabet.max_encoded_length()).map(move |_| {
            let symbol = self.alphabet.symbol((value % base) as usize);
            value /= base;
            symbol
        })
    }

    pub fn encode_into(&self, value: u128, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let output = output.as_mut();
        let mut index = 0;
        for symbol in self.digits(value) {
            let end = index + symbol.len_utf8();
            let slot = output.get_mut(index..end).ok_or(Error::BufferTooSmall)?;
            symbol.encode_utf8(slot);
            index = end;
        }
        Ok(index)
    }

    pub fn encode(&self, value: u128) -> String {
        let mut output = String::with_capacity(self.max_encoded_bytes());
        output.extend(self.digits(value));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Encoder, Error};

    #[test]
    fn encode() {
        let alphabet = Alphabet::default();
        let encoder = Encoder::new(&alphabet);
        assert_eq!(encoder.encode(0), "2222222222222222222222");
        assert_eq!(encoder.encode(1), "3222222222222222222222");
        assert_eq!(encoder.encode(56), "z222222222222222222222");
        assert_eq!(encoder.encode(57), "2322222222222222222222");
        assert_eq!(encoder.encode(u128::MAX), "5B8cwPMGnU6qLbRvo7qEZo");
        assert_eq!(encoder.encode(0x550e8400e29b41d4a716446655440000), "S9AhTSzZcWN8cELXGmNc9H");
        assert_eq!(encoder.encode(0x6ba7b8109dad11d180b400c04fd430c8), "adBxtWMVuzFnCV2onyknAM");
    }

    #[test]
    fn encode_binary() {
        let alphabet = Alphabet::new_encode("10");
        let encoder = Encoder::new(&alphabet);
        assert_eq!(encoder.encode(u128::MAX), "1".repeat(128));
        assert_eq!(&encoder.encode(255)[..10], "1111111100");
    }

    #[test]
    fn encode_into() {
        let alphabet = Alphabet::default();
        let encoder = Encoder::new(&alphabet);
        let mut output = [0u8; 22];
        assert_eq!(encoder.encode_into(u128::MAX, &mut output), Ok(22));
        assert_eq!(&output, b"5B8cwPMGnU6qLbRvo7qEZo");

        let mut output = [0u8; 21];
        assert_eq!(encoder.encode_into(0, &mut output), Err(Error::BufferTooSmall));
    }

    #[test]
    fn encode_into_multi_byte() {
        let alphabet = Alphabet::new("a€😀é");
        let encoder = Encoder::new(&alphabet);
        assert_eq!(encoder.max_encoded_bytes(), 64 * 4);

        let mut output = vec![0u8; encoder.max_encoded_bytes()];
        let len = encoder.encode_into(0b11_10_01, &mut output).unwrap();
        let encoded = std::str::from_utf8(&output[..len]).unwrap();
        assert_eq!(encoded, encoder.encode(0b11_10_01));
        assert!(encoded.starts_with("é€😀aa"));
        assert_eq!(encoded.chars().count(), 64);
        assert_eq!(len, 2 + 3 + 4 + 61);
    }
}
