use crate::{
    base_common::Alphabet,
    base_n::{Decoder, Encoder},
    error::Error,
    uuid::UuidFormat,
};

/// Shared, read-only state of the service: one alphabet for every request.
pub struct State {
    alphabet: Alphabet,
    uuid_format: UuidFormat,
}

impl State {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            uuid_format: UuidFormat::new(),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the canonical UUID text and its short form.
    pub fn encode(&self, uuid: &str) -> Result<(String, String), Error> {
        let value = self.uuid_format.parse(uuid)?;
        let short = Encoder::new(&self.alphabet).encode(value);
        Ok((self.uuid_format.format(value), short))
    }

    /// Returns the canonical UUID text of a short form.
    pub fn decode(&self, short: &str) -> Result<String, Error> {
        let value = Decoder::new(&self.alphabet).decode(short)?;
        Ok(self.uuid_format.format(value))
    }
}
