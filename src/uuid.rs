use ::uuid::Uuid;
use std::{error, fmt};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidUuid { input: String },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUuid { input } => write!(f, r#"Invalid UUID "{}""#, input),
        }
    }
}

/// Textual UUID representation, hyphenated or as 32 bare hex digits, optionally `urn:uuid:` prefixed.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidFormat;

impl UuidFormat {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, input: &str) -> Result<u128, Error> {
        let invalid = || Error::InvalidUuid { input: input.to_string() };
        // braced `{...}` forms are accepted by `Uuid::try_parse` but not here
        if input.starts_with('{') {
            return Err(invalid());
        }
        Uuid::try_parse(input).map(|uuid| uuid.as_u128()).map_err(|_| invalid())
    }

    pub fn format(&self, value: u128) -> String {
        Uuid::from_u128(value).hyphenated().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, UuidFormat};

    #[test]
    fn parse() {
        let format = UuidFormat::new();
        let value = 0x550e8400e29b41d4a716446655440000;
        assert_eq!(format.parse("550e8400-e29b-41d4-a716-446655440000"), Ok(value));
        assert_eq!(format.parse("550E8400-E29B-41D4-A716-446655440000"), Ok(value));
        assert_eq!(format.parse("550e8400e29b41d4a716446655440000"), Ok(value));
        assert_eq!(format.parse("urn:uuid:550e8400-e29b-41d4-a716-446655440000"), Ok(value));
        assert_eq!(format.parse("00000000-0000-0000-0000-000000000000"), Ok(0));
        assert_eq!(format.parse("ffffffff-ffff-ffff-ffff-ffffffffffff"), Ok(u128::MAX));
    }

    #[test]
    fn parse_errors() {
        let format = UuidFormat::new();
        for input in [
            "",
            "550e8400-e29b-41d4-a716-44665544000",
            "550e8400-e29b-41d4-a716-4466554400000",
            "550e8400-e29b-41d4-a716-44665544000g",
            " 550e8400-e29b-41d4-a716-446655440000",
            "550e8400+e29b-41d4-a716-446655440000",
            "{550e8400-e29b-41d4-a716-446655440000}",
        ] {
            assert_eq!(format.parse(input), Err(Error::InvalidUuid { input: input.to_string() }));
        }
    }

    #[test]
    fn parse_rejects_partial_hyphens() {
        let format = UuidFormat::new();
        for input in [
            "550e8400e29b-41d4a716-446655440000",
            "550e8400-e29b41d4a716446655440000",
            "550e8400e29b41d4a716-446655440000",
        ] {
            assert_eq!(format.parse(input), Err(Error::InvalidUuid { input: input.to_string() }));
        }
    }

    #[test]
    fn format() {
        let format = UuidFormat::new();
        assert_eq!(format.format(0x550e8400e29b41d4a716446655440000), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(format.format(0), "00000000-0000-0000-0000-000000000000");
        assert_eq!(format.format(u128::MAX), "ffffffff-ffff-ffff-ffff-ffffffffffff");
    }
}
