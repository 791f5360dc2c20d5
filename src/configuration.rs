use crate::{base_common::DEFAULT_ALPHABET, error::Error};
use std::{collections::HashSet, env, error, net::IpAddr};

#[derive(Debug, Clone)]
pub struct Configuration {
    host: IpAddr,
    port: u16,
    alphabet: String,
}

fn var(key: &str, default: Option<String>) -> Result<String, Error> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, Error> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| Error::new(format!("Invalid {} {}", key, value))),
        Err(err) => default.ok_or(err),
    }
}

fn check_alphabet(alphabet: String) -> Result<String, Error> {
    if alphabet.chars().collect::<HashSet<char>>().len() < 2 {
        return Err(Error::new(format!(r#"Invalid ALPHABET "{}": at least two distinct characters are required"#, alphabet)));
    }
    Ok(alphabet)
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        let host = var_map("HOST", |host| host.parse(), Some(IpAddr::from([127, 0, 0, 1])))?;
        let port = var_map("PORT", |port| port.parse(), Some(8000))?;
        let alphabet = check_alphabet(var("ALPHABET", Some(DEFAULT_ALPHABET.to_string()))?)?;
        Ok(Self { host, port, alphabet })
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }
}
