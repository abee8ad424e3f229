use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

/// County identifier shared by the topology and the education records.
///
/// Sources disagree on encoding: the topology stores ids as numbers (`1001`)
/// while other datasets use zero-padded text (`"01001"`). Both normalize to
/// the same numeric code, and `Display` restores the five-digit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FipsCode(u32);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid FIPS code {0:?}: expected ASCII digits")]
pub struct FipsParseError(pub String);

impl FipsCode {
    pub const fn new(code: u32) -> Self { Self(code) }

    /// Numeric value of the code.
    pub fn value(&self) -> u32 { self.0 }
}

impl fmt::Display for FipsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

impl From<u32> for FipsCode {
    fn from(code: u32) -> Self { Self(code) }
}

impl FromStr for FipsCode {
    type Err = FipsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FipsParseError(s.to_string()));
        }
        trimmed.parse::<u32>()
            .map(Self)
            .map_err(|_| FipsParseError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for FipsCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(code) => Ok(Self(code)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
