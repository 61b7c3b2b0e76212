//! Terrain types, number tokens and pip weights

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Terrain of a single hex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Terrain {
    Forest,
    Pasture,
    Field,
    Hill,
    Mountain,
    Gold,   // Bonus terrain, custom profile only
    Desert, // Never carries a number token
}

impl Terrain {
    /// Every terrain, in display order
    pub const ALL: [Terrain; 7] = [
        Terrain::Forest,
        Terrain::Pasture,
        Terrain::Field,
        Terrain::Hill,
        Terrain::Mountain,
        Terrain::Gold,
        Terrain::Desert,
    ];

    pub fn is_desert(self) -> bool {
        self == Terrain::Desert
    }

    pub fn name(self) -> &'static str {
        match self {
            Terrain::Forest => "Forest",
            Terrain::Pasture => "Pasture",
            Terrain::Field => "Field",
            Terrain::Hill => "Hill",
            Terrain::Mountain => "Mountain",
            Terrain::Gold => "Gold",
            Terrain::Desert => "Desert",
        }
    }

    /// Resource produced by this terrain (None for Desert)
    pub fn resource(self) -> Option<&'static str> {
        match self {
            Terrain::Forest => Some("Lumber"),
            Terrain::Pasture => Some("Wool"),
            Terrain::Field => Some("Grain"),
            Terrain::Hill => Some("Brick"),
            Terrain::Mountain => Some("Ore"),
            Terrain::Gold => Some("Gold"),
            Terrain::Desert => None,
        }
    }

    /// Four-letter code used by the grid renderer
    pub fn short_code(self) -> &'static str {
        match self {
            Terrain::Forest => "FORE",
            Terrain::Pasture => "PAST",
            Terrain::Field => "FIEL",
            Terrain::Hill => "HILL",
            Terrain::Mountain => "MOUN",
            Terrain::Gold => "GOLD",
            Terrain::Desert => "DESE",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Terrain {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Terrain::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeneratorError::InvalidConfiguration(format!("Unknown terrain: {}", s)))
    }
}

/// A number token (2-12, never 7)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct NumberToken(pub(crate) u8);

impl NumberToken {
    /// Every legal token value
    pub const VALUES: [u8; 10] = [2, 3, 4, 5, 6, 8, 9, 10, 11, 12];

    pub fn new(value: u8) -> Result<Self, GeneratorError> {
        if Self::VALUES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(GeneratorError::InvalidNumber(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Number of dice combinations that roll this value
    pub fn pips(self) -> u32 {
        // 6 - |7 - n| for n in 2..=12
        6 - (7 - self.0 as i32).unsigned_abs()
    }

    /// 6 and 8, the two most likely rolls
    pub fn is_high(self) -> bool {
        self.0 == 6 || self.0 == 8
    }
}

impl From<NumberToken> for u8 {
    fn from(token: NumberToken) -> u8 {
        token.0
    }
}

impl TryFrom<u8> for NumberToken {
    type Error = GeneratorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NumberToken::new(value)
    }
}

impl<'de> Deserialize<'de> for NumberToken {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        NumberToken::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for NumberToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pip weight of an optional token; a hex without a token produces nothing
pub fn pip_weight(number: Option<NumberToken>) -> u32 {
    number.map_or(0, NumberToken::pips)
}
