use crate::error::{Result, YijingError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of a coin landing tails
pub const TAILS: u8 = 2;

/// Weight of a coin landing heads
pub const HEADS: u8 = 3;

/// Outcome of a single coin toss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Tails,
    Heads,
}

impl Coin {
    /// A set bit is heads, a clear bit is tails
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Heads
        } else {
            Self::Tails
        }
    }

    pub fn weight(self) -> u8 {
        match self {
            Self::Tails => TAILS,
            Self::Heads => HEADS,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tails => write!(f, "T"),
            Self::Heads => write!(f, "H"),
        }
    }
}

/// The three coins tossed for one line
pub type CoinSet = [Coin; 3];

/// Yin or yang, ignoring whether the line is old or young
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yin,
    Yang,
}

/// A hexagram line. The discriminant is the sum of the three coin weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    OldYin = 6,
    YoungYang = 7,
    YoungYin = 8,
    OldYang = 9,
}

impl Line {
    pub const ALL: [Line; 4] = [Line::OldYin, Line::YoungYang, Line::YoungYin, Line::OldYang];

    /// Numeric line value (6, 7, 8 or 9)
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Young yang and old yang lines are yang; the rest are yin
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    pub fn polarity(self) -> Polarity {
        if self.is_yang() {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::OldYin => "old yin",
            Self::YoungYang => "young yang",
            Self::YoungYin => "young yin",
            Self::OldYang => "old yang",
        }
    }
}

impl TryFrom<u8> for Line {
    type Error = YijingError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(YijingError::InvalidLine(other)),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.name())
    }
}

/// Sum the weights of three coins into a line.
///
/// Three weights from {2, 3} always sum into 6..=9, so every coin set
/// maps onto exactly one line.
pub fn line_from_coins(coins: CoinSet) -> Line {
    match coins.iter().map(|c| c.weight()).sum::<u8>() {
        6 => Line::OldYin,
        7 => Line::YoungYang,
        8 => Line::YoungYin,
        9 => Line::OldYang,
        other => unreachable!("three coin weights summed to {}", other),
    }
}
