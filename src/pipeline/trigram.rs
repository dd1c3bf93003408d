use crate::error::{Result, YijingError};
use crate::pipeline::coin::{Line, Polarity};
use serde::{Deserialize, Serialize};
use std::fmt;

use Polarity::{Yang, Yin};

/// The eight trigrams
/// Discriminants index the rows and columns of the King Wen table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigram {
    Heaven = 0,
    Thunder = 1,
    Water = 2,
    Mountain = 3,
    Earth = 4,
    Wind = 5,
    Flame = 6,
    Lake = 7,
}

/// Polarity pattern of each trigram, in line-triple order
const PATTERNS: [(Trigram, [Polarity; 3]); 8] = [
    (Trigram::Heaven, [Yang, Yang, Yang]),
    (Trigram::Thunder, [Yin, Yin, Yang]),
    (Trigram::Water, [Yin, Yang, Yin]),
    (Trigram::Mountain, [Yang, Yin, Yin]),
    (Trigram::Earth, [Yin, Yin, Yin]),
    (Trigram::Wind, [Yang, Yang, Yin]),
    (Trigram::Flame, [Yang, Yin, Yang]),
    (Trigram::Lake, [Yin, Yang, Yang]),
];

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Heaven,
        Trigram::Thunder,
        Trigram::Water,
        Trigram::Mountain,
        Trigram::Earth,
        Trigram::Wind,
        Trigram::Flame,
        Trigram::Lake,
    ];

    /// Row/column index in the King Wen table
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn pattern(self) -> [Polarity; 3] {
        PATTERNS[self.index()].1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Heaven => "Heaven",
            Self::Thunder => "Thunder",
            Self::Water => "Water",
            Self::Mountain => "Mountain",
            Self::Earth => "Earth",
            Self::Wind => "Wind",
            Self::Flame => "Flame",
            Self::Lake => "Lake",
        }
    }

    /// Unicode trigram glyph
    pub fn symbol(self) -> char {
        match self {
            Self::Heaven => '☰',
            Self::Thunder => '☳',
            Self::Water => '☵',
            Self::Mountain => '☶',
            Self::Earth => '☷',
            Self::Wind => '☴',
            Self::Flame => '☲',
            Self::Lake => '☱',
        }
    }
}

impl std::str::FromStr for Trigram {
    type Err = YijingError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "heaven" => Ok(Self::Heaven),
            "thunder" => Ok(Self::Thunder),
            "water" => Ok(Self::Water),
            "mountain" => Ok(Self::Mountain),
            "earth" => Ok(Self::Earth),
            "wind" => Ok(Self::Wind),
            "flame" | "fire" => Ok(Self::Flame),
            "lake" => Ok(Self::Lake),
            _ => Err(YijingError::UnknownTrigram(s.to_string())),
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

/// Classify three lines by their yin/yang pattern.
///
/// # Panics
///
/// Panics if no trigram carries the pattern. The table covers all eight
/// patterns, so this only happens if the table itself is broken.
pub fn trigram_from_lines(lines: [Line; 3]) -> Trigram {
    let pattern = lines.map(Line::polarity);
    let trigram = PATTERNS
        .iter()
        .find(|(_, p)| *p == pattern)
        .map(|(t, _)| *t)
        .unwrap_or_else(|| panic!("trigram table has no entry for {:?}", pattern));
    log::trace!("lines {:?} classified as {}", lines, trigram.name());
    trigram
}
