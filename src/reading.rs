use crate::error::Result;
use crate::pipeline::{
    coins_from_bytes, hexagram_from_trigrams, line_from_coins, trigram_from_lines, Block, CoinSet,
    Line, Trigram, LINES,
};
use crate::table::{hexagram_info, HexagramInfo};
use serde::Serialize;
use std::fmt;

/// Everything produced by casting one block
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    /// Entropy as hex
    pub entropy: String,
    pub coins: [CoinSet; LINES],
    /// Lines in cast order, bottom line first
    pub lines: [Line; LINES],
    pub lower: Trigram,
    pub upper: Trigram,
    pub hexagram: HexagramInfo,
}

impl Reading {
    /// Run the full cast, keeping every intermediate value
    pub fn cast(block: &Block) -> Result<Self> {
        let coins = coins_from_bytes(block);
        let lines = coins.map(line_from_coins);
        let lower = trigram_from_lines([lines[0], lines[1], lines[2]]);
        let upper = trigram_from_lines([lines[3], lines[4], lines[5]]);
        let hexagram = *hexagram_info(hexagram_from_trigrams(lower, upper))?;

        Ok(Self {
            entropy: hex::encode(block),
            coins,
            lines,
            lower,
            upper,
            hexagram,
        })
    }

    pub fn number(&self) -> u8 {
        self.hexagram.number
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.hexagram;
        writeln!(f, "Hexagram {} {} {} ({})", h.number, h.symbol, h.chinese, h.roman)?;
        writeln!(f, "{}", h.english)?;
        writeln!(f)?;
        writeln!(f, "Upper trigram: {}", self.upper)?;
        writeln!(f, "Lower trigram: {}", self.lower)?;
        writeln!(f)?;

        // Top line printed first, as the hexagram is drawn
        for (i, (line, coins)) in self.lines.iter().zip(self.coins.iter()).enumerate().rev() {
            let tosses: String = coins.iter().map(|c| c.to_string()).collect();
            writeln!(f, "  Line {}: {} {}", i + 1, tosses, line)?;
        }
        writeln!(f)?;
        writeln!(f, "Entropy: {}", self.entropy)
    }
}
