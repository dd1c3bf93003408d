use crate::error::{Result, YijingError};
use crate::pipeline::trigram::{trigram_from_lines, Trigram};
use crate::pipeline::unpack::{block_from_slice, lines_from_bytes, Block};

/// Number of hexagrams in the King Wen sequence
pub const HEXAGRAM_COUNT: usize = 64;

/// King Wen number for each (lower, upper) trigram pair.
/// Rows are the lower trigram, columns the upper, both in `Trigram::ALL` order.
const KING_WEN: [[u8; 8]; 8] = [
    //  Hvn Thu Wat Mtn Ear Wnd Flm Lak
    [1, 34, 5, 26, 11, 9, 14, 43],   // Heaven
    [25, 51, 3, 27, 24, 42, 21, 17], // Thunder
    [6, 40, 29, 4, 7, 59, 64, 47],   // Water
    [33, 62, 39, 52, 15, 53, 56, 31], // Mountain
    [12, 16, 8, 23, 2, 20, 35, 45],  // Earth
    [44, 32, 48, 18, 46, 57, 50, 28], // Wind
    [13, 55, 63, 22, 36, 37, 30, 49], // Flame
    [10, 54, 60, 41, 19, 61, 38, 58], // Lake
];

/// Check that the King Wen table holds every number 1..=64 exactly once
pub fn validate_king_wen_table() -> std::result::Result<(), String> {
    let mut seen = [false; HEXAGRAM_COUNT + 1];
    for (row, cells) in KING_WEN.iter().enumerate() {
        for (col, &number) in cells.iter().enumerate() {
            let n = number as usize;
            if n == 0 || n > HEXAGRAM_COUNT {
                return Err(format!("cell ({}, {}) holds {}", row, col, number));
            }
            if seen[n] {
                return Err(format!("hexagram {} appears twice", number));
            }
            seen[n] = true;
        }
    }
    Ok(())
}

/// Look up the King Wen number of a lower/upper trigram pair
pub fn hexagram_from_trigrams(lower: Trigram, upper: Trigram) -> u8 {
    debug_assert!(validate_king_wen_table().is_ok());
    KING_WEN[lower.index()][upper.index()]
}

/// Inverse lookup: the (lower, upper) trigrams of a hexagram
pub fn trigrams_for_hexagram(number: u8) -> Result<(Trigram, Trigram)> {
    for lower in Trigram::ALL {
        for upper in Trigram::ALL {
            if hexagram_from_trigrams(lower, upper) == number {
                return Ok((lower, upper));
            }
        }
    }
    Err(YijingError::InvalidHexagram(number))
}

/// Cast a hexagram from one block of entropy
pub fn hexagram_from_bytes(block: &Block) -> u8 {
    let (lower, upper) = lines_from_bytes(block);
    let lower = trigram_from_lines(lower);
    let upper = trigram_from_lines(upper);
    let number = hexagram_from_trigrams(lower, upper);
    log::trace!(
        "{} below {} is hexagram {}",
        lower.name(),
        upper.name(),
        number
    );
    number
}

/// Cast a hexagram from a slice, rejecting anything but exactly 3 bytes
pub fn hexagram_from_slice(data: &[u8]) -> Result<u8> {
    let block = block_from_slice(data)?;
    Ok(hexagram_from_bytes(&block))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_bijection() {
        assert_eq!(validate_king_wen_table(), Ok(()));

        let mut numbers: Vec<u8> = Trigram::ALL
            .iter()
            .flat_map(|&l| Trigram::ALL.iter().map(move |&u| hexagram_from_trigrams(l, u)))
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=64).collect::<Vec<u8>>());
    }

    #[test]
    fn test_known_pairs() {
        assert_eq!(hexagram_from_trigrams(Trigram::Heaven, Trigram::Heaven), 1);
        assert_eq!(hexagram_from_trigrams(Trigram::Earth, Trigram::Earth), 2);
        assert_eq!(hexagram_from_trigrams(Trigram::Heaven, Trigram::Earth), 11);
        assert_eq!(hexagram_from_trigrams(Trigram::Earth, Trigram::Heaven), 12);
        assert_eq!(hexagram_from_trigrams(Trigram::Lake, Trigram::Water), 60);
        assert_eq!(hexagram_from_trigrams(Trigram::Flame, Trigram::Water), 63);
        assert_eq!(hexagram_from_trigrams(Trigram::Water, Trigram::Flame), 64);
    }

    #[test]
    fn test_trigrams_for_hexagram() {
        assert_eq!(
            trigrams_for_hexagram(60).unwrap(),
            (Trigram::Lake, Trigram::Water)
        );
        for n in 1..=64u8 {
            let (lower, upper) = trigrams_for_hexagram(n).unwrap();
            assert_eq!(hexagram_from_trigrams(lower, upper), n);
        }
        assert!(matches!(
            trigrams_for_hexagram(0),
            Err(YijingError::InvalidHexagram(0))
        ));
        assert!(trigrams_for_hexagram(65).is_err());
    }

    #[test]
    fn test_hexagram_from_bytes_example() {
        assert_eq!(hexagram_from_bytes(&[0b0001_0000, 0b1011_1001, 0b0100_0000]), 60);
    }

    #[test]
    fn test_hexagram_boundaries() {
        assert_eq!(hexagram_from_bytes(&[0x00, 0x00, 0x00]), 2);
        assert_eq!(hexagram_from_bytes(&[0xFF, 0xFF, 0xFF]), 1);
        assert_eq!(hexagram_from_bytes(&[0xFF, 0xFF, 0xC0]), 1);
    }

    #[test]
    fn test_hexagram_from_slice() {
        assert_eq!(hexagram_from_slice(&[0, 0, 0]).unwrap(), 2);
        assert!(matches!(
            hexagram_from_slice(&[0, 0]),
            Err(YijingError::InvalidBlockSize(2))
        ));
        assert!(hexagram_from_slice(&[0, 0, 0, 0]).is_err());
    }
}
