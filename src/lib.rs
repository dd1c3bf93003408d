//! Yijing - I Ching hexagrams from random entropy
//!
//! Casts one of the 64 hexagrams with the three-coin method: each line is
//! three coin tosses, each hexagram is six lines. The coins come from the
//! bits of a 3-byte block.
//!
//! ## Casting Pipeline
//!
//! ```text
//! Bytes → Unpack → Coins → Lines → Trigrams → Hexagram
//! ```
//!
//! - **Unpack**: the first 18 bits of the block, MSB first, become 18 coins
//!   (1 = heads, weight 3; 0 = tails, weight 2). The last 6 bits are padding.
//! - **Lines**: each group of three coins sums to 6, 7, 8 or 9
//!   (old yin, young yang, young yin, old yang)
//! - **Trigrams**: the first three lines form the lower trigram, the last three
//!   the upper, classified by yin/yang pattern
//! - **Hexagram**: the (lower, upper) pair indexes the King Wen table (1-64)
//!
//! Every stage is a pure function; acquiring entropy is left to the caller
//! (see [`entropy`]).
//!
//! ## Example
//!
//! ```
//! use yijing::pipeline::hexagram_from_bytes;
//! use yijing::table::hexagram_info;
//!
//! let number = hexagram_from_bytes(&[0b0001_0000, 0b1011_1001, 0b0100_0000]);
//! assert_eq!(number, 60);
//! assert_eq!(hexagram_info(number).unwrap().english, "Limitation");
//! ```

pub mod cli;
pub mod entropy;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod reading;
pub mod table;

pub use entropy::{random_hexagram, EntropySource};
pub use error::{Result, YijingError};
pub use format::OutputFormat;
pub use pipeline::{hexagram_from_bytes, hexagram_from_slice, Line, Trigram};
pub use reading::Reading;
pub use table::{hexagram_info, HexagramInfo};
