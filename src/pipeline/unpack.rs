use crate::error::{Result, YijingError};
use crate::pipeline::coin::{line_from_coins, Coin, CoinSet, Line};

/// Bytes consumed per hexagram: 18 bits are used, 6 bits are padding
pub const BLOCK_SIZE: usize = 3;

/// Lines in a hexagram
pub const LINES: usize = 6;

/// Coins tossed per line
pub const COINS_PER_LINE: usize = 3;

/// Bits of the block that become coin tosses
pub const USED_BITS: usize = LINES * COINS_PER_LINE;

/// One hexagram's worth of raw entropy
pub type Block = [u8; BLOCK_SIZE];

/// Check that a slice holds exactly one block
/// Never truncates or pads: any other length is a caller error
pub fn block_from_slice(data: &[u8]) -> Result<Block> {
    data.try_into()
        .map_err(|_| YijingError::InvalidBlockSize(data.len()))
}

/// Read bit `index` of the block, most significant bit of byte 0 first
fn bit_at(block: &Block, index: usize) -> bool {
    let byte = block[index / 8];
    (byte >> (7 - index % 8)) & 1 == 1
}

/// Unpack the first 18 bits of a block into six coin sets, in read order
pub fn coins_from_bytes(block: &Block) -> [CoinSet; LINES] {
    let mut coins = [[Coin::Tails; COINS_PER_LINE]; LINES];
    for (line, set) in coins.iter_mut().enumerate() {
        for (toss, coin) in set.iter_mut().enumerate() {
            *coin = Coin::from_bit(bit_at(block, line * COINS_PER_LINE + toss));
        }
    }
    log::trace!("unpacked {} into {:?}", hex::encode(block), coins);
    coins
}

/// Cast the six lines of a block
/// The first three lines cast form the lower trigram, the last three the upper
pub fn lines_from_bytes(block: &Block) -> ([Line; 3], [Line; 3]) {
    let lines = coins_from_bytes(block).map(line_from_coins);
    let lower = [lines[0], lines[1], lines[2]];
    let upper = [lines[3], lines[4], lines[5]];
    (lower, upper)
}
