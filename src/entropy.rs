use crate::error::{Result, YijingError};
use crate::pipeline::{block_from_slice, hexagram_from_bytes, Block, BLOCK_SIZE};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use sha3::{Digest, Sha3_256};
use std::io::Read;
use std::path::PathBuf;

/// Where the three bytes of a cast come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntropySource {
    /// System CSPRNG
    #[default]
    Os,
    /// Reproducible bytes derived from a phrase
    Seed(String),
    /// Bytes given directly as hex
    Hex(String),
    /// First three bytes of a file (a device like /dev/urandom works too)
    File(PathBuf),
}

/// Obtain one block from the given source
pub fn read_block(source: &EntropySource) -> Result<Block> {
    let block = match source {
        EntropySource::Os => os_block()?,
        EntropySource::Seed(phrase) => seeded_block(phrase),
        EntropySource::Hex(text) => hex_block(text)?,
        EntropySource::File(path) => file_block(path)?,
    };
    log::debug!("read {} from {:?}", hex::encode(block), source);
    Ok(block)
}

/// Fill a block from the system CSPRNG
pub fn os_block() -> Result<Block> {
    let mut block = [0u8; BLOCK_SIZE];
    OsRng
        .try_fill_bytes(&mut block)
        .map_err(|e| YijingError::Entropy(e.to_string()))?;
    Ok(block)
}

/// Derive a block from a phrase
/// The phrase is hashed into a 32-byte seed for a deterministic RNG
pub fn seeded_block(phrase: &str) -> Block {
    let seed: [u8; 32] = Sha3_256::digest(phrase.as_bytes()).into();
    let mut rng = StdRng::from_seed(seed);
    let mut block = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut block);
    block
}

/// Decode a block written as six hex digits
pub fn hex_block(text: &str) -> Result<Block> {
    let bytes = hex::decode(text.trim())?;
    block_from_slice(&bytes)
}

/// Read the first block of a file; shorter files are rejected
pub fn file_block(path: &std::path::Path) -> Result<Block> {
    let file = std::fs::File::open(path)?;
    let mut bytes = Vec::with_capacity(BLOCK_SIZE);
    file.take(BLOCK_SIZE as u64).read_to_end(&mut bytes)?;
    block_from_slice(&bytes)
}

/// Cast a hexagram from system entropy
pub fn random_hexagram() -> Result<u8> {
    let block = os_block()?;
    Ok(hexagram_from_bytes(&block))
}
