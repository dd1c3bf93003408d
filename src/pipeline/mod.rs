pub mod coin;
pub mod hexagram;
pub mod trigram;
pub mod unpack;

pub use coin::*;
pub use hexagram::*;
pub use trigram::*;
pub use unpack::*;
