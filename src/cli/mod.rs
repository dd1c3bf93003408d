pub mod cast;
pub mod list;
pub mod show;

pub use cast::*;
pub use list::*;
pub use show::*;
