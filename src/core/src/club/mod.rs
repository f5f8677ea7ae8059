pub mod club;
pub mod collection;

pub use club::*;
pub use collection::*;
