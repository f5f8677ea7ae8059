pub mod club;
pub mod loader;
pub mod player;
pub mod season;
pub mod value;

pub use club::*;
pub use loader::*;
pub use player::*;
pub use season::*;
pub use value::*;
