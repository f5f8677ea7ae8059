pub mod fee;
pub mod transfer;

pub use fee::*;
pub use transfer::*;
