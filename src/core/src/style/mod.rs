pub mod color;
pub mod policy;

pub use color::*;
pub use policy::*;
