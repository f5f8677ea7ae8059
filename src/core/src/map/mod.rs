pub mod plan;
pub mod projection;
pub mod surface;
pub mod view;

pub use plan::*;
pub use projection::*;
pub use surface::*;
pub use view::*;
