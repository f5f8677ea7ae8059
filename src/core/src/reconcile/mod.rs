pub mod options;
pub mod reconciler;
pub mod transfer_list;

pub use options::*;
pub use reconciler::*;
pub use transfer_list::*;
