mod error;
pub mod generators;
pub mod loaders;

pub use error::{LoadError, LoadResult};
pub use generators::DatabaseGenerator;
pub use loaders::{DatabaseEntity, DatabaseLoader};
