#![warn(missing_docs)]
//! a simple in-memory key/value store
pub use dispatcher::{Dispatcher, Outcome};
pub use error::DatastoreError;
pub use model::Command;
pub use store::Store;

pub mod bootstrap;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod model;
pub mod store;
pub mod value;

/// simply type
pub type Result<T> = std::result::Result<T, anyhow::Error>;
