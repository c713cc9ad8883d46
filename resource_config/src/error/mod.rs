//! Error types produced while resolving and decoding configuration resources.

mod constructors;
mod types;

pub use types::{ConfigError, ErrorKind};
