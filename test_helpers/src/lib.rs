//! Test helpers shared across crates.
//!
//! [`tree`] builds throwaway resource roots (directories and zip archives)
//! and [`env`] serialises environment variable mutation between tests.

pub mod env;
pub mod tree;

pub use tree::ResourceTree;
