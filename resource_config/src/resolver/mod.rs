//! Strategies for finding every location of a named resource.
//!
//! A [`ResourceResolver`] answers two questions: where does a resource name
//! exist, and what bytes live at a given location. [`SearchPath`] scans an
//! ordered list of directories and archives in the manner of a classpath,
//! while [`MemoryResolver`] serves resources registered programmatically.

mod archive;
mod builder;
mod memory;
mod search_path;

pub use builder::SearchPathBuilder;
pub use memory::MemoryResolver;
pub use search_path::{SearchPath, SearchRoot};

use crate::{ConfigResult, ResourceLocation};

/// Enumerates and fetches configuration resources.
pub trait ResourceResolver {
    /// Returns every location holding `name`, in discovery order.
    ///
    /// Finding no match is not an error and yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Resolve`](crate::ConfigError::Resolve) when a
    /// search root cannot be inspected.
    fn find_resources(&self, name: &str) -> ConfigResult<Vec<ResourceLocation>>;

    /// Reads the complete contents of `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`](crate::ConfigError::Read) when the
    /// location cannot be read.
    fn fetch(&self, location: &ResourceLocation) -> ConfigResult<Vec<u8>>;
}

impl<T> ResourceResolver for &T
where
    T: ResourceResolver + ?Sized,
{
    fn find_resources(&self, name: &str) -> ConfigResult<Vec<ResourceLocation>> {
        (**self).find_resources(name)
    }

    fn fetch(&self, location: &ResourceLocation) -> ConfigResult<Vec<u8>> {
        (**self).fetch(location)
    }
}

/// Strips leading separators so names resolve relative to each root.
fn normalise_name(name: &str) -> &str {
    name.trim_start_matches('/')
}

#[cfg(test)]
mod tests;
