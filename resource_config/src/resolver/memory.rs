//! Resources registered in memory, such as defaults compiled into a binary.

use std::io;

use camino::Utf8Path;

use super::{ResourceResolver, normalise_name};
use crate::{ConfigError, ConfigResult, ResourceLocation};

/// Resolver over resources registered programmatically.
///
/// Locations keep whatever shape they were registered with, so embedded
/// defaults can be declared as archive entries to sort ahead of loose files.
///
/// # Examples
///
/// ```rust
/// use resource_config::{MemoryResolver, ResourceLocation, ResourceResolver};
///
/// let resolver = MemoryResolver::new()
///     .with(
///         ResourceLocation::archive("builtin.jar", "app.toml"),
///         "name = \"bundled\"",
///     )
///     .with(ResourceLocation::file("overrides/app.toml"), "name = \"local\"");
/// let found = resolver.find_resources("app.toml").unwrap_or_default();
/// assert_eq!(found.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryResolver {
    entries: Vec<(ResourceLocation, Vec<u8>)>,
}

impl MemoryResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `contents` at `location`.
    ///
    /// Re-registering a location replaces its contents but keeps its original
    /// discovery position.
    pub fn insert(&mut self, location: ResourceLocation, contents: impl Into<Vec<u8>>) {
        let bytes = contents.into();
        if let Some(slot) = self.entries.iter_mut().find(|(known, _)| *known == location) {
            slot.1 = bytes;
        } else {
            self.entries.push((location, bytes));
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, location: ResourceLocation, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(location, contents);
        self
    }

    /// Number of registered resources.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns `true` when `location` names the resource `name`.
///
/// Loose files match on trailing path components; archive entries must match
/// the full entry name.
fn matches_name(location: &ResourceLocation, name: &str) -> bool {
    match location {
        ResourceLocation::File { path } => path.ends_with(Utf8Path::new(name)),
        ResourceLocation::Archive { entry, .. } => normalise_name(entry) == name,
    }
}

impl ResourceResolver for MemoryResolver {
    fn find_resources(&self, name: &str) -> ConfigResult<Vec<ResourceLocation>> {
        let wanted = normalise_name(name);
        if wanted.is_empty() {
            return Err(ConfigError::invalid_location(name, "resource name is empty"));
        }
        Ok(self
            .entries
            .iter()
            .filter(|(location, _)| matches_name(location, wanted))
            .map(|(location, _)| location.clone())
            .collect())
    }

    fn fetch(&self, location: &ResourceLocation) -> ConfigResult<Vec<u8>> {
        self.entries
            .iter()
            .find(|(known, _)| known == location)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| {
                ConfigError::read(
                    location,
                    io::Error::new(io::ErrorKind::NotFound, "resource is not registered"),
                )
            })
    }
}
