//! Classpath-style resolution over directories and archives.

use std::fs::{self, Metadata};
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::trace;

use super::archive::{contains_entry, read_entry};
use super::{ResourceResolver, SearchPathBuilder, normalise_name};
use crate::{ConfigError, ConfigResult, ConfigResultExt, ResourceLocation};

/// One entry of a [`SearchPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchRoot {
    /// A directory whose files are loose resources.
    Directory(Utf8PathBuf),
    /// A zip-format archive whose entries are packaged resources.
    Archive(Utf8PathBuf),
}

impl SearchRoot {
    /// Filesystem path of the root.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Directory(path) | Self::Archive(path) => path,
        }
    }
}

/// Ordered list of directories and archives searched for resources.
///
/// Roots are scanned in order and every match is reported, so a resource
/// present in three roots yields three locations. Roots that do not exist
/// are skipped.
///
/// # Examples
///
/// ```rust,no_run
/// use resource_config::{ResourceResolver, SearchPath};
///
/// # fn run() -> resource_config::ConfigResult<()> {
/// let search_path = SearchPath::builder()
///     .add_root("lib/defaults.jar")
///     .add_root("config")
///     .build();
/// for location in search_path.find_resources("app.toml")? {
///     println!("found {location}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    roots: Vec<SearchRoot>,
}

impl SearchPath {
    /// Creates a builder with no roots.
    #[must_use]
    pub fn builder() -> SearchPathBuilder {
        SearchPathBuilder::new()
    }

    pub(super) const fn from_roots(roots: Vec<SearchRoot>) -> Self {
        Self { roots }
    }

    /// Roots in search order.
    #[must_use]
    pub fn roots(&self) -> &[SearchRoot] {
        &self.roots
    }

    fn probe(root: &SearchRoot, name: &str, entry: &str) -> ConfigResult<Option<ResourceLocation>> {
        match root {
            SearchRoot::Directory(dir) => {
                let candidate = dir.join(entry);
                let found = existing(&candidate)
                    .map_err(|err| ConfigError::resolve(name, err))?
                    .is_some_and(|meta| meta.is_file());
                if found {
                    return Ok(Some(ResourceLocation::file(candidate)));
                }
                trace!(root = %dir, resource = name, "resource not present in directory");
                Ok(None)
            }
            SearchRoot::Archive(archive) => {
                let present = existing(archive)
                    .map_err(|err| ConfigError::resolve(name, err))?
                    .is_some_and(|meta| meta.is_file());
                if !present {
                    trace!(root = %archive, "archive root does not exist");
                    return Ok(None);
                }
                let found = contains_entry(archive, entry)
                    .map_err(|err| ConfigError::resolve(name, err))?;
                if found {
                    return Ok(Some(ResourceLocation::archive(archive.clone(), entry)));
                }
                trace!(root = %archive, resource = name, "resource not present in archive");
                Ok(None)
            }
        }
    }
}

/// Metadata for `path`, or `None` when nothing exists there.
///
/// Only `NotFound` counts as absence; any other failure is returned.
fn existing(path: &Utf8Path) -> io::Result<Option<Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

impl ResourceResolver for SearchPath {
    fn find_resources(&self, name: &str) -> ConfigResult<Vec<ResourceLocation>> {
        let entry = normalise_name(name);
        if entry.is_empty() {
            return Err(ConfigError::invalid_location(name, "resource name is empty"));
        }
        let mut found = Vec::new();
        for root in &self.roots {
            if let Some(location) = Self::probe(root, name, entry)? {
                found.push(location);
            }
        }
        Ok(found)
    }

    fn fetch(&self, location: &ResourceLocation) -> ConfigResult<Vec<u8>> {
        match location {
            ResourceLocation::File { path } => fs::read(path).or_read_error(location),
            ResourceLocation::Archive { archive, entry } => {
                read_entry(archive, entry).or_read_error(location)
            }
        }
    }
}
