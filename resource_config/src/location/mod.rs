//! Identifiers for the places a configuration resource can come from.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::ConfigError;

/// URL schemes recognised as pointing inside a packaged archive.
const ARCHIVE_SCHEMES: [&str; 3] = ["jar:", "zip:", "war:"];
const FILE_SCHEME: &str = "file:";
const ENTRY_SEPARATOR: &str = "!/";

/// Where a configuration resource was found.
///
/// The distinction between loose files and archive entries drives the first
/// precedence tier used by [`ConfigLoader::sort`](crate::ConfigLoader::sort):
/// bundled defaults load before loose, environment-specific files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceLocation {
    /// A standalone file on disk.
    File {
        /// Path of the file.
        path: Utf8PathBuf,
    },
    /// An entry inside a packaged archive such as a `.jar` or `.zip`.
    Archive {
        /// Path of the archive file.
        archive: Utf8PathBuf,
        /// Slash-separated entry name within the archive.
        entry: String,
    },
}

impl ResourceLocation {
    /// Location of a loose file.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Location of `entry` within `archive`.
    #[must_use]
    pub fn archive(archive: impl Into<Utf8PathBuf>, entry: impl Into<String>) -> Self {
        Self::Archive {
            archive: archive.into(),
            entry: entry.into(),
        }
    }

    /// Returns `true` when the resource lives inside a packaged archive.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        matches!(self, Self::Archive { .. })
    }

    /// Path of the resource itself: the file path, or the entry name for
    /// archived resources.
    #[must_use]
    pub fn resource_path(&self) -> &Utf8Path {
        match self {
            Self::File { path } => path.as_path(),
            Self::Archive { entry, .. } => Utf8Path::new(entry),
        }
    }

    /// Lower-cased extension of the resource, used to pick a decoder.
    ///
    /// ```
    /// use resource_config::ResourceLocation;
    ///
    /// let location = ResourceLocation::archive("defaults.jar", "conf/App.YAML");
    /// assert_eq!(location.extension().as_deref(), Some("yaml"));
    /// ```
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.resource_path().extension().map(str::to_ascii_lowercase)
    }
}

impl From<Utf8PathBuf> for ResourceLocation {
    fn from(path: Utf8PathBuf) -> Self {
        Self::File { path }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "{FILE_SCHEME}{path}"),
            Self::Archive { archive, entry } => {
                write!(f, "jar:{FILE_SCHEME}{archive}{ENTRY_SEPARATOR}{entry}")
            }
        }
    }
}

impl FromStr for ResourceLocation {
    type Err = Arc<ConfigError>;

    /// Parses a bare path, a `file:` URL, or an archive URL of the form
    /// `jar:file:<archive>!/<entry>` (`zip:` and `war:` are accepted too).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(ConfigError::invalid_location(input, "location is empty"));
        }
        if let Some(rest) = ARCHIVE_SCHEMES
            .iter()
            .find_map(|scheme| input.strip_prefix(scheme))
        {
            return parse_archive(input, rest);
        }
        let path = input.strip_prefix(FILE_SCHEME).unwrap_or(input);
        if path.is_empty() {
            return Err(ConfigError::invalid_location(input, "file path is empty"));
        }
        Ok(Self::file(path))
    }
}

fn parse_archive(input: &str, rest: &str) -> Result<ResourceLocation, Arc<ConfigError>> {
    let target = rest.strip_prefix(FILE_SCHEME).unwrap_or(rest);
    let Some((archive, entry)) = target.split_once(ENTRY_SEPARATOR) else {
        return Err(ConfigError::invalid_location(
            input,
            "archive locations need a '!/' entry separator",
        ));
    };
    if archive.is_empty() {
        return Err(ConfigError::invalid_location(input, "archive path is empty"));
    }
    if entry.is_empty() {
        return Err(ConfigError::invalid_location(input, "archive entry is empty"));
    }
    Ok(ResourceLocation::archive(archive, entry))
}
