//! Primary error enum for resource loading flows.

use std::error::Error;

use thiserror::Error;

use crate::ResourceLocation;

/// Coarse classification of a [`ConfigError`].
///
/// Callers that only care whether a failure came from the environment or from
/// the content itself can branch on this instead of matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Resource resolution or content fetch failed.
    Io,
    /// Content, the explicit order value, or a location could not be decoded.
    Parse,
}

/// Errors that can occur while loading configuration resources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Enumerating the locations of a resource failed.
    #[error("failed to resolve resources named '{name}': {source}")]
    Resolve {
        /// Resource name that was being resolved.
        name: String,
        /// Underlying error reported by the resolver.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// Reading the raw bytes of a resolved location failed.
    #[error("failed to read configuration resource '{location}': {source}")]
    Read {
        /// Location that could not be read.
        location: ResourceLocation,
        /// Underlying I/O or archive error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The resource content could not be decoded into a mapping.
    #[error("failed to parse configuration resource '{location}': {source}")]
    Parse {
        /// Location whose content was rejected.
        location: ResourceLocation,
        /// Underlying decoder error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The explicit order entry is present but not an integer.
    #[error("invalid value for '{key}' in '{location}': expected an integer, found {value}")]
    InvalidOrder {
        /// Location holding the malformed entry.
        location: ResourceLocation,
        /// Order key that was consulted.
        key: String,
        /// Rendering of the rejected value.
        value: String,
    },

    /// No decoder is available for the resource's format.
    #[error("no decoder available for '{format}' content in '{location}'")]
    UnsupportedFormat {
        /// Location whose format is unsupported.
        location: ResourceLocation,
        /// Format name derived from the location.
        format: String,
    },

    /// A textual resource location could not be parsed.
    #[error("invalid resource location '{input}': {reason}")]
    InvalidLocation {
        /// Text that failed to parse.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Classifies the error as an I/O or a parse failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Resolve { .. } | Self::Read { .. } => ErrorKind::Io,
            Self::Parse { .. }
            | Self::InvalidOrder { .. }
            | Self::UnsupportedFormat { .. }
            | Self::InvalidLocation { .. } => ErrorKind::Parse,
        }
    }

    /// Returns the resource location the error refers to, if any.
    #[must_use]
    pub const fn location(&self) -> Option<&ResourceLocation> {
        match self {
            Self::Read { location, .. }
            | Self::Parse { location, .. }
            | Self::InvalidOrder { location, .. }
            | Self::UnsupportedFormat { location, .. } => Some(location),
            Self::Resolve { .. } | Self::InvalidLocation { .. } => None,
        }
    }
}
