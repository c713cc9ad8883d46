//! Constructors returning shared [`ConfigError`] values.

use std::error::Error;
use std::sync::Arc;

use serde_json::Value;

use super::ConfigError;
use crate::ResourceLocation;

impl ConfigError {
    /// Construct a [`ConfigError::Resolve`] for `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_config::{ConfigError, ErrorKind};
    ///
    /// let err = ConfigError::resolve("app.toml", std::io::Error::other("denied"));
    /// assert_eq!(err.kind(), ErrorKind::Io);
    /// ```
    #[must_use]
    pub fn resolve(name: &str, err: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::Resolve {
            name: name.to_owned(),
            source: err.into(),
        })
    }

    /// Construct a [`ConfigError::Read`] for `location`.
    #[must_use]
    pub fn read(
        location: &ResourceLocation,
        err: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::Read {
            location: location.clone(),
            source: err.into(),
        })
    }

    /// Construct a [`ConfigError::Parse`] for `location`.
    ///
    /// Plain messages are accepted as well as error values:
    ///
    /// ```
    /// use resource_config::{ConfigError, ResourceLocation};
    ///
    /// let location = ResourceLocation::file("conf/app.toml");
    /// let err = ConfigError::parse(&location, "top level must be a mapping");
    /// assert!(err.to_string().contains("top level must be a mapping"));
    /// ```
    #[must_use]
    pub fn parse(
        location: &ResourceLocation,
        err: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::Parse {
            location: location.clone(),
            source: err.into(),
        })
    }

    /// Construct a [`ConfigError::InvalidOrder`] describing `value`.
    #[must_use]
    pub fn invalid_order(location: &ResourceLocation, key: &str, value: &Value) -> Arc<Self> {
        Arc::new(Self::InvalidOrder {
            location: location.clone(),
            key: key.to_owned(),
            value: value.to_string(),
        })
    }

    /// Construct a [`ConfigError::UnsupportedFormat`] for `location`.
    #[must_use]
    pub fn unsupported_format(location: &ResourceLocation, format: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::UnsupportedFormat {
            location: location.clone(),
            format: format.into(),
        })
    }

    /// Construct a [`ConfigError::InvalidLocation`].
    #[must_use]
    pub fn invalid_location(input: &str, reason: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::InvalidLocation {
            input: input.to_owned(),
            reason: reason.into(),
        })
    }
}
