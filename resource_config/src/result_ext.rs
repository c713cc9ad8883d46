//! Extensions for mapping errors to `ConfigResult` concisely.
//!
//! These helpers replace repetitive
//! `.map_err(|e| ConfigError::read(location, e))` chains at call sites that
//! already know which resource they are working on.
//!
//! # Examples
//!
//! ```
//! use resource_config::{ConfigResult, ConfigResultExt, ResourceLocation};
//!
//! fn decode(location: &ResourceLocation, bytes: &[u8]) -> ConfigResult<String> {
//!     std::str::from_utf8(bytes)
//!         .map(str::to_owned)
//!         .or_parse_error(location)
//! }
//!
//! let location = ResourceLocation::file("app.toml");
//! assert!(decode(&location, &[0xff]).is_err());
//! ```

use std::error::Error;

use crate::{ConfigError, ConfigResult, ResourceLocation};

/// Attach a resource location to any error and lift it into [`ConfigResult`].
pub trait ConfigResultExt<T> {
    /// Map the error into a [`ConfigError::Read`] for `location`.
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn or_read_error(self, location: &ResourceLocation) -> ConfigResult<T>;

    /// Map the error into a [`ConfigError::Parse`] for `location`.
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn or_parse_error(self, location: &ResourceLocation) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn or_read_error(self, location: &ResourceLocation) -> ConfigResult<T> {
        self.map_err(|err| ConfigError::read(location, err))
    }

    fn or_parse_error(self, location: &ResourceLocation) -> ConfigResult<T> {
        self.map_err(|err| ConfigError::parse(location, err))
    }
}
