//! Decoders turning raw resource bytes into a [`ConfigMap`].
//!
//! The loader is agnostic about file formats: it hands every fetched resource
//! to a [`ConfigFormat`]. [`ExtensionFormat`] picks a decoder from the
//! resource's extension, and any closure with the right signature can stand
//! in for bespoke formats.

mod parser;
#[cfg(feature = "yaml")]
mod yaml;

#[cfg(feature = "yaml")]
pub use yaml::SaphyrYaml;

use crate::{ConfigMap, ConfigResult, ConfigResultExt, ResourceLocation};

/// Format-specific parse step used by [`ConfigLoader`](crate::ConfigLoader).
///
/// Implementations decode the whole resource or fail; partial results are
/// never returned. `Ok(None)` signals content with nothing in it, such as a
/// comment-only document, and is treated as an empty mapping by the loader.
///
/// Closures implement the trait directly:
///
/// ```
/// use resource_config::{ConfigFormat, ConfigMap, ConfigResult, ResourceLocation};
///
/// let format = |_: &ResourceLocation, bytes: &[u8]| -> ConfigResult<Option<ConfigMap>> {
///     let mut config = ConfigMap::new();
///     config.insert("size".to_owned(), bytes.len().into());
///     Ok(Some(config))
/// };
/// let location = ResourceLocation::file("blob.bin");
/// let decoded = format.load_data(&location, b"abc").unwrap_or_default();
/// assert_eq!(decoded.and_then(|c| c.get("size").cloned()), Some(3.into()));
/// ```
pub trait ConfigFormat {
    /// Decodes `bytes` fetched from `location`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::ConfigError) when the content is
    /// malformed or the format is unsupported.
    fn load_data(
        &self,
        location: &ResourceLocation,
        bytes: &[u8],
    ) -> ConfigResult<Option<ConfigMap>>;
}

impl<F> ConfigFormat for F
where
    F: Fn(&ResourceLocation, &[u8]) -> ConfigResult<Option<ConfigMap>>,
{
    fn load_data(
        &self,
        location: &ResourceLocation,
        bytes: &[u8],
    ) -> ConfigResult<Option<ConfigMap>> {
        self(location, bytes)
    }
}

/// Selects a decoder from the resource extension.
///
/// | Extension     | Decoder                               |
/// |---------------|---------------------------------------|
/// | `json`        | `figment` JSON provider               |
/// | `json5`       | `figment-json5` (feature `json5`)     |
/// | `yaml`, `yml` | [`SaphyrYaml`] (feature `yaml`)       |
/// | anything else | `figment` TOML provider (feature `toml`) |
///
/// Content must be UTF-8 and its top level must be a mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionFormat;

impl ConfigFormat for ExtensionFormat {
    fn load_data(
        &self,
        location: &ResourceLocation,
        bytes: &[u8],
    ) -> ConfigResult<Option<ConfigMap>> {
        let data = std::str::from_utf8(bytes).or_parse_error(location)?;
        parser::parse_config_by_format(location, data)
    }
}
