//! Format-specific parsing utilities for configuration resources.

use figment::Figment;
#[cfg(feature = "toml")]
use figment::providers::Toml;
use figment::providers::{Format, Json};
#[cfg(feature = "json5")]
use figment_json5::Json5;

use crate::{ConfigMap, ConfigResult, ConfigResultExt, ResourceLocation};

#[cfg(feature = "yaml")]
use super::yaml::SaphyrYaml;

/// Returns `true` when every line is blank or a comment.
fn is_blank_document(data: &str, comment: Option<&str>) -> bool {
    data.lines().map(str::trim).all(|line| {
        line.is_empty() || comment.is_some_and(|marker| line.starts_with(marker))
    })
}

/// Parse configuration data according to the resource extension.
///
/// Blank and comment-only documents yield `Ok(None)`.
///
/// # Errors
///
/// Returns a [`ConfigError`](crate::ConfigError) if the contents fail to parse or if the
/// required feature is disabled.
pub(super) fn parse_config_by_format(
    location: &ResourceLocation,
    data: &str,
) -> ConfigResult<Option<ConfigMap>> {
    let ext = location.extension();
    let figment = match ext.as_deref() {
        Some("json") => {
            if is_blank_document(data, None) {
                return Ok(None);
            }
            Figment::from(Json::string(data))
        }
        Some("json5") => {
            if is_blank_document(data, Some("//")) {
                return Ok(None);
            }
            #[cfg(feature = "json5")]
            {
                Figment::from(Json5::string(data))
            }
            #[cfg(not(feature = "json5"))]
            {
                return Err(crate::ConfigError::unsupported_format(location, "json5"));
            }
        }
        Some("yaml" | "yml") => {
            if is_blank_document(data, Some("#")) {
                return Ok(None);
            }
            #[cfg(feature = "yaml")]
            {
                Figment::from(SaphyrYaml::string(location.clone(), data))
            }
            #[cfg(not(feature = "yaml"))]
            {
                return Err(crate::ConfigError::unsupported_format(location, "yaml"));
            }
        }
        _ => {
            if is_blank_document(data, Some("#")) {
                return Ok(None);
            }
            #[cfg(feature = "toml")]
            {
                // Validate TOML first so parse failures are reported with this
                // resource's context before Figment performs its own pass.
                toml::from_str::<toml::Table>(data).or_parse_error(location)?;
                Figment::from(Toml::string(data))
            }
            #[cfg(not(feature = "toml"))]
            {
                return Err(crate::ConfigError::unsupported_format(
                    location,
                    ext.as_deref().unwrap_or("toml"),
                ));
            }
        }
    };

    figment.extract::<ConfigMap>().or_parse_error(location).map(Some)
}
