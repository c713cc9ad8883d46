//! Parsed configuration fragments and their explicit ordering hint.

mod order;

use serde::Serialize;

use crate::{ConfigMap, ResourceLocation};

pub(crate) use order::extract_order;

/// Key consulted for a fragment's explicit order unless overridden with
/// [`ConfigLoader::with_order_key`](crate::ConfigLoader::with_order_key).
pub const DEFAULT_ORDER_KEY: &str = "config-order";

/// Order assigned to fragments that do not declare one.
pub const DEFAULT_ORDER: i32 = 0;

/// One parsed configuration fragment together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigModel {
    location: ResourceLocation,
    config: ConfigMap,
    order: i32,
}

impl ConfigModel {
    /// Builds a model from already-decoded content.
    #[must_use]
    pub const fn new(location: ResourceLocation, config: ConfigMap, order: i32) -> Self {
        Self {
            location,
            config,
            order,
        }
    }

    /// Where the fragment was loaded from.
    #[must_use]
    pub const fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// Decoded content. Empty for blank or comment-only resources.
    #[must_use]
    pub const fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Explicit order declared by the fragment, or [`DEFAULT_ORDER`].
    #[must_use]
    pub const fn order(&self) -> i32 {
        self.order
    }

    /// Consumes the model, returning its content.
    #[must_use]
    pub fn into_config(self) -> ConfigMap {
        self.config
    }
}
