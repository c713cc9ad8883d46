//! The loading session that turns resource names into ordered models.

mod sort;

use std::fmt;

use tracing::{debug, info};

use crate::model::extract_order;
use crate::{
    ConfigFormat, ConfigModel, ConfigResult, DEFAULT_ORDER_KEY, ResourceLocation,
    ResourceResolver,
};

/// Loads every location of a resource and keeps the resulting models.
///
/// The loader owns its models for the lifetime of a loading session. Models
/// are appended in discovery order by [`load`](Self::load) and reordered by
/// [`sort`](Self::sort).
///
/// # Examples
///
/// ```rust
/// use resource_config::{ConfigLoader, ExtensionFormat, MemoryResolver, ResourceLocation};
///
/// # fn run() -> resource_config::ConfigResult<()> {
/// let resolver = MemoryResolver::new()
///     .with(ResourceLocation::file("local/app.toml"), "config-order = 1")
///     .with(ResourceLocation::archive("defaults.jar", "app.toml"), "config-order = 5");
/// let mut loader = ConfigLoader::new(resolver, ExtensionFormat);
/// loader.load("app.toml")?;
/// loader.sort();
/// let orders: Vec<i32> = loader.models().iter().map(|m| m.order()).collect();
/// assert_eq!(orders, [5, 1]);
/// # Ok(())
/// # }
/// # run().unwrap_or_else(|err| panic!("{err}"));
/// ```
pub struct ConfigLoader<R, F> {
    resolver: R,
    format: F,
    order_key: String,
    models: Vec<ConfigModel>,
}

impl<R, F> ConfigLoader<R, F>
where
    R: ResourceResolver,
    F: ConfigFormat,
{
    /// Creates an empty loader reading the order from
    /// [`DEFAULT_ORDER_KEY`].
    #[must_use]
    pub fn new(resolver: R, format: F) -> Self {
        Self {
            resolver,
            format,
            order_key: DEFAULT_ORDER_KEY.to_owned(),
            models: Vec::new(),
        }
    }

    /// Builder-style variant of [`set_order_key`](Self::set_order_key).
    #[must_use]
    pub fn with_order_key(mut self, key: impl Into<String>) -> Self {
        self.set_order_key(key);
        self
    }

    /// Changes the key consulted for explicit order.
    ///
    /// Only models loaded afterwards are affected; models already held keep
    /// the order they were loaded with.
    pub fn set_order_key(&mut self, key: impl Into<String>) {
        self.order_key = key.into();
    }

    /// Key currently consulted for explicit order.
    #[must_use]
    pub fn order_key(&self) -> &str {
        &self.order_key
    }

    /// Models in their current order.
    #[must_use]
    pub fn models(&self) -> &[ConfigModel] {
        &self.models
    }

    /// Ends the session, returning the models in their current order.
    #[must_use]
    pub fn into_models(self) -> Vec<ConfigModel> {
        self.models
    }

    /// Loads every location of `resource_name` and appends the models in
    /// discovery order.
    ///
    /// Finding no location is not an error and appends nothing.
    ///
    /// # Errors
    ///
    /// Returns the first resolution, read or parse failure. Models appended
    /// for earlier locations of the same call are kept.
    pub fn load(&mut self, resource_name: &str) -> ConfigResult<()> {
        let locations = self.resolver.find_resources(resource_name)?;
        debug!(
            resource = resource_name,
            count = locations.len(),
            "resolved resource locations"
        );
        let before = self.models.len();
        for location in locations {
            let model = self.load_location(location)?;
            self.models.push(model);
        }
        info!(
            resource = resource_name,
            loaded = self.models.len() - before,
            total = self.models.len(),
            "loaded configuration resources"
        );
        Ok(())
    }

    /// Loads a single location without recording it.
    ///
    /// Empty and comment-only content yields a model with an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns an error when the location cannot be read, its content cannot
    /// be decoded, or its explicit order is not an integer.
    pub fn load_location(&self, location: ResourceLocation) -> ConfigResult<ConfigModel> {
        let bytes = self.resolver.fetch(&location)?;
        let config = self
            .format
            .load_data(&location, &bytes)?
            .unwrap_or_default();
        let order = extract_order(&config, &self.order_key, &location)?;
        debug!(%location, order, keys = config.len(), "loaded configuration model");
        Ok(ConfigModel::new(location, config, order))
    }

    /// Reorders the models into layering precedence.
    ///
    /// Archived resources come first, then lower explicit order, then earlier
    /// discovery. Sorting an already sorted list leaves it unchanged.
    pub fn sort(&mut self) {
        sort::sort_by_precedence(&mut self.models);
        debug!(
            order = ?self
                .models
                .iter()
                .map(|model| model.location().to_string())
                .collect::<Vec<_>>(),
            "sorted configuration models"
        );
    }
}

impl<R, F> fmt::Debug for ConfigLoader<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("order_key", &self.order_key)
            .field("models", &self.models)
            .finish_non_exhaustive()
    }
}
