//! Loads same-named configuration resources and orders them by precedence.
//!
//! A resource name such as `app.yaml` may exist in several places at once: a
//! bundled archive shipping defaults, a deployment directory holding
//! environment-specific overrides, an embedded copy compiled into the binary.
//! [`ConfigLoader`] asks a [`ResourceResolver`] for every match, decodes each
//! through a [`ConfigFormat`], and records the result as a [`ConfigModel`].
//!
//! Calling [`ConfigLoader::sort`] puts the models into layering order:
//! archived resources first, then ascending explicit order (the
//! `config-order` key by default), then discovery order. Consumers merge the
//! sorted list front to back so that later models override earlier ones.
//!
//! ```rust,no_run
//! use resource_config::{ConfigLoader, ExtensionFormat, SearchPath};
//!
//! # fn run() -> resource_config::ConfigResult<()> {
//! let search_path = SearchPath::builder()
//!     .add_root("vendor/defaults.jar")
//!     .add_root("/etc/my-service")
//!     .env_var("MY_SERVICE_CONFIG_PATH")
//!     .build();
//! let mut loader = ConfigLoader::new(search_path, ExtensionFormat);
//! loader.load("service.yaml")?;
//! loader.sort();
//! for model in loader.models() {
//!     println!("{} (order {})", model.location(), model.order());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
pub mod format;
mod loader;
mod location;
mod model;
pub mod resolver;
mod result_ext;

pub use error::{ConfigError, ErrorKind};
pub use format::{ConfigFormat, ExtensionFormat};
pub use loader::ConfigLoader;
pub use location::ResourceLocation;
pub use model::{ConfigModel, DEFAULT_ORDER, DEFAULT_ORDER_KEY};
pub use resolver::{MemoryResolver, ResourceResolver, SearchPath, SearchPathBuilder};
pub use result_ext::ConfigResultExt;

/// Parsed content of a single configuration resource.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Result type used throughout the crate.
///
/// Errors are shared behind an [`Arc`](std::sync::Arc) so they can be cloned
/// into diagnostics without losing their source chain.
pub type ConfigResult<T> = Result<T, std::sync::Arc<ConfigError>>;
