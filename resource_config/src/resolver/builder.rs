//! Builder for [`SearchPath`] resolvers.
//!
//! The builder lets applications list explicit roots, pull further roots from
//! an environment variable, and decide which extensions mark a root as an
//! archive before producing the [`SearchPath`] that drives the search order.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::warn;

use super::{SearchPath, SearchRoot};

/// Builder for [`SearchPath`].
///
/// # Examples
///
/// ```rust
/// use resource_config::resolver::{SearchPath, SearchRoot};
///
/// let search_path = SearchPath::builder()
///     .roots(["lib/defaults.jar", "config", "config"])
///     .build();
/// assert_eq!(
///     search_path.roots(),
///     &[
///         SearchRoot::Archive("lib/defaults.jar".into()),
///         SearchRoot::Directory("config".into()),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SearchPathBuilder {
    roots: Vec<Utf8PathBuf>,
    env_var: Option<String>,
    archive_extensions: Vec<String>,
}

impl Default for SearchPathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPathBuilder {
    /// Creates a builder with no roots that treats `jar`, `zip` and `war`
    /// files as archives.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            env_var: None,
            archive_extensions: ["jar", "zip", "war"].map(String::from).to_vec(),
        }
    }

    /// Appends a root searched after those already added.
    #[must_use]
    pub fn add_root(mut self, root: impl Into<Utf8PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Replaces the explicit roots.
    #[must_use]
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Removes all explicit roots from the builder.
    #[must_use]
    pub fn clear_roots(mut self) -> Self {
        self.roots.clear();
        self
    }

    /// Sets an environment variable holding extra roots.
    ///
    /// The variable uses the platform path-list syntax (`:`-separated on Unix,
    /// `;` on Windows). Its roots are searched after the explicit ones and
    /// the variable is read when [`build`](Self::build) runs.
    #[must_use]
    pub fn env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = Some(env_var.into());
        self
    }

    /// Replaces the extensions that mark a root as an archive.
    #[must_use]
    pub fn archive_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.archive_extensions = extensions
            .into_iter()
            .map(|ext| ext.into().to_ascii_lowercase())
            .collect();
        self
    }

    fn env_roots(&self) -> Vec<Utf8PathBuf> {
        let Some(value) = self.env_var.as_deref().and_then(std::env::var_os) else {
            return Vec::new();
        };
        std::env::split_paths(&value)
            .filter(|path| !path.as_os_str().is_empty())
            .filter_map(|path| {
                Utf8PathBuf::from_path_buf(path)
                    .inspect_err(|non_utf8| {
                        warn!(path = %non_utf8.display(), "skipping non UTF-8 search root");
                    })
                    .ok()
            })
            .collect()
    }

    fn classify(&self, path: Utf8PathBuf) -> SearchRoot {
        let is_archive = path
            .extension()
            .map(str::to_ascii_lowercase)
            .is_some_and(|ext| self.archive_extensions.contains(&ext));
        if is_archive {
            SearchRoot::Archive(path)
        } else {
            SearchRoot::Directory(path)
        }
    }

    fn push_unique(roots: &mut Vec<SearchRoot>, seen: &mut HashSet<Utf8PathBuf>, root: SearchRoot) {
        if root.path() == Utf8Path::new("") {
            return;
        }
        if seen.insert(root.path().to_path_buf()) {
            roots.push(root);
        }
    }

    /// Builds the [`SearchPath`], dropping duplicate roots.
    #[must_use]
    pub fn build(self) -> SearchPath {
        let env_roots = self.env_roots();
        let mut roots = Vec::new();
        let mut seen = HashSet::new();
        for path in self.roots.iter().cloned().chain(env_roots) {
            Self::push_unique(&mut roots, &mut seen, self.classify(path));
        }
        SearchPath::from_roots(roots)
    }
}
