//! Temporary resource roots for resolver and loader tests.
//!
//! A [`ResourceTree`] owns a temporary directory. Loose resources are plain
//! files beneath it; packaged resources are entries of zip archives written
//! into it. The directory is removed when the tree is dropped.
//!
//! # Examples
//!
//! ```
//! use test_helpers::ResourceTree;
//!
//! # fn run() -> anyhow::Result<()> {
//! let tree = ResourceTree::new()?;
//! let loose = tree.write_file("config/app.toml", "config-order = 1")?;
//! let jar = tree.write_archive("lib/defaults.jar", [("app.toml", "config-order = 5")])?;
//! assert!(loose.is_file() && jar.is_file());
//! # Ok(())
//! # }
//! # run().unwrap_or_else(|err| panic!("{err}"));
//! ```

use std::fs::{self, File};
use std::io::Write;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Temporary directory populated with configuration resources.
#[derive(Debug)]
pub struct ResourceTree {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ResourceTree {
    /// Creates an empty tree in a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create resource tree directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("temporary directory is not UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Absolute path of the tree root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Resolves `relative` against the root without touching the filesystem.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Creates the directory `relative` (and its parents).
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn dir(&self, relative: &str) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        fs::create_dir_all(&path).with_context(|| format!("create directory {path}"))?;
        Ok(path)
    }

    /// Writes a loose file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parents cannot be written.
    pub fn write_file(&self, relative: &str, contents: impl AsRef<[u8]>) -> Result<Utf8PathBuf> {
        let path = self.path(relative);
        Self::create_parent(&path)?;
        fs::write(&path, contents).with_context(|| format!("write resource file {path}"))?;
        Ok(path)
    }

    /// Writes a zip archive holding `entries` as `(name, contents)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be created or written.
    pub fn write_archive<I, N, C>(&self, relative: &str, entries: I) -> Result<Utf8PathBuf>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<[u8]>,
    {
        let path = self.path(relative);
        Self::create_parent(&path)?;
        let file = File::create(&path).with_context(|| format!("create archive {path}"))?;
        let mut writer = ZipWriter::new(file);
        for (name, contents) in entries {
            let entry = name.as_ref();
            writer
                .start_file(entry, SimpleFileOptions::default())
                .with_context(|| format!("start entry {entry} in {path}"))?;
            writer
                .write_all(contents.as_ref())
                .with_context(|| format!("write entry {entry} in {path}"))?;
        }
        writer
            .finish()
            .with_context(|| format!("finish archive {path}"))?;
        Ok(path)
    }

    fn create_parent(path: &Utf8Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent directory {parent}"))?;
        }
        Ok(())
    }
}
