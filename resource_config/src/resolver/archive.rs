//! Zip-based archive access for search roots.

use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use zip::ZipArchive;
use zip::result::ZipResult;

fn open(archive: &Utf8Path) -> ZipResult<ZipArchive<File>> {
    let file = File::open(archive)?;
    ZipArchive::new(file)
}

/// Returns `true` when `archive` holds a file entry named `entry`.
pub(super) fn contains_entry(archive: &Utf8Path, entry: &str) -> ZipResult<bool> {
    let zip = open(archive)?;
    let found = zip.file_names().any(|name| name == entry);
    Ok(found)
}

/// Reads `entry` from `archive` in full.
pub(super) fn read_entry(archive: &Utf8Path, entry: &str) -> ZipResult<Vec<u8>> {
    let mut zip = open(archive)?;
    let mut file = zip.by_name(entry)?;
    let mut contents = Vec::with_capacity(usize::try_from(file.size()).unwrap_or_default());
    file.read_to_end(&mut contents)?;
    Ok(contents)
}
