/*!
 * Metadata collection for a listing target
 */

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{IoResultExt, Result};
use crate::owners::NameResolver;
use crate::types::Entry;

/// Collects the entries of one listing
pub struct Scanner<'a, R: NameResolver> {
    /// Scanner configuration
    config: &'a Config,
    /// Owner and group lookup
    names: &'a R,
}

impl<'a, R: NameResolver> Scanner<'a, R> {
    /// Create a new scanner
    pub fn new(config: &'a Config, names: &'a R) -> Self {
        Self { config, names }
    }

    /// Collect every entry of the target, in display order.
    ///
    /// Fails as a whole if any single entry cannot be read.
    pub fn scan(&self) -> Result<Vec<Entry>> {
        let target = &self.config.target;

        if !target.is_dir() {
            let name = target.to_string_lossy().into_owned();
            return Ok(vec![self.read_entry(name, target.clone())?]);
        }

        self.entry_names(target)?
            .into_iter()
            .map(|(name, file_name)| self.read_entry(name, target.join(file_name)))
            .collect()
    }

    /// Names to list for a directory, filtered and sorted.
    ///
    /// Each display name is paired with the raw file name, which is what
    /// gets joined onto the directory; the two differ for non-UTF-8 names.
    fn entry_names(&self, dir: &Path) -> Result<Vec<(String, OsString)>> {
        let mut names: Vec<(String, OsString)> = [".", ".."]
            .iter()
            .map(|&dot| (dot.to_string(), OsString::from(dot)))
            .collect();
        for entry in fs::read_dir(dir).at_path(dir)? {
            let file_name = entry.at_path(dir)?.file_name();
            names.push((file_name.to_string_lossy().into_owned(), file_name));
        }

        if !self.config.show_hidden {
            names.retain(|(name, _)| !name.starts_with('.'));
        }

        sort_by_name(&mut names, |(name, _)| name.as_str());
        Ok(names)
    }

    /// Read the metadata of one entry
    fn read_entry(&self, name: String, path: PathBuf) -> Result<Entry> {
        let metadata = fs::metadata(&path).at_path(&path)?;

        Ok(Entry {
            name,
            mode: metadata.mode(),
            link_count: metadata.nlink(),
            owner_name: self.names.user_name(metadata.uid())?,
            group_name: self.names.group_name(metadata.gid())?,
            size_bytes: metadata.size(),
            modified_time: metadata.modified().at_path(&path)?,
            path,
        })
    }
}

/// Sort by lowercased name, keeping the input order of equal keys
pub fn sort_by_name<T, F>(items: &mut [T], name: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| name(item).to_lowercase());
}

/// Whether a directory has no children
pub fn is_empty_dir(path: &Path) -> std::io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
