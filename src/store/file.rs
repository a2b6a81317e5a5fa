//! File-backed store
//!
//! Persists each item key as `{data_dir}/{key}.json`, written via a
//! temporary file and rename so readers never observe a partial value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Backing;

/// Store backed by one file per item key
pub struct FileBacking {
    data_dir: PathBuf,
}

impl FileBacking {
    /// Open or create a file-backed store rooted at `path`
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)?;

        Ok(Self {
            data_dir: path.to_path_buf(),
        })
    }

    /// Path of the file holding `key`
    ///
    /// Item keys come from configuration, not user input, but path
    /// separators are still mapped away so a key can never escape the
    /// data directory.
    fn item_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => c,
                _ => '_',
            })
            .collect();

        self.data_dir.join(format!("{}.json", file_stem))
    }

    /// Root directory of this store
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Backing for FileBacking {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.item_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key);
        let tmp_path = path.with_extension("json.tmp");

        // Write-then-rename keeps the previous value intact on failure
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }
}
