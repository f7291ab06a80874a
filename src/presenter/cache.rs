extern crate log;

use crate::error::{storage_error, Result};
use log::{debug, info};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

mod key;

pub use key::Key;

/// Page cache kept as one file per URL inside a directory.
///
/// Entries never expire; the only way to invalidate them is [`Store::clear`].
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| storage_error(format!("creating cache {}", dir.display()), e))?;
        debug!("Using cache directory {}", dir.display());
        Ok(Self { dir })
    }
    pub fn dir(&self) -> &Path {
        &self.dir
    }
    fn path(&self, key: &Key) -> PathBuf {
        self.dir.join(key.as_str())
    }

    pub fn read(&self, key: &Key) -> Result<Option<String>> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(format!("reading {}", path.display()), e)),
        }
    }
    pub fn write(&self, key: &Key, text: &str) -> Result<()> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| storage_error(format!("creating {}", parent.display()), e))?;
        }
        fs::write(&path, text).map_err(|e| storage_error(format!("writing {}", path.display()), e))
    }
    pub fn clear(&self) -> Result<()> {
        info!("Clearing cache: {}", self.dir.display());
        let entries = match fs::read_dir(&self.dir) {
            Ok(v) => v,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(storage_error(format!("listing {}", self.dir.display()), e)),
        };
        for entry in entries {
            let path = entry
                .map_err(|e| storage_error(format!("listing {}", self.dir.display()), e))?
                .path();
            if path.is_file() {
                fs::remove_file(&path)
                    .map_err(|e| storage_error(format!("removing {}", path.display()), e))?;
            }
        }
        Ok(())
    }
}
