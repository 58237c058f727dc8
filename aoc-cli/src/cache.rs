//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Get cached input or None if not cached
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(year, day);
        if path.is_file() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Store input in cache
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        fs::write(self.cache_path(year, day), input)?;
        Ok(())
    }
}
