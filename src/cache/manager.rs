//! Cache manager for persisting the day's raw API response to disk
//!
//! Provides a `DayCache` that stores the raw response body under a
//! per-calendar-day filename, so repeated invocations on the same day can
//! skip the network entirely.

use chrono::{Local, NaiveDate};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Name of the cache directory, rooted next to the running executable
const CACHE_DIR_NAME: &str = ".verse";

/// Errors that can occur when accessing the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache directory could not be created
    #[error("failed to create cache directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    /// An existing cache entry could not be read
    #[error("failed to read cache entry {path}: {source}")]
    ReadEntry { path: PathBuf, source: io::Error },
}

/// Cache key identifying one calendar day, formatted `YYYYMMDD`
///
/// Computed from the local date at the start of a resolution and passed
/// explicitly, so callers can inject a fixed date in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKey(String);

impl DateKey {
    /// Returns the key for today's local calendar date
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Returns the key for a specific calendar date
    pub fn for_date(date: NaiveDate) -> Self {
        DateKey(date.format("%Y%m%d").to_string())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Manages reading and writing the day's raw response bytes to disk
///
/// The cache stores one file per calendar day, named by its `DateKey`, inside
/// a `.verse` directory next to the running executable. Files hold the raw
/// response body verbatim; the date-stamped filename is the entire expiry
/// policy, so entries never need cleanup.
#[derive(Debug, Clone)]
pub struct DayCache {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl DayCache {
    /// Creates a DayCache rooted next to the running executable
    ///
    /// Resolves the executable's directory and joins the `.verse` directory
    /// onto it. Fails if the executable path cannot be determined.
    pub fn beside_executable() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            )
        })?;
        Ok(Self {
            cache_dir: dir.join(CACHE_DIR_NAME),
        })
    }

    /// Creates a DayCache with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to the cache file for the given day
    fn entry_path(&self, key: &DateKey) -> PathBuf {
        self.cache_dir.join(key.as_str())
    }

    /// Ensures the cache directory exists, creating it if absent
    pub fn ensure_dir(&self) -> Result<(), CacheError> {
        fs::create_dir_all(&self.cache_dir).map_err(|source| CacheError::CreateDir {
            path: self.cache_dir.clone(),
            source,
        })
    }

    /// Reads the cached response bytes for the given day
    ///
    /// # Arguments
    /// * `key` - The day to look up
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` if the entry exists and was read in full
    /// * `Ok(None)` if no entry exists for the given day
    /// * `Err(CacheError)` if the entry exists but could not be read
    pub fn read(&self, key: &DateKey) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read(&path)
            .map(Some)
            .map_err(|source| CacheError::ReadEntry { path, source })
    }

    /// Writes the day's response bytes, overwriting any existing entry
    ///
    /// Callers treat failure here as non-fatal; caching is an optimization,
    /// not a correctness requirement.
    pub fn write(&self, key: &DateKey, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;
        fs::write(self.entry_path(key), bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_cache() -> (DayCache, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = DayCache::with_dir(temp_dir.path().to_path_buf());
        (cache, temp_dir)
    }

    fn test_key() -> DateKey {
        DateKey::for_date(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap())
    }

    #[test]
    fn test_date_key_formats_as_yyyymmdd() {
        let key = DateKey::for_date(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
        assert_eq!(key.as_str(), "20260805");

        let key = DateKey::for_date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(key.as_str(), "19991231");
    }

    #[test]
    fn test_date_key_today_is_eight_digits() {
        let key = DateKey::today();
        assert_eq!(key.as_str().len(), 8);
        assert!(key.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_date_key_display_matches_as_str() {
        let key = test_key();
        assert_eq!(format!("{}", key), key.as_str());
    }

    #[test]
    fn test_read_returns_none_for_missing_entry() {
        let (cache, _temp_dir) = create_test_cache();

        let result = cache.read(&test_key()).expect("Read should not fail");

        assert!(result.is_none(), "Should return None for missing entry");
    }

    #[test]
    fn test_write_then_read_returns_identical_bytes() {
        let (cache, temp_dir) = create_test_cache();
        let body = br#"[{"bookname":"John","chapter":"3","verse":"16","text":"For God so loved..."}]"#;

        cache.write(&test_key(), body).expect("Write should succeed");

        let expected_path = temp_dir.path().join("20260805");
        assert!(expected_path.exists(), "Cache file should be named by date key");

        let result = cache
            .read(&test_key())
            .expect("Read should not fail")
            .expect("Entry should exist after write");
        assert_eq!(result, body.to_vec(), "Bytes should round-trip verbatim");
    }

    #[test]
    fn test_write_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested_path = temp_dir.path().join("nested").join("cache").join("dir");
        let cache = DayCache::with_dir(nested_path.clone());

        cache.write(&test_key(), b"data").expect("Write should succeed");

        assert!(nested_path.exists(), "Nested directory should be created");
        assert!(nested_path.join("20260805").exists(), "Cache file should exist");
    }

    #[test]
    fn test_overwrite_existing_entry() {
        let (cache, _temp_dir) = create_test_cache();

        cache.write(&test_key(), b"first").expect("First write should succeed");
        cache.write(&test_key(), b"second").expect("Second write should succeed");

        let result = cache
            .read(&test_key())
            .expect("Read should not fail")
            .expect("Entry should exist");
        assert_eq!(result, b"second".to_vec(), "Cache should contain latest bytes");
    }

    #[test]
    fn test_entries_for_other_days_are_not_read() {
        let (cache, _temp_dir) = create_test_cache();
        let yesterday = DateKey::for_date(NaiveDate::from_ymd_opt(2026, 8, 4).unwrap());

        cache.write(&yesterday, b"stale").expect("Write should succeed");

        let result = cache.read(&test_key()).expect("Read should not fail");
        assert!(result.is_none(), "A different day's entry should not be returned");
    }

    #[test]
    fn test_ensure_dir_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().join("fresh");
        let cache = DayCache::with_dir(dir.clone());

        cache.ensure_dir().expect("ensure_dir should succeed");

        assert!(dir.exists(), "Directory should be created");
    }

    #[test]
    fn test_read_fails_for_unreadable_entry() {
        let (cache, temp_dir) = create_test_cache();

        // A directory where the entry file should be makes the read fail
        std::fs::create_dir_all(temp_dir.path().join("20260805"))
            .expect("Failed to create blocking directory");

        let result = cache.read(&test_key());
        assert!(matches!(result, Err(CacheError::ReadEntry { .. })));
    }

    #[test]
    fn test_beside_executable_uses_verse_directory() {
        let cache = DayCache::beside_executable().expect("Executable path should resolve");
        assert!(
            cache.cache_dir.ends_with(".verse"),
            "Cache directory should be the .verse dir next to the executable"
        );
    }
}
