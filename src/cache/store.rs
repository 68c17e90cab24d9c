// Cache store for reading and writing the star list.
// Handles JSON serialization, freshness checking, and filesystem operations.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::Repository;

/// Maximum age before a cached star list is re-fetched: 1 hour.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(60 * 60);

/// On-disk cache record. The star list is stored as a nested pretty-printed
/// JSON string under `data`, with the write time in epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    #[serde(rename = "timeInserted")]
    pub time_inserted: i64,
    pub data: String,
}

impl CacheRecord {
    /// Create a record for the given star list, stamped with the current time.
    pub fn new(repos: &[Repository]) -> Result<Self> {
        Ok(Self {
            time_inserted: Utc::now().timestamp_millis(),
            data: serde_json::to_string_pretty(repos)?,
        })
    }

    /// Check whether this record is within the freshness window.
    pub fn is_fresh(&self, window: Duration) -> bool {
        Utc::now().timestamp_millis() - self.time_inserted <= window.as_millis() as i64
    }

    /// Deserialize the embedded star list.
    pub fn repositories(&self) -> Result<Vec<Repository>> {
        Ok(serde_json::from_str(&self.data)?)
    }
}

/// Read the cache record from a file, or None if the file does not exist.
pub fn read_record(path: &Path) -> Result<Option<CacheRecord>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let record: CacheRecord = serde_json::from_str(&contents)?;
    Ok(Some(record))
}

/// Read the cached star list, returning None if the file is missing or stale.
/// IO and parse failures are errors; callers treat them as cache misses.
pub fn read_fresh(path: &Path, window: Duration) -> Result<Option<Vec<Repository>>> {
    match read_record(path)? {
        Some(record) if record.is_fresh(window) => Ok(Some(record.repositories()?)),
        _ => Ok(None),
    }
}

/// Write a fresh cache record for the star list, overwriting any prior content.
pub fn write_record(path: &Path, repos: &[Repository]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let record = CacheRecord::new(repos)?;
    let json = serde_json::to_string_pretty(&record)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    use crate::github::{Owner, OwnerType};

    fn sample_repo(name: &str) -> Repository {
        Repository {
            id: 1,
            name: name.to_string(),
            full_name: format!("someone/{name}"),
            owner: Owner {
                id: 2,
                login: "someone".to_string(),
                owner_type: OwnerType::User,
            },
            description: Some("a repo".to_string()),
            stargazers_count: 42,
            forks_count: 7,
            language: Some("Rust".to_string()),
            license: None,
            topics: vec!["cli".to_string()],
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            pushed_at: None,
            html_url: format!("https://github.com/someone/{name}"),
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        let repos = vec![sample_repo("a"), sample_repo("b")];
        write_record(&path, &repos).unwrap();

        let cached = read_fresh(&path, FRESHNESS_WINDOW).unwrap().unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].full_name, "someone/a");
    }

    #[test]
    fn record_field_names_match_the_disk_format() {
        let repos = vec![sample_repo("a")];
        let record = CacheRecord::new(&repos).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"timeInserted\""));
        // The inner list is a pretty-printed JSON string, not a nested array.
        assert!(json.contains("\"data\":\"["));
    }

    #[test]
    fn stale_record_reads_as_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_record(&path, &[sample_repo("a")]).unwrap();

        let mut record = read_record(&path).unwrap().unwrap();
        record.time_inserted -= 2 * FRESHNESS_WINDOW.as_millis() as i64;
        fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        assert!(read_fresh(&path, FRESHNESS_WINDOW).unwrap().is_none());
    }

    #[test]
    fn freshness_follows_the_window() {
        let record = CacheRecord::new(&[]).unwrap();
        assert!(record.is_fresh(FRESHNESS_WINDOW));

        let stale = CacheRecord {
            time_inserted: record.time_inserted - FRESHNESS_WINDOW.as_millis() as i64 - 1_000,
            data: record.data.clone(),
        };
        assert!(!stale.is_fresh(FRESHNESS_WINDOW));
    }

    #[test]
    fn missing_file_reads_as_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");
        assert!(read_fresh(&path, FRESHNESS_WINDOW).unwrap().is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, "not json").unwrap();

        assert!(read_fresh(&path, FRESHNESS_WINDOW).is_err());
    }

    #[test]
    fn write_overwrites_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        write_record(&path, &[sample_repo("old")]).unwrap();
        write_record(&path, &[sample_repo("new"), sample_repo("newer")]).unwrap();

        let cached = read_fresh(&path, FRESHNESS_WINDOW).unwrap().unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].name, "new");
    }
}
