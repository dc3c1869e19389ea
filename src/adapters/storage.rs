use crate::domain::model::StorageResult;
use crate::domain::ports::DataStorage;
use crate::utils::error::Result;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keeps every stored payload in memory and answers with a fixed result.
#[derive(Debug)]
pub struct InMemoryStorage {
    result: StorageResult,
    stored: RefCell<Vec<String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::with_result(StorageResult::Success)
    }

    pub fn with_result(result: StorageResult) -> Self {
        Self {
            result,
            stored: RefCell::new(Vec::new()),
        }
    }

    pub fn stored(&self) -> Vec<String> {
        self.stored.borrow().clone()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage for InMemoryStorage {
    fn store_data(&self, data: &str) -> StorageResult {
        // Recorded even when reporting failure, so callers can inspect the attempt
        self.stored.borrow_mut().push(data.to_string());
        self.result
    }
}

/// Keeps one journal entry per line: `\\`, `\n`, `\r` and `\t` are written escaped.
pub fn escape_payload(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Appends each payload to a journal file as `<rfc3339 timestamp>\t<escaped payload>`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
    file_name: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            file_name: file_name.into(),
        }
    }

    pub fn journal_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(&self.file_name)
    }

    fn append(&self, data: &str) -> Result<PathBuf> {
        let full_path = self.journal_path();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&full_path)?;
        writeln!(
            file,
            "{}\t{}",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            escape_payload(data)
        )?;

        Ok(full_path)
    }
}

impl DataStorage for LocalStorage {
    fn store_data(&self, data: &str) -> StorageResult {
        match self.append(data) {
            Ok(path) => {
                tracing::debug!("Appended {} bytes to {}", data.len(), path.display());
                StorageResult::Success
            }
            Err(e) => {
                tracing::error!(
                    "Failed to write journal {}: {}",
                    self.journal_path().display(),
                    e
                );
                StorageResult::Failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_storage_records_payloads() {
        let storage = InMemoryStorage::with_result(StorageResult::Failure);

        assert_eq!(storage.store_data("a;b"), StorageResult::Failure);
        assert_eq!(storage.stored(), vec!["a;b".to_string()]);
    }

    #[test]
    fn test_local_storage_appends_journal_lines() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let storage = LocalStorage::new(base.to_str().unwrap(), "journal.log");

        assert_eq!(storage.store_data("name;age"), StorageResult::Success);
        assert_eq!(storage.store_data("{'a':1}"), StorageResult::Success);

        let content = fs::read_to_string(storage.journal_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let (timestamp, payload) = lines[0].split_once('\t').unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert_eq!(payload, "name;age");
        assert!(lines[1].ends_with("\t{'a':1}"));
    }

    #[test]
    fn test_local_storage_keeps_multiline_payload_on_one_line() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap(), "journal.log");

        assert_eq!(storage.store_data("a;b\nc;d"), StorageResult::Success);
        assert_eq!(storage.store_data("x\ty\r\nz\\w"), StorageResult::Success);

        let content = fs::read_to_string(storage.journal_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("\ta;b\\nc;d"));
        assert!(lines[1].ends_with("\tx\\ty\\r\\nz\\\\w"));
        assert_eq!(lines[1].matches('\t').count(), 1);
    }

    #[test]
    fn test_escape_payload() {
        assert_eq!(escape_payload("name;age"), "name;age");
        assert_eq!(escape_payload("a\nb"), "a\\nb");
        assert_eq!(escape_payload("\\n"), "\\\\n");
    }

    #[test]
    fn test_local_storage_reports_failure_on_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where a directory is expected
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let storage = LocalStorage::new(blocker.to_str().unwrap(), "journal.log");
        assert_eq!(storage.store_data("payload"), StorageResult::Failure);
    }
}
