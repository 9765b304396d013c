//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ContactError;

/// Map an I/O failure on `path` to a storage error naming the action
fn storage_error<'a>(action: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> ContactError + 'a {
    move |e| ContactError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ContactError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path)(e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        ContactError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically
///
/// Data goes to a sibling `.json.tmp` file which is synced and then renamed
/// over the target, so the target is either fully replaced or untouched.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ContactError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(storage_error("create directory", parent))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let result = write_synced(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(storage_error("replace", path))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), ContactError> {
    let file = File::create(temp_path).map_err(storage_error("create", temp_path))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| {
        ContactError::Storage(format!("Failed to serialize {}: {}", temp_path.display(), e))
    })?;
    writer.flush().map_err(storage_error("flush", temp_path))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(storage_error("sync", temp_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        phones: Vec<String>,
    }

    fn sample() -> TestData {
        TestData {
            name: "Alice".to_string(),
            phones: vec!["1234567890".to_string()],
        }
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_replace_names_target_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let path = temp_dir.path().join("contacts.json");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let err = write_json_atomic(&path, &sample()).unwrap_err();
        match err {
            ContactError::Storage(message) => {
                assert!(message.starts_with("Failed to replace"));
                assert!(message.contains("contacts.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!temp_dir.path().join("contacts.json.tmp").exists());
    }

    #[test]
    fn test_read_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = read_json::<TestData, _>(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ContactError::Storage(_)));
    }

    #[test]
    fn test_read_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, ContactError::Storage(_)));
    }
}
