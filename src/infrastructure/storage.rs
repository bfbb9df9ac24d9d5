//! Key-value persistence backed by the file system

use crate::error::{MoodlogError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Key used for the serialized entry collection
pub const ENTRIES_KEY: &str = "journal_entries";
/// Key used for the streak snapshot mirror
pub const STREAK_KEY: &str = "streak";
/// Key used for the last-entry-date snapshot mirror
pub const LAST_ENTRY_DATE_KEY: &str = "last_entry_date";

/// Abstract key-value persistence collaborator.
///
/// The in-memory state stays authoritative for the session; saves are
/// full-state snapshots, so a superseded save is safe to let race.
pub trait KeyValueStore {
    /// Load a serialized blob, `None` when the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Save a serialized blob under a key, overwriting any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// File system store: each key is a file under `.moodlog/`
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given journal directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the journal root.
    /// First checks the MOODLOG_ROOT environment variable, then walks up
    /// from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodlogError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }

    /// Check if this root has been initialized
    pub fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    /// Create the .moodlog directory structure
    pub fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(".moodlog").join(key)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path).map(Some).map_err(MoodlogError::Io)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, value).map_err(MoodlogError::Io)
    }
}

/// In-memory store for unit tests
#[cfg(test)]
pub mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub values: RefCell<HashMap<String, String>>,
        pub fail_saves: bool,
    }

    impl KeyValueStore for MemoryStore {
        fn load(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<()> {
            if self.fail_saves {
                return Err(MoodlogError::Config("save failed".to_string()));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_absent_key() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert_eq!(store.load("missing").unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        store.save(STREAK_KEY, "5").unwrap();
        assert_eq!(store.load(STREAK_KEY).unwrap(), Some("5".to_string()));

        // Overwrite wins
        store.save(STREAK_KEY, "6").unwrap();
        assert_eq!(store.load(STREAK_KEY).unwrap(), Some("6".to_string()));
    }

    #[test]
    fn test_initialize() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        assert!(!store.is_initialized());
        store.initialize().unwrap();
        assert!(store.is_initialized());
        assert!(temp.path().join(".moodlog").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        store.initialize().unwrap();
        assert!(store.initialize().is_err());
    }

    #[test]
    fn test_discover_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();

        let nested = temp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = FileStore::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_from_uninitialized_fails() {
        let temp = TempDir::new().unwrap();
        let result = FileStore::discover_from(temp.path());
        assert!(matches!(
            result,
            Err(MoodlogError::NotJournalDirectory(_))
        ));
    }
}
