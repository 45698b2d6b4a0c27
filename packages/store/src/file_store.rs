//! # Filesystem-backed record storage
//!
//! [`FileStorage`] is a [`RecordStorage`] implementation that keeps each record
//! in its own file. It is used by the desktop shell to retain the portfolio
//! across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── portfolio-data.json     # the document record
//! └── portfolio-theme.json    # theme preference
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/portfolio/` |
//! | Linux | `~/.local/share/portfolio/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\portfolio\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;
use crate::storage::RecordStorage;

/// Filesystem-backed RecordStorage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl RecordStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.record_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Written to `<key>.json.tmp` first and renamed over the record, so an
    /// interrupted write leaves the previous record intact.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.base)?;
        let path = self.record_path(key);
        let staged = path.with_extension("json.tmp");
        std::fs::write(&staged, value)?;
        std::fs::rename(&staged, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillDraft;
    use crate::store::PortfolioStore;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = scratch_dir("roundtrip");

        let mut store = PortfolioStore::open(FileStorage::new(dir.clone()));
        let skill = store
            .add_skill(SkillDraft {
                name: "Rust".to_string(),
                level: 80,
            })
            .unwrap();

        // Re-open from same directory
        let reopened = PortfolioStore::open(FileStorage::new(dir.clone()));
        assert_eq!(reopened.document(), store.document());
        assert_eq!(reopened.skill(&skill.id), Some(&skill));

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_record_reads_none() {
        let dir = scratch_dir("missing");
        let storage = FileStorage::new(dir.clone());

        assert!(storage.read("portfolio-data").unwrap().is_none());
        storage.remove("portfolio-data").unwrap();

        storage.write("portfolio-data", "{}").unwrap();
        assert!(dir.join("portfolio-data.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_replaces_record_without_leftovers() {
        let dir = scratch_dir("replace");
        let storage = FileStorage::new(dir.clone());

        storage.write("portfolio-data", "first").unwrap();
        storage.write("portfolio-data", "second").unwrap();
        assert_eq!(
            storage.read("portfolio-data").unwrap().as_deref(),
            Some("second")
        );
        assert!(!dir.join("portfolio-data.json.tmp").exists());

        // A staged file left by an interrupted write does not touch the record
        std::fs::write(dir.join("portfolio-data.json.tmp"), "{ half").unwrap();
        assert_eq!(
            storage.read("portfolio-data").unwrap().as_deref(),
            Some("second")
        );
        storage.write("portfolio-data", "third").unwrap();
        assert_eq!(
            storage.read("portfolio-data").unwrap().as_deref(),
            Some("third")
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
