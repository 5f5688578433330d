//! Isolated test environment with temp directory.

// Allow dead code since not every test file uses every helper
#![allow(dead_code)]

use super::{NotesCommand, TestNote};
use notepad::domain::{Note, NoteCollection};
use notepad::store::{FileStore, NOTES_KEY, load, save};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// binary's home directory also points inside it, so a developer's own
/// config file never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the data directory passed via `--dir`
    data_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(temp_dir.path().join("home")).expect("Failed to create home");
        Self { temp_dir, data_dir }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the fake home directory used by spawned commands.
    pub fn home_dir(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Returns the path of the persisted note collection.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(format!("{NOTES_KEY}.json"))
    }

    /// Writes `notes` as the persisted collection, in the given order.
    pub fn seed(&self, notes: &[TestNote]) {
        let mut store = FileStore::open(&self.data_dir).expect("Failed to open store");
        let collection = NoteCollection::restore(notes.iter().map(TestNote::to_note).collect());
        save(&mut store, &collection).expect("Failed to seed notes");
    }

    /// Writes raw text as the persisted collection.
    pub fn seed_raw(&self, raw: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.store_path(), raw).expect("Failed to write store");
    }

    /// Reads the persisted collection back.
    pub fn read_notes(&self) -> Vec<Note> {
        let store = FileStore::open(&self.data_dir).expect("Failed to open store");
        load(&store).notes().to_vec()
    }

    /// Writes a file outside the data directory and returns its path.
    ///
    /// Useful for editor replacement text and config files.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .home(&self.home_dir())
            .dir(&self.data_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            assert!(env.home_dir().is_dir());
            env.home_dir()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_store_path() {
        let env = TestEnv::new();
        assert!(env.store_path().ends_with("data/notes.json"));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }

    #[test]
    fn test_env_seed_round_trips_order() {
        let env = TestEnv::new();
        env.seed(&[
            TestNote::new("First").id("A"),
            TestNote::new("Second").id("B"),
        ]);

        assert!(env.store_path().exists());
        let titles: Vec<String> = env
            .read_notes()
            .iter()
            .map(|n| n.title().to_string())
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_env_read_notes_without_store_is_empty() {
        let env = TestEnv::new();
        assert!(env.read_notes().is_empty());
    }
}
