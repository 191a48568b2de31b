//! JSON storage connection: data directory and file path management.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the document holding every member record
const MEMBERS_FILE_NAME: &str = "family_members.json";

/// JsonConnection manages the data directory the member document lives in
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new JSON connection in the default data directory
    /// (~/Documents/Family Birthdays)
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let documents_dir = PathBuf::from(home_dir).join("Documents");
        Self::new(documents_dir.join("Family Birthdays"))
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path of the member document
    pub fn members_file_path(&self) -> PathBuf {
        self.base_directory.join(MEMBERS_FILE_NAME)
    }
}
