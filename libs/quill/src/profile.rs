use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Per-user state that survives between invocations: the one account
/// adopted at connection time. Replaced wholesale on reconnect, never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub account: Address,
}

/// JSON-file backed profile storage.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user's home directory.
    pub fn default_path() -> PathBuf {
        let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
        home.join(".quill").join("profile.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means "never connected", not an error.
    pub fn load(&self) -> Result<Option<Profile>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn save(&self, profile: &Profile) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(profile)?)?;
        Ok(())
    }
}
