//! Persisted user preferences.
//!
//! Two booleans survive restarts: the dark-mode theme and the collapsed
//! sidebar. They are stored as stringified booleans in a small JSON map so
//! the on-disk keys match what the backend and the web front end use.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DARK_MODE: &str = "darkMode";
pub const SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";

const MYPROMPT_DIR: &str = ".myprompt";
const PREFS_FILE: &str = "prefs.json";

/// Key-value store for preferences. Values are stringified booleans
/// (`"true"` / `"false"`); a missing key means the default applies.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and `--no-persist` runs.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store under the user's home directory.
///
/// Persistence is best effort: if the home directory cannot be resolved or
/// file I/O fails, reads fall back to the in-memory map and writes stop
/// reaching disk. The session keeps working either way.
#[derive(Debug)]
pub struct FilePrefs {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl FilePrefs {
    /// Open the default store at `~/.myprompt/prefs.json`.
    pub fn open() -> Self {
        match dirs::home_dir() {
            Some(home) => Self::open_at(home.join(MYPROMPT_DIR).join(PREFS_FILE)),
            None => {
                tracing::debug!("home directory unavailable, preferences will not persist");
                Self::detached()
            }
        }
    }

    /// Open a store backed by an explicit file.
    pub fn open_at(path: PathBuf) -> Self {
        let values = Self::load(&path);
        Self {
            path: Some(path),
            values,
        }
    }

    /// A store with no backing file at all.
    pub fn detached() -> Self {
        Self {
            path: None,
            values: HashMap::new(),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::debug!("ignoring unreadable preference file {}: {e}", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }

    fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(&self.values).unwrap_or_default();
            fs::write(path, content)
        };
        if let Err(e) = write() {
            tracing::debug!("failed to persist preferences to {}: {e}", path.display());
        }
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}
