//! Key/value settings persistence for the selection workflow.
//!
//! The workflow reads and writes two platform-scoped keys: the configured
//! profiles mapping and the default profile name. The storage engine itself
//! is an external collaborator behind the [`ConfigStore`] trait; this module
//! ships a YAML-file-backed implementation and an in-memory one for tests
//! and embedding.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde_yaml_ng::Value;

use crate::error::PickError;
use crate::profile::ProfileDefinition;

// ============================================================================
// Platform scoping
// ============================================================================

/// Platform a settings key is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// The platform the crate was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Key segment used to platform-scope settings keys.
    pub fn key_segment(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "osx",
            Platform::Windows => "windows",
        }
    }
}

/// Prefix of the platform-scoped configured-profiles mapping key.
pub const PROFILES_KEY_PREFIX: &str = "terminal.profiles.";

/// Prefix of the platform-scoped default-profile key.
pub const DEFAULT_PROFILE_KEY_PREFIX: &str = "terminal.defaultProfile.";

/// Settings key holding the configured-profiles mapping for `platform`.
pub fn profiles_key(platform: Platform) -> String {
    format!("{PROFILES_KEY_PREFIX}{}", platform.key_segment())
}

/// Settings key holding the default profile name for `platform`.
pub fn default_profile_key(platform: Platform) -> String {
    format!("{DEFAULT_PROFILE_KEY_PREFIX}{}", platform.key_segment())
}

// ============================================================================
// Store trait and typed accessors
// ============================================================================

/// Key/value persistence for workflow settings.
///
/// Reads return the stored value at call time; writes target user scope.
/// Operations either succeed or raise — callers perform no retries.
pub trait ConfigStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when unset.
    fn read(&self, key: &str) -> Result<Option<Value>, PickError>;

    /// Write `value` under `key` at user scope.
    fn write_user(&self, key: &str, value: Value) -> Result<(), PickError>;
}

/// Mapping of profile name to stored definition.
pub type ProfilesMap = HashMap<String, ProfileDefinition>;

/// Read the configured-profiles mapping for `platform`.
pub fn read_configured_profiles(
    store: &dyn ConfigStore,
    platform: Platform,
) -> Result<ProfilesMap, PickError> {
    match store.read(&profiles_key(platform))? {
        Some(value) => Ok(serde_yaml_ng::from_value(value)?),
        None => Ok(ProfilesMap::new()),
    }
}

/// Persist the whole configured-profiles mapping for `platform`.
pub fn write_configured_profiles(
    store: &dyn ConfigStore,
    platform: Platform,
    profiles: &ProfilesMap,
) -> Result<(), PickError> {
    let value = serde_yaml_ng::to_value(profiles)?;
    store.write_user(&profiles_key(platform), value)
}

/// Read the configured default profile name for `platform`.
pub fn read_default_profile_name(
    store: &dyn ConfigStore,
    platform: Platform,
) -> Result<Option<String>, PickError> {
    match store.read(&default_profile_key(platform))? {
        Some(value) => Ok(serde_yaml_ng::from_value(value)?),
        None => Ok(None),
    }
}

/// Persist `name` as the default profile for `platform`.
pub fn write_default_profile_name(
    store: &dyn ConfigStore,
    platform: Platform,
    name: &str,
) -> Result<(), PickError> {
    store.write_user(&default_profile_key(platform), Value::String(name.to_string()))
}

// ============================================================================
// Implementations
// ============================================================================

/// File-backed settings store.
///
/// All keys live in one YAML mapping. The file is re-read on every access and
/// written atomically (temp file + rename). A mutex serializes in-process
/// read-modify-write cycles; writers in other processes are last-write-wins.
pub struct YamlFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl YamlFileStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Create a store at the default settings path for this platform.
    pub fn at_default_path() -> Result<Self, PickError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Get the default settings file path (using XDG convention)
    pub fn default_path() -> Result<PathBuf, PickError> {
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .map(|dir| dir.join("shellpick").join("settings.yaml"))
                .ok_or(PickError::ConfigDirUnavailable)
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/shellpick/settings.yaml
            dirs::home_dir()
                .map(|home| home.join(".config").join("shellpick").join("settings.yaml"))
                .ok_or(PickError::ConfigDirUnavailable)
        }
    }

    fn load_all(&self) -> Result<HashMap<String, Value>, PickError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_yaml_ng::from_str(&contents)?)
    }

    fn store_all(&self, values: &HashMap<String, Value>) -> Result<(), PickError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(values)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl ConfigStore for YamlFileStore {
    fn read(&self, key: &str) -> Result<Option<Value>, PickError> {
        let _guard = self.lock.lock();
        let mut values = self.load_all()?;
        Ok(values.remove(key))
    }

    fn write_user(&self, key: &str, value: Value) -> Result<(), PickError> {
        let _guard = self.lock.lock();
        let mut values = self.load_all()?;
        values.insert(key.to_string(), value);
        self.store_all(&values)?;
        log::debug!("wrote settings key {:?} to {:?}", key, self.path);
        Ok(())
    }
}

/// In-memory settings store for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted snapshot of all stored keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.values.lock().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>, PickError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn write_user(&self, key: &str, value: Value) -> Result<(), PickError> {
        self.values.lock().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileArgs;

    #[test]
    fn test_key_derivation() {
        assert_eq!(profiles_key(Platform::Linux), "terminal.profiles.linux");
        assert_eq!(profiles_key(Platform::MacOs), "terminal.profiles.osx");
        assert_eq!(
            default_profile_key(Platform::Windows),
            "terminal.defaultProfile.windows"
        );
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.read("missing").expect("read").is_none());

        store
            .write_user("k", Value::String("v".to_string()))
            .expect("write");
        assert_eq!(
            store.read("k").expect("read"),
            Some(Value::String("v".to_string()))
        );
    }

    #[test]
    fn test_default_profile_name_roundtrip() {
        let store = MemoryStore::new();
        assert!(
            read_default_profile_name(&store, Platform::Linux)
                .expect("read")
                .is_none()
        );

        write_default_profile_name(&store, Platform::Linux, "zsh").expect("write");
        assert_eq!(
            read_default_profile_name(&store, Platform::Linux).expect("read"),
            Some("zsh".to_string())
        );
    }

    #[test]
    fn test_configured_profiles_roundtrip() {
        let store = MemoryStore::new();
        let mut profiles = ProfilesMap::new();
        profiles.insert(
            "bash".to_string(),
            ProfileDefinition {
                path: "/bin/bash".to_string(),
                args: Some(ProfileArgs::List(vec!["-l".to_string()])),
            },
        );

        write_configured_profiles(&store, Platform::Linux, &profiles).expect("write");
        let loaded = read_configured_profiles(&store, Platform::Linux).expect("read");

        assert_eq!(loaded, profiles);
    }

    #[test]
    fn test_file_store_missing_file_reads_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = YamlFileStore::new(dir.path().join("settings.yaml"));

        assert!(store.read("anything").expect("read").is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = YamlFileStore::new(dir.path().join("nested").join("settings.yaml"));

        store
            .write_user("a", Value::String("one".to_string()))
            .expect("write a");
        store
            .write_user("b", Value::String("two".to_string()))
            .expect("write b");

        assert_eq!(
            store.read("a").expect("read"),
            Some(Value::String("one".to_string()))
        );
        assert_eq!(
            store.read("b").expect("read"),
            Some(Value::String("two".to_string()))
        );

        // No temp file left behind after the atomic rename.
        assert!(!dir.path().join("nested").join("settings.yaml.tmp").exists());
    }
}
