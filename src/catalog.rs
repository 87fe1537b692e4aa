//! Read-only aggregation of the three profile sources.

use std::sync::Arc;

use crate::detect::ShellScanner;
use crate::error::PickError;
use crate::profile::{ContributedProfile, LocalProfile};
use crate::store::{self, ConfigStore, Platform, ProfilesMap};

/// Registry of extension-contributed profiles.
///
/// Owned by the embedding application. Registration makes a contributed
/// profile resolvable after it becomes the default.
pub trait ContributedProfileRegistry: Send + Sync {
    /// All currently contributed profiles.
    fn contributed_profiles(&self) -> Vec<ContributedProfile>;

    /// Register `profile` for later resolution.
    fn register(&self, profile: &ContributedProfile);
}

/// Read-only view over the profile sources and the configured default.
///
/// Every accessor re-reads its source at call time; nothing is cached across
/// calls within one workflow run.
pub struct ProfileCatalog {
    store: Arc<dyn ConfigStore>,
    registry: Arc<dyn ContributedProfileRegistry>,
    scanner: Arc<dyn ShellScanner>,
    platform: Platform,
}

impl ProfileCatalog {
    /// Create a catalog over the given sources.
    pub fn new(
        store: Arc<dyn ConfigStore>,
        registry: Arc<dyn ContributedProfileRegistry>,
        scanner: Arc<dyn ShellScanner>,
        platform: Platform,
    ) -> Self {
        Self {
            store,
            registry,
            scanner,
            platform,
        }
    }

    /// All local profiles: configured entries first, then auto-detected.
    pub fn available_profiles(&self) -> Result<Vec<LocalProfile>, PickError> {
        let mut profiles: Vec<LocalProfile> = self
            .configured_profiles()?
            .into_iter()
            .map(|(name, definition)| LocalProfile {
                profile_name: name,
                path: definition.path,
                args: definition.args,
                icon: None,
                color: None,
                is_auto_detected: false,
            })
            .collect();
        profiles.extend(self.scanner.scan());
        Ok(profiles)
    }

    /// Extension-contributed profiles.
    pub fn contributed_profiles(&self) -> Vec<ContributedProfile> {
        self.registry.contributed_profiles()
    }

    /// The configured default profile name, if any.
    pub fn configured_default_profile_name(&self) -> Result<Option<String>, PickError> {
        store::read_default_profile_name(self.store.as_ref(), self.platform)
    }

    /// The raw name→definition mapping from the store.
    pub fn configured_profiles(&self) -> Result<ProfilesMap, PickError> {
        store::read_configured_profiles(self.store.as_ref(), self.platform)
    }

    /// Ask the auto-detection source to drop cached results.
    pub fn refresh_available_profiles(&self) {
        log::debug!("refreshing available profiles");
        self.scanner.refresh();
    }

    pub(crate) fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    pub(crate) fn registry(&self) -> &dyn ContributedProfileRegistry {
        self.registry.as_ref()
    }

    pub(crate) fn platform(&self) -> Platform {
        self.platform
    }
}
