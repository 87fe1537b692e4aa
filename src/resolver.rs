//! Variant- and mode-specific persistence for the chosen profile.

use crate::catalog::ProfileCatalog;
use crate::error::PickError;
use crate::picker::{PickItem, PickSelection};
use crate::profile::{Profile, ProfileDefinition};
use crate::store;

/// What the workflow does with the chosen profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    /// Hand the profile back for session instantiation.
    CreateInstance,
    /// Persist the profile as the configured default.
    SetDefault,
}

impl PickMode {
    /// Placeholder text shown in the picker for this mode.
    pub fn placeholder(self) -> &'static str {
        match self {
            PickMode::CreateInstance => "Select the profile to launch",
            PickMode::SetDefault => "Select your default profile",
        }
    }
}

/// Applies the persistence and registration side effects for a selection.
pub struct SelectionResolver<'a> {
    catalog: &'a ProfileCatalog,
}

impl<'a> SelectionResolver<'a> {
    /// Create a resolver over `catalog`'s store and registry.
    pub fn new(catalog: &'a ProfileCatalog) -> Self {
        Self { catalog }
    }

    /// Route the selection through the variant/mode persistence table.
    ///
    /// `CreateInstance` performs no writes for any variant. `SetDefault`
    /// persists the default-profile key; auto-detected profiles are first
    /// promoted into the configured mapping, and contributed profiles are
    /// registered for later resolution instead.
    pub fn resolve(
        &self,
        selection: PickSelection,
        mode: PickMode,
    ) -> Result<PickItem, PickError> {
        let PickSelection { mut item, key_mods } = selection;

        if mode == PickMode::CreateInstance {
            item.key_mods = key_mods;
            return Ok(item);
        }

        let store = self.catalog.store();
        let platform = self.catalog.platform();

        match &item.profile {
            Profile::Contributed(contributed) => {
                store::write_default_profile_name(store, platform, &contributed.title)?;
                self.catalog.registry().register(contributed);
                log::info!(
                    "default profile set to contributed {:?} from {}",
                    contributed.title,
                    contributed.extension_identifier
                );
                item.key_mods = key_mods;
                Ok(item)
            }
            Profile::Local(local) => {
                if local.is_auto_detected {
                    // Promote the detected shell into the configured mapping
                    // so the default name resolves on the next catalog read.
                    let mut profiles = store::read_configured_profiles(store, platform)?;
                    profiles.insert(
                        local.profile_name.clone(),
                        ProfileDefinition {
                            path: local.path.clone(),
                            args: local.args.clone(),
                        },
                    );
                    store::write_configured_profiles(store, platform, &profiles)?;
                }
                store::write_default_profile_name(store, platform, &local.profile_name)?;
                log::info!("default profile set to {:?}", local.profile_name);
                self.catalog.refresh_available_profiles();
                Ok(item)
            }
        }
    }
}
