//! Save-as-new-profile side-workflow.
//!
//! Triggered from a pick item's configure button, independently of the main
//! selection. Prompts for a new name and writes a derived copy of the source
//! profile into the configured-profiles mapping. Additive: the source entry
//! is never modified or removed.

use crate::error::PickError;
use crate::picker::InputPrompt;
use crate::profile::{LocalProfile, ProfileDefinition};
use crate::store::{self, ConfigStore, Platform};

/// Result of the save-as prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum RenameOutcome {
    /// A new entry was written under the returned name.
    Saved(String),
    /// The prompt was dismissed or produced no usable name; nothing written.
    Cancelled,
}

/// Prompts for a new profile name and persists a copy of a local profile
/// under it.
pub struct RenameWorkflow<'a> {
    store: &'a dyn ConfigStore,
    platform: Platform,
}

impl<'a> RenameWorkflow<'a> {
    /// Create the workflow against `store`, scoped to `platform`.
    pub fn new(store: &'a dyn ConfigStore, platform: Platform) -> Self {
        Self { store, platform }
    }

    /// Run the prompt for `source` and persist the new entry on acceptance.
    ///
    /// A name already present in the configured mapping is rejected inline by
    /// the prompt's validator and never written.
    pub fn run(
        &self,
        source: &LocalProfile,
        prompt: &dyn InputPrompt,
    ) -> Result<RenameOutcome, PickError> {
        let mut profiles = store::read_configured_profiles(self.store, self.platform)?;

        let name = {
            let mut validate = |name: &str| {
                if profiles.contains_key(name) {
                    Some(format!("A profile named \"{name}\" already exists"))
                } else {
                    None
                }
            };
            prompt.prompt_for_name(&source.profile_name, &mut validate)
        };

        let Some(name) = name else {
            log::debug!("save-as prompt dismissed for {:?}", source.profile_name);
            return Ok(RenameOutcome::Cancelled);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return Ok(RenameOutcome::Cancelled);
        }
        if profiles.contains_key(&name) {
            // The prompt's validator should have rejected this input.
            log::warn!("duplicate profile name {name:?} from prompt, skipping write");
            return Ok(RenameOutcome::Cancelled);
        }

        profiles.insert(
            name.clone(),
            ProfileDefinition {
                path: source.path.clone(),
                args: source.args.clone(),
            },
        );
        store::write_configured_profiles(self.store, self.platform, &profiles)?;
        log::info!("saved profile {:?} as {name:?}", source.profile_name);
        Ok(RenameOutcome::Saved(name))
    }
}
