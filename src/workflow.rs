//! Entry point wiring the catalog, pick list, picker, and resolver together.

use std::path::PathBuf;

use crate::catalog::ProfileCatalog;
use crate::error::PickError;
use crate::pick_list::{IconTheme, PickListBuilder};
use crate::picker::{InputPrompt, PickItem, ProfilePicker};
use crate::profile::Profile;
use crate::rename::RenameWorkflow;
use crate::resolver::{PickMode, SelectionResolver};

/// The workflow's result: the resolved item plus the pass-through working
/// directory for session instantiation.
#[derive(Debug, Clone)]
pub struct ProfileSelection {
    /// The chosen, resolved pick item.
    pub item: PickItem,
    /// Working directory the caller asked the session to start in.
    pub cwd: Option<PathBuf>,
}

/// Profile selection workflow.
///
/// One invocation runs sequentially: read the configured default, aggregate
/// the profile groups, show the picker, then resolve the choice. Dismissal
/// at any point aborts with no persistence performed. Callers running two
/// invocations concurrently against the same store must serialize them or
/// accept last-write-wins.
pub struct ProfilePickWorkflow {
    catalog: ProfileCatalog,
    picker: Box<dyn ProfilePicker>,
    prompt: Box<dyn InputPrompt>,
    theme: Box<dyn IconTheme>,
}

impl ProfilePickWorkflow {
    /// Create the workflow over a catalog and the external collaborators.
    pub fn new(
        catalog: ProfileCatalog,
        picker: Box<dyn ProfilePicker>,
        prompt: Box<dyn InputPrompt>,
        theme: Box<dyn IconTheme>,
    ) -> Self {
        Self {
            catalog,
            picker,
            prompt,
            theme,
        }
    }

    /// Show the picker and perform the side effects for `mode`.
    ///
    /// Returns `Ok(None)` when the user dismisses the picker; `cwd` is passed
    /// through untouched for the caller's session instantiation.
    pub fn show_and_get_result(
        &self,
        mode: PickMode,
        cwd: Option<PathBuf>,
    ) -> Result<Option<ProfileSelection>, PickError> {
        let default_name = self.catalog.configured_default_profile_name()?;
        let available = self.catalog.available_profiles()?;
        let contributed = self.catalog.contributed_profiles();
        log::debug!(
            "picking from {} local and {} contributed profiles",
            available.len(),
            contributed.len()
        );

        let builder = PickListBuilder::new(self.theme.as_ref(), default_name);
        let entries = builder.build(&available, &contributed);

        let rename = RenameWorkflow::new(self.catalog.store(), self.catalog.platform());
        let prompt = self.prompt.as_ref();
        let mut on_configure = |item: &PickItem| -> Result<(), PickError> {
            match &item.profile {
                Profile::Local(local) => rename.run(local, prompt).map(|_| ()),
                // Contributed rows carry no configure button; nothing to do.
                Profile::Contributed(_) => Ok(()),
            }
        };

        let Some(selection) = self
            .picker
            .pick(&entries, mode.placeholder(), &mut on_configure)?
        else {
            log::debug!("profile pick dismissed");
            return Ok(None);
        };

        let item = SelectionResolver::new(&self.catalog).resolve(selection, mode)?;
        Ok(Some(ProfileSelection { item, cwd }))
    }
}
