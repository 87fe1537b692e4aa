//! Profile selection workflow for terminal emulators.
//!
//! Aggregates execution profiles from three sources (user-configured,
//! platform auto-detected, extension-contributed), builds a grouped and
//! ranked pick list, and routes the chosen profile through the persistence
//! path its variant requires — handing it back for session instantiation or
//! persisting it as the configured default. A per-item side-workflow saves
//! any local profile under a new name.
//!
//! The picker widget, input prompt, icon theme, contributed-profile
//! registry, and settings storage are external collaborators, modeled as
//! traits:
//!
//! - [`ProfilePicker`] / [`InputPrompt`]: the interactive surfaces
//! - [`IconTheme`]: icon identifier → glyph resolution
//! - [`ContributedProfileRegistry`]: the extension profile source
//! - [`ConfigStore`]: settings persistence ([`YamlFileStore`] and
//!   [`MemoryStore`] are provided)

pub mod catalog;
pub mod detect;
pub mod error;
pub mod pick_list;
pub mod picker;
pub mod profile;
pub mod rename;
pub mod resolver;
pub mod store;
pub mod workflow;

// Re-export main types for convenience
pub use catalog::{ContributedProfileRegistry, ProfileCatalog};
pub use detect::{PlatformShellScanner, ShellScanner};
pub use error::PickError;
pub use pick_list::{
    DEFAULT_PROFILE_GLYPH, GROUP_CONTRIBUTED, GROUP_DETECTED, GROUP_PROFILES, IconTheme,
    PassthroughIconTheme, PickListBuilder,
};
pub use picker::{
    InputPrompt, ItemButton, KeyModifiers, PickEntry, PickItem, PickSelection, ProfilePicker,
};
pub use profile::{ContributedProfile, LocalProfile, Profile, ProfileArgs, ProfileDefinition};
pub use rename::{RenameOutcome, RenameWorkflow};
pub use resolver::{PickMode, SelectionResolver};
pub use store::{
    ConfigStore, MemoryStore, Platform, ProfilesMap, YamlFileStore, default_profile_key,
    profiles_key,
};
pub use workflow::{ProfilePickWorkflow, ProfileSelection};
