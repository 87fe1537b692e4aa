//! Pick entry types and the external picker/prompt collaborator traits.
//!
//! The picker widget itself (rendering, keyboard handling, modal lifecycle)
//! belongs to the embedding application. This module defines the data it is
//! handed and the contract it must honor.

use crate::error::PickError;
use crate::profile::Profile;

/// Modifier keys captured by the picker when a selection is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub ctrl_or_cmd: bool,
    /// Alt/Option key.
    pub alt: bool,
}

/// Action button attached to a pick item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemButton {
    /// Opens the save-as-new-profile prompt for the item's profile.
    Configure,
}

/// A selectable row handed to the picker.
///
/// Built fresh for every picker invocation and discarded when the workflow
/// resolves; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PickItem {
    /// Rendered row label: icon glyph plus profile name.
    pub label: String,

    /// Rendered row detail: path and arguments for local profiles.
    pub description: Option<String>,

    /// The profile this row stands for.
    pub profile: Profile,

    /// The profile's display name; sort key and persistence key.
    pub profile_name: String,

    /// Action buttons rendered on the row.
    pub buttons: Vec<ItemButton>,

    /// Modifier state attached during resolution, when applicable.
    pub key_mods: Option<KeyModifiers>,
}

/// One entry of the built pick list.
#[derive(Debug, Clone, PartialEq)]
pub enum PickEntry {
    /// Group label separating the profile groups.
    Separator(String),
    /// A selectable profile row.
    Item(PickItem),
}

impl PickEntry {
    /// The contained item, when this entry is selectable.
    pub fn item(&self) -> Option<&PickItem> {
        match self {
            PickEntry::Item(item) => Some(item),
            PickEntry::Separator(_) => None,
        }
    }
}

/// The picker's answer: the chosen item and captured modifier state.
#[derive(Debug, Clone)]
pub struct PickSelection {
    /// The chosen row.
    pub item: PickItem,
    /// Modifier keys held when the selection was accepted.
    pub key_mods: Option<KeyModifiers>,
}

/// External picker widget.
pub trait ProfilePicker {
    /// Present `entries` and resolve to the chosen item, or `None` on
    /// dismissal.
    ///
    /// `on_configure` must be invoked for each configure-button trigger while
    /// the picker is open, independently of the eventual selection; an error
    /// it returns must propagate out of `pick`.
    fn pick(
        &self,
        entries: &[PickEntry],
        placeholder: &str,
        on_configure: &mut dyn FnMut(&PickItem) -> Result<(), PickError>,
    ) -> Result<Option<PickSelection>, PickError>;
}

/// External single-line input prompt used by the save-as side-workflow.
pub trait InputPrompt {
    /// Prompt for a profile name, pre-filled with `initial`.
    ///
    /// `validate` returns an inline rejection message for unacceptable input;
    /// the prompt must not resolve with input the validator rejects. `None`
    /// means the user dismissed the prompt.
    fn prompt_for_name(
        &self,
        initial: &str,
        validate: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Option<String>;
}
