//! Shared integration test fixtures for shellpick.
//!
//! Scripted stand-ins for the external collaborators: picker, input prompt,
//! contributed-profile registry, shell scanner, and icon theme.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{ScriptedPicker, ScriptedPrompt};
//! ```
//!
//! The `#[allow(dead_code)]` suppresses warnings when only a subset of
//! fixtures is used per file.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use shellpick::{
    ContributedProfile, ContributedProfileRegistry, IconTheme, InputPrompt, ItemButton,
    KeyModifiers, LocalProfile, PickEntry, PickError, PickItem, PickSelection, ProfilePicker,
    ShellScanner,
};

/// Registry that records every registration.
pub struct FakeRegistry {
    contributed: Vec<ContributedProfile>,
    pub registered: Mutex<Vec<ContributedProfile>>,
}

impl FakeRegistry {
    pub fn new(contributed: Vec<ContributedProfile>) -> Self {
        Self {
            contributed,
            registered: Mutex::new(Vec::new()),
        }
    }
}

impl ContributedProfileRegistry for FakeRegistry {
    fn contributed_profiles(&self) -> Vec<ContributedProfile> {
        self.contributed.clone()
    }

    fn register(&self, profile: &ContributedProfile) {
        self.registered.lock().push(profile.clone());
    }
}

/// Scanner returning a fixed profile list.
pub struct FixedScanner(pub Vec<LocalProfile>);

impl ShellScanner for FixedScanner {
    fn scan(&self) -> Vec<LocalProfile> {
        self.0.clone()
    }
}

/// What the picker observed when invoked.
#[derive(Default)]
pub struct SeenPick {
    pub entries: Vec<PickEntry>,
    pub placeholder: String,
}

/// Picker scripted to fire a configure button and/or accept an item by name.
pub struct ScriptedPicker {
    /// Profile name to select; `None` dismisses the picker.
    pub select: Option<String>,
    /// Fire the configure button on this profile name before resolving.
    pub configure: Option<String>,
    /// Modifier state captured at accept time.
    pub key_mods: Option<KeyModifiers>,
    /// Shared record of what the picker was shown.
    pub seen: Arc<Mutex<SeenPick>>,
}

impl ScriptedPicker {
    pub fn selecting(name: &str) -> Self {
        Self {
            select: Some(name.to_string()),
            configure: None,
            key_mods: None,
            seen: Arc::new(Mutex::new(SeenPick::default())),
        }
    }

    pub fn dismissing() -> Self {
        Self {
            select: None,
            configure: None,
            key_mods: None,
            seen: Arc::new(Mutex::new(SeenPick::default())),
        }
    }
}

fn find_item<'a>(entries: &'a [PickEntry], name: &str) -> &'a PickItem {
    entries
        .iter()
        .filter_map(PickEntry::item)
        .find(|item| item.profile_name == name)
        .unwrap_or_else(|| panic!("no pick item named {name:?}"))
}

impl ProfilePicker for ScriptedPicker {
    fn pick(
        &self,
        entries: &[PickEntry],
        placeholder: &str,
        on_configure: &mut dyn FnMut(&PickItem) -> Result<(), PickError>,
    ) -> Result<Option<PickSelection>, PickError> {
        {
            let mut seen = self.seen.lock();
            seen.entries = entries.to_vec();
            seen.placeholder = placeholder.to_string();
        }

        if let Some(name) = &self.configure {
            let item = find_item(entries, name);
            assert!(
                item.buttons.contains(&ItemButton::Configure),
                "configure fired on a buttonless item"
            );
            on_configure(item)?;
        }

        let Some(name) = &self.select else {
            return Ok(None);
        };
        let item = find_item(entries, name).clone();
        Ok(Some(PickSelection {
            item,
            key_mods: self.key_mods,
        }))
    }
}

/// What the prompt observed when invoked.
#[derive(Default)]
pub struct SeenPrompt {
    pub initial: Option<String>,
    pub rejection: Option<String>,
}

/// Prompt scripted to submit a fixed name.
pub struct ScriptedPrompt {
    /// Input to submit; `None` dismisses the prompt.
    pub submit: Option<String>,
    /// Shared record of the prompt invocation.
    pub seen: Arc<Mutex<SeenPrompt>>,
}

impl ScriptedPrompt {
    pub fn submitting(name: &str) -> Self {
        Self {
            submit: Some(name.to_string()),
            seen: Arc::new(Mutex::new(SeenPrompt::default())),
        }
    }

    pub fn dismissing() -> Self {
        Self {
            submit: None,
            seen: Arc::new(Mutex::new(SeenPrompt::default())),
        }
    }
}

impl InputPrompt for ScriptedPrompt {
    fn prompt_for_name(
        &self,
        initial: &str,
        validate: &mut dyn FnMut(&str) -> Option<String>,
    ) -> Option<String> {
        self.seen.lock().initial = Some(initial.to_string());
        let input = self.submit.clone()?;
        if let Some(message) = validate(&input) {
            // Inline rejection; the scripted user gives up.
            self.seen.lock().rejection = Some(message);
            return None;
        }
        Some(input)
    }
}

/// Icon theme backed by a fixed identifier → glyph map.
#[derive(Default)]
pub struct MapTheme(pub HashMap<String, String>);

impl MapTheme {
    pub fn with(icon: &str, glyph: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(icon.to_string(), glyph.to_string());
        Self(map)
    }
}

impl IconTheme for MapTheme {
    fn glyph(&self, icon: &str) -> Option<String> {
        self.0.get(icon).cloned()
    }
}
