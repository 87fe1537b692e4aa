//! Profile data model for the selection workflow.
//!
//! A profile is a named way to start a command-line session. Two shapes
//! exist: locally-launchable profiles (a path plus optional arguments,
//! user-configured or auto-detected) and extension-contributed profiles
//! (identified by an extension id and profile id, opaque beyond their
//! display fields).

use serde::{Deserialize, Serialize};

/// Arguments carried by a local profile.
///
/// Stored either as a single string used verbatim or as an ordered list of
/// individual arguments. Both shapes round-trip through the configured
/// profiles mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileArgs {
    /// A pre-joined argument string, rendered as-is.
    Text(String),
    /// Individual arguments, joined for display.
    List(Vec<String>),
}

/// A profile backed by a local executable path.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalProfile {
    /// Display name; also the persistence key in the configured mapping.
    pub profile_name: String,

    /// Path to the executable to launch.
    pub path: String,

    /// Arguments passed to the executable.
    pub args: Option<ProfileArgs>,

    /// Icon identifier (resolved to a glyph by the icon theme).
    pub icon: Option<String>,

    /// Color identifier (resolved by the embedding application's theme).
    pub color: Option<String>,

    /// Whether this profile came from platform scanning rather than the
    /// user's configured mapping.
    pub is_auto_detected: bool,
}

impl LocalProfile {
    /// Create a configured local profile with the given name and path.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            profile_name: name.into(),
            path: path.into(),
            args: None,
            icon: None,
            color: None,
            is_auto_detected: false,
        }
    }

    /// Builder method to set arguments
    pub fn args(mut self, args: ProfileArgs) -> Self {
        self.args = Some(args);
        self
    }

    /// Builder method to set the icon identifier
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder method to set the color identifier
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder method to flag the profile as auto-detected
    pub fn auto_detected(mut self, flag: bool) -> Self {
        self.is_auto_detected = flag;
        self
    }
}

/// A profile contributed by an extension.
///
/// Owned by the external contributed-profile registry; opaque beyond these
/// fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributedProfile {
    /// Identifier of the contributing extension.
    pub extension_identifier: String,

    /// Profile id within the extension.
    pub id: String,

    /// Display title; used as the persisted default-profile name.
    pub title: String,

    /// Icon identifier, possibly wrapped in an `$(...)` icon reference.
    pub icon: Option<String>,

    /// Color identifier.
    pub color: Option<String>,
}

impl ContributedProfile {
    /// Create a contributed profile with the given identifiers and title.
    pub fn new(
        extension_identifier: impl Into<String>,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            extension_identifier: extension_identifier.into(),
            id: id.into(),
            title: title.into(),
            icon: None,
            color: None,
        }
    }

    /// Builder method to set the icon identifier
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder method to set the color identifier
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A selectable profile from one of the catalog sources.
///
/// Exactly these two variants exist; both decision points in the workflow
/// match exhaustively on them.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    /// A locally-launchable profile, configured or auto-detected.
    Local(LocalProfile),
    /// An extension-contributed profile.
    Contributed(ContributedProfile),
}

impl Profile {
    /// Human-readable name used for display, sorting, and persistence.
    pub fn name(&self) -> &str {
        match self {
            Profile::Local(p) => &p.profile_name,
            Profile::Contributed(c) => &c.title,
        }
    }

    /// Raw icon identifier carried by the profile, if any.
    pub fn icon(&self) -> Option<&str> {
        match self {
            Profile::Local(p) => p.icon.as_deref(),
            Profile::Contributed(c) => c.icon.as_deref(),
        }
    }
}

/// A configured-profile entry as persisted in the profiles mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefinition {
    /// Path to the executable to launch.
    pub path: String,

    /// Arguments passed to the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<ProfileArgs>,
}
