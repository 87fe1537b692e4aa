//! Pick list construction: grouping, ranking, and display metadata.
//!
//! Converts the catalog's profile groups into one ordered entry sequence:
//! group separators interleaved, the default-named profile ranked first
//! within its group, everything else alphabetical.

use regex::Regex;

use crate::picker::{ItemButton, PickEntry, PickItem};
use crate::profile::{ContributedProfile, LocalProfile, Profile, ProfileArgs};

/// Glyph used when a profile has no themed icon.
pub const DEFAULT_PROFILE_GLYPH: &str = "💻";

/// Group label for user-configured profiles.
pub const GROUP_PROFILES: &str = "profiles";

/// Group label for extension-contributed profiles.
pub const GROUP_CONTRIBUTED: &str = "contributed";

/// Group label for auto-detected profiles.
pub const GROUP_DETECTED: &str = "detected";

/// Resolves icon identifiers to rendered glyphs.
///
/// Theme lookup is owned by the embedding application; an unresolvable
/// identifier falls back to [`DEFAULT_PROFILE_GLYPH`].
pub trait IconTheme {
    /// The glyph for `icon`, or `None` when the theme cannot resolve it.
    fn glyph(&self, icon: &str) -> Option<String>;
}

/// Theme that treats the stored icon value as the glyph itself.
///
/// Matches configurations that store emoji directly in the icon field.
#[derive(Debug, Default)]
pub struct PassthroughIconTheme;

impl IconTheme for PassthroughIconTheme {
    fn glyph(&self, icon: &str) -> Option<String> {
        Some(icon.to_string())
    }
}

/// Builds the ordered pick list from the catalog's profile groups.
pub struct PickListBuilder<'a> {
    theme: &'a dyn IconTheme,
    default_profile_name: Option<String>,
}

impl<'a> PickListBuilder<'a> {
    /// Create a builder ranking `default_profile_name` first in its group.
    pub fn new(theme: &'a dyn IconTheme, default_profile_name: Option<String>) -> Self {
        Self {
            theme,
            default_profile_name,
        }
    }

    /// Build grouped, sorted entries ready for the picker.
    ///
    /// Non-empty groups appear in fixed order (configured, contributed,
    /// auto-detected), each preceded by its group separator.
    pub fn build(
        &self,
        available: &[LocalProfile],
        contributed: &[ContributedProfile],
    ) -> Vec<PickEntry> {
        let (configured, auto_detected): (Vec<&LocalProfile>, Vec<&LocalProfile>) =
            available.iter().partition(|p| !p.is_auto_detected);

        let mut entries = Vec::new();
        self.push_group(
            &mut entries,
            GROUP_PROFILES,
            configured.into_iter().map(|p| self.local_item(p)).collect(),
        );
        self.push_group(
            &mut entries,
            GROUP_CONTRIBUTED,
            contributed.iter().map(|c| self.contributed_item(c)).collect(),
        );
        self.push_group(
            &mut entries,
            GROUP_DETECTED,
            auto_detected.into_iter().map(|p| self.local_item(p)).collect(),
        );
        log::debug!("built pick list with {} entries", entries.len());
        entries
    }

    fn push_group(&self, entries: &mut Vec<PickEntry>, label: &str, mut items: Vec<PickItem>) {
        if items.is_empty() {
            return;
        }
        self.sort_items(&mut items);
        entries.push(PickEntry::Separator(label.to_string()));
        entries.extend(items.into_iter().map(PickEntry::Item));
    }

    /// Default-named item first, the rest case-insensitive alphabetical.
    /// The sort is stable, so equal keys keep their input order.
    fn sort_items(&self, items: &mut [PickItem]) {
        items.sort_by_key(|item| {
            let is_default =
                self.default_profile_name.as_deref() == Some(item.profile_name.as_str());
            (!is_default, item.profile_name.to_lowercase())
        });
    }

    fn local_item(&self, profile: &LocalProfile) -> PickItem {
        let glyph = self.resolve_glyph(profile.icon.as_deref());
        PickItem {
            label: format!("{glyph} {}", profile.profile_name),
            description: Some(local_description(profile)),
            profile: Profile::Local(profile.clone()),
            profile_name: profile.profile_name.clone(),
            buttons: vec![ItemButton::Configure],
            key_mods: None,
        }
    }

    fn contributed_item(&self, profile: &ContributedProfile) -> PickItem {
        let icon = profile.icon.as_deref().map(strip_icon_reference);
        let glyph = self.resolve_glyph(icon.as_deref());
        PickItem {
            label: format!("{glyph} {}", profile.title),
            description: None,
            profile: Profile::Contributed(profile.clone()),
            profile_name: profile.title.clone(),
            buttons: Vec::new(),
            key_mods: None,
        }
    }

    fn resolve_glyph(&self, icon: Option<&str>) -> String {
        icon.and_then(|id| self.theme.glyph(id))
            .unwrap_or_else(|| DEFAULT_PROFILE_GLYPH.to_string())
    }
}

/// Path plus rendered arguments for a local profile row.
fn local_description(profile: &LocalProfile) -> String {
    match &profile.args {
        None => profile.path.clone(),
        Some(args) => {
            let rendered = args_to_string(args);
            if rendered.is_empty() {
                profile.path.clone()
            } else {
                format!("{} {rendered}", profile.path)
            }
        }
    }
}

/// Render arguments for display.
///
/// A text value is used verbatim. List entries are joined with single
/// spaces; an entry containing a space is wrapped in double quotes. Embedded
/// double quotes are left as-is.
fn args_to_string(args: &ProfileArgs) -> String {
    match args {
        ProfileArgs::Text(text) => text.clone(),
        ProfileArgs::List(list) => list
            .iter()
            .map(|arg| {
                if arg.contains(' ') {
                    format!("\"{arg}\"")
                } else {
                    arg.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Strip a `$(...)` icon-reference wrapper, leaving bare identifiers alone.
fn strip_icon_reference(icon: &str) -> String {
    let re = Regex::new(r"^\$\((.+)\)$").expect("invalid regex");
    match re.captures(icon) {
        Some(caps) => caps[1].to_string(),
        None => icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_with_space_are_quoted() {
        let args = ProfileArgs::List(vec!["-a".to_string(), "hello world".to_string()]);
        assert_eq!(args_to_string(&args), "-a \"hello world\"");
    }

    #[test]
    fn test_space_free_args_join_unquoted() {
        let args = ProfileArgs::List(vec!["-l".to_string(), "-i".to_string()]);
        assert_eq!(args_to_string(&args), "-l -i");
    }

    #[test]
    fn test_embedded_quotes_are_not_escaped() {
        let args = ProfileArgs::List(vec!["say \"hi\" now".to_string()]);
        assert_eq!(args_to_string(&args), "\"say \"hi\" now\"");
    }

    #[test]
    fn test_text_args_verbatim() {
        let args = ProfileArgs::Text("-l --noprofile".to_string());
        assert_eq!(args_to_string(&args), "-l --noprofile");
    }

    #[test]
    fn test_description_is_path_without_args() {
        let profile = LocalProfile::new("sh", "/bin/sh");
        assert_eq!(local_description(&profile), "/bin/sh");
    }

    #[test]
    fn test_description_joins_path_and_args() {
        let profile = LocalProfile::new("sh", "/bin/sh").args(ProfileArgs::List(vec![
            "-a".to_string(),
            "hello world".to_string(),
        ]));
        assert_eq!(local_description(&profile), "/bin/sh -a \"hello world\"");
    }

    #[test]
    fn test_strip_icon_reference() {
        assert_eq!(strip_icon_reference("$(zap)"), "zap");
        assert_eq!(strip_icon_reference("zap"), "zap");
        assert_eq!(strip_icon_reference("$()"), "$()");
    }
}
