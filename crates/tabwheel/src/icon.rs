use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const ICON_LOOKUP_SIZE: u16 = 48;

/// Either an absolute image path or a freedesktop icon theme name.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

crate::string_newtype!(IconName);

static RESOLVED: OnceLock<RwLock<HashMap<IconName, Option<PathBuf>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<IconName, Option<PathBuf>>> {
    RESOLVED.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Theme lookups hit the disk, so results (misses included) are remembered.
pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    if let Some(hit) = cache().read().get(icon_name) {
        return hit.clone();
    }

    let resolved = resolve(icon_name);
    if resolved.is_none() {
        log::debug!("No icon found for '{}'", icon_name);
    }
    cache().write().insert(icon_name.clone(), resolved.clone());
    resolved
}

pub fn clear_cache() {
    cache().write().clear();
}

fn resolve(icon_name: &IconName) -> Option<PathBuf> {
    let path = Path::new(icon_name.as_str());
    if path.is_absolute() {
        return path.exists().then(|| path.to_path_buf());
    }

    lookup(icon_name.as_str())
        .with_size(ICON_LOOKUP_SIZE)
        .with_scale(1)
        .find()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_icon_name_resolves_to_nothing() {
        assert_eq!(find_icon_path(&IconName::default()), None);
    }

    #[test]
    fn test_missing_absolute_path_is_cached_as_miss() {
        let name = IconName::new("/definitely/not/here/tab-icon.png");
        assert_eq!(find_icon_path(&name), None);
        assert_eq!(cache().read().get(&name), Some(&None));
    }
}
