//! Browser Local Storage
//!
//! Small pieces of UI state that survive page loads, scoped to the origin.

use web_sys::Storage;

/// Key holding the fragment of the last activated tab
pub const LAST_TAB_KEY: &str = "lastTab";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the last activated tab, if one was stored
pub fn last_tab() -> Option<String> {
    local_storage()?.get_item(LAST_TAB_KEY).ok().flatten()
}

/// Remember the activated tab for the next page load
pub fn set_last_tab(fragment: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LAST_TAB_KEY, fragment);
    }
}

/// Pick the tab to activate on load: the stored fragment when it still
/// names a live tab, the default otherwise.
pub fn restore_tab(stored: Option<&str>, known: &[&str], default: &str) -> String {
    match stored {
        Some(fragment) if known.contains(&fragment) => fragment.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABS: &[&str] = &["#list", "#categories"];

    #[test]
    fn test_restore_known_tab() {
        assert_eq!(restore_tab(Some("#categories"), TABS, "#list"), "#categories");
    }

    #[test]
    fn test_restore_falls_back_when_nothing_stored() {
        assert_eq!(restore_tab(None, TABS, "#list"), "#list");
    }

    #[test]
    fn test_restore_ignores_stale_fragment() {
        // A tab removed in a newer build may still be in storage
        assert_eq!(restore_tab(Some("#reports"), TABS, "#list"), "#list");
    }
}
