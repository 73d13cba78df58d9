use web_sys::Storage;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// String key/value storage that survives reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// `window.localStorage`. Failures are logged and read as "not set".
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("Local storage unavailable: {:?}", e);
                None
            }
        });
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read {} from local storage: {:?}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("Failed to write {} to local storage: {:?}", key, e);
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Only the exact string `"true"` enables dark mode.
pub fn load_dark_mode(store: &impl PreferenceStore) -> bool {
    store.get(DARK_MODE_KEY).as_deref() == Some("true")
}

pub fn save_dark_mode(store: &mut impl PreferenceStore, enabled: bool) {
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
}

/// Puts the dark-mode class on `<html>` or takes it off.
pub fn apply_dark_mode(enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(DARK_MODE_CLASS, enabled) {
        log::warn!("Failed to toggle dark mode class: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_means_light_mode() {
        assert!(!load_dark_mode(&MemoryStore::default()));
    }

    #[test]
    fn dark_mode_round_trips() {
        let mut store = MemoryStore::default();
        save_dark_mode(&mut store, true);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
        assert!(load_dark_mode(&store));

        save_dark_mode(&mut store, false);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
        assert!(!load_dark_mode(&store));
    }

    #[test]
    fn anything_but_true_is_false() {
        let mut store = MemoryStore::default();
        for value in ["TRUE", "1", "yes", "", " true"] {
            store.set(DARK_MODE_KEY, value);
            assert!(!load_dark_mode(&store), "{value:?}");
        }
    }
}
