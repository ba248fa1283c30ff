use shared::storage::{Handoff, KeyValueStore};

/// Browser local storage. Reads as empty and ignores writes outside the
/// browser.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStorage {
    fn get(&self, _key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = local_storage() {
            return storage.get_item(_key).ok().flatten();
        }
        None
    }

    fn set(&self, _key: &str, _value: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(_key, _value);
        }
    }

    fn remove(&self, _key: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(_key);
        }
    }
}

/// Page-to-page hand-off backed by local storage.
pub fn handoff() -> Handoff<LocalStorage> {
    Handoff::new(LocalStorage)
}
