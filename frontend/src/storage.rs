//! Browser persistence for the authentication session.

use common::session::{SessionStorage, STORAGE_KEY};
use web_sys::Storage;

/// Keeps the session in `window.localStorage` under [`STORAGE_KEY`].
///
/// When the browser refuses access (private mode, disabled storage) every
/// operation degrades to a no-op and the session only lives until reload.
#[derive(Clone, Copy, Default)]
pub struct LocalSessionStorage;

impl LocalSessionStorage {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, raw: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(STORAGE_KEY, raw).is_err() {
                gloo_console::warn!("impossible d'enregistrer la session");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(STORAGE_KEY).is_err() {
                gloo_console::warn!("impossible d'effacer la session");
            }
        }
    }
}
