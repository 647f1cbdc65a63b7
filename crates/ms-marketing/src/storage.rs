//! Browser-backed theme storage.

#[cfg(target_arch = "wasm32")]
use ms_core::theme::THEME_STORAGE_KEY;
use ms_core::ThemeStorage;

/// localStorage-backed [`ThemeStorage`].
///
/// The persisted selection only exists in the browser; during server
/// rendering this reads nothing and writes nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            return local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten();
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn store(&mut self, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, value);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = value;
        }
    }
}
