//! Thin `localStorage` wrapper. Missing storage (private mode, no window) reads as empty.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    get_local_storage()
        .ok_or_else(|| "localStorage is not available".to_string())?
        .set_item(key, value)
        .map_err(|e| format!("Failed to write '{}': {:?}", key, e))
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// `None` when the key is absent, `Some(Err)` when the stored JSON does not parse.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<Result<T, String>> {
    let raw = get_item(key)?;
    Some(serde_json::from_str(&raw).map_err(|e| format!("Malformed '{}' in storage: {}", key, e)))
}

pub fn set_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| format!("Failed to serialize '{}': {}", key, e))?;
    set_item(key, &raw)
}
