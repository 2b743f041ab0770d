use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::KeyValueStore;
use crate::error::Result;

/// Read and deserialize the JSON value under `key`.
///
/// Returns `Ok(None)` when the key is absent.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(content) => Ok(Some(serde_json::from_str(&content)?)),
        None => Ok(None),
    }
}

/// Key a corrupt value under `key` is copied to before it can be overwritten
pub fn backup_key(key: &str) -> String {
    format!("{}.corrupt", key)
}

/// Load the value under `key`, using the default for absent or unreadable entries.
///
/// A value that is present but does not deserialize is copied to
/// [`backup_key`] first, so the next save of `key` cannot lose it.
pub fn load_or_default<T, S>(store: &mut S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let content = match store.get(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!("No persisted value for {}", key);
            return T::default();
        }
        Err(e) => {
            error!("Failed to read {}: {}, starting empty", key, e);
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let backup = backup_key(key);
            error!("Corrupt value for {}: {}, copying it to {} and starting empty", key, e, backup);
            if let Err(e) = store.set(&backup, &content) {
                error!("Failed to back up {} to {}: {}", key, backup, e);
            }
            T::default()
        }
    }
}

/// Serialize `value` as JSON under `key`
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let content = serde_json::to_string(value)?;
    store.set(key, &content)
}

/// Write `value`, logging instead of returning failures
pub fn save<T, S>(store: &mut S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    if let Err(e) = write_json(store, key, value) {
        warn!("Failed to save {}: {}", key, e);
    }
}

/// Remove `key`, logging instead of returning failures
pub fn discard<S>(store: &mut S, key: &str)
where
    S: KeyValueStore + ?Sized,
{
    if let Err(e) = store.remove(key) {
        warn!("Failed to remove {}: {}", key, e);
    }
}
