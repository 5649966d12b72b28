use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("stored value under {key} is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("storage error: {0}")]
    Io(String),
}

/// String key/value persistence, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Reads and decodes a JSON value. Blank values read as absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Io(e.to_string()))?;
        self.set(key, &raw)
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`, looked up on every call so a store created
    /// before the page finished loading still works.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        pub fn new() -> Result<Self, StorageError> {
            window_local_storage()?;
            Ok(Self)
        }
    }

    impl KeyValueStore for LocalStorageStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            window_local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Io(format!("get_item({key}) failed: {:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            window_local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Io(format!("set_item({key}) failed: {:?}", e)))
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, StorageError> {
        let win = web_sys::window().ok_or(StorageError::Unavailable)?;
        win.local_storage()
            .map_err(|e| StorageError::Io(format!("localStorage error: {:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorageStore {
    pub fn new() -> Result<Self, StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Browser storage when present, otherwise a session-only in-memory map.
#[derive(Debug, Clone)]
pub enum PageStore {
    Local(LocalStorageStore),
    Memory(InMemoryStore),
}

impl PageStore {
    pub fn open() -> Self {
        match LocalStorageStore::new() {
            Ok(store) => PageStore::Local(store),
            Err(err) => {
                log::warn!("falling back to in-memory storage: {err}");
                PageStore::Memory(InMemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            PageStore::Local(s) => s.get(key),
            PageStore::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            PageStore::Local(s) => s.set(key, value),
            PageStore::Memory(s) => s.set(key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_then_get_overwrites() {
        let mut s = InMemoryStore::new();
        assert_eq!(s.get("k").unwrap(), None);
        s.set("k", "v").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("v"));
        s.set("k", "w").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn json_values_round_trip() {
        let mut s = InMemoryStore::new();
        s.set_json("tags", &["Vidro", "Óleo"]).unwrap();
        assert_eq!(s.get("tags").unwrap().as_deref(), Some(r#"["Vidro","Óleo"]"#));
        let back: Option<Vec<String>> = s.get_json("tags").unwrap();
        assert_eq!(back, Some(vec!["Vidro".to_string(), "Óleo".to_string()]));
    }

    #[test]
    fn blank_json_reads_as_absent() {
        let s = InMemoryStore::with_entries([("tags", "  ")]);
        let v: Option<Vec<String>> = s.get_json("tags").unwrap();
        assert_eq!(v, None);
    }

    #[test]
    fn malformed_json_is_reported_as_corrupt() {
        let s = InMemoryStore::with_entries([("tags", "[oops")]);
        let err = s.get_json::<Vec<String>>("tags").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == "tags"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn page_store_falls_back_to_memory_off_the_web() {
        let mut s = PageStore::open();
        assert!(matches!(s, PageStore::Memory(_)));
        s.set("lz-theme", "dark").unwrap();
        assert_eq!(s.get("lz-theme").unwrap().as_deref(), Some("dark"));
    }
}
