use codee::{string::JsonSerdeCodec, Decoder, Encoder};
use thiserror::Error;

use super::geometry::Position;

pub const POSITION_KEY: &str = "floating_dock_position";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("couldn't encode position: {0}")]
    Encode(String),
}

/// Minimal string key-value store, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Reads the persisted position.
///
/// A missing or malformed value is `Ok(None)`; only failures of the store
/// itself are errors.
pub fn load_position(store: &impl KeyValueStore) -> Result<Option<Position>, StoreError> {
    let raw = match store.get(POSITION_KEY)? {
        Some(raw) => raw,
        None => return Ok(None),
    };
    match <JsonSerdeCodec as Decoder<Position>>::decode(&raw) {
        Ok(pos) => Ok(Some(pos)),
        Err(e) => {
            log::debug!("ignoring malformed stored position {raw:?}: {e}");
            Ok(None)
        }
    }
}

pub fn save_position(store: &impl KeyValueStore, pos: Position) -> Result<(), StoreError> {
    let raw = <JsonSerdeCodec as Encoder<Position>>::encode(&pos)
        .map_err(|e| StoreError::Encode(e.to_string()))?;
    store.set(POSITION_KEY, &raw)
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use browser::BrowserStorage;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod browser {
    use super::{KeyValueStore, StoreError};

    /// `window.localStorage`, resolved on every access so a storage that gets
    /// disabled mid-session degrades to errors instead of panics.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        fn storage(&self) -> Result<web_sys::Storage, StoreError> {
            let window = web_sys::window().ok_or(StoreError::Unavailable)?;
            window
                .local_storage()
                .map_err(|e| StoreError::Access(format!("{e:?}")))?
                .ok_or(StoreError::Unavailable)
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.storage()?
                .get_item(key)
                .map_err(|e| StoreError::Access(format!("{e:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Access(format!("{e:?}")))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{BrokenStore, MemoryStore};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::default();
        save_position(&store, Position::new(100.0, 50.0)).unwrap();
        assert_eq!(load_position(&store), Ok(Some(Position::new(100.0, 50.0))));
    }

    #[test]
    fn test_saved_as_plain_object() {
        let store = MemoryStore::default();
        save_position(&store, Position::new(42.0, 8.0)).unwrap();
        let raw = store.get(POSITION_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "x": 42.0, "y": 8.0 }));
    }

    #[test]
    fn test_absent_is_none() {
        let store = MemoryStore::default();
        assert_eq!(load_position(&store), Ok(None));
    }

    #[test]
    fn test_malformed_is_none() {
        for raw in ["", "null", "{\"x\":1}", "{\"x\":\"a\",\"y\":2}", "not json"] {
            let store = MemoryStore::with(POSITION_KEY, raw);
            assert_eq!(load_position(&store), Ok(None), "raw value {raw:?}");
        }
    }

    #[test]
    fn test_reads_plain_json_object() {
        let store = MemoryStore::with(POSITION_KEY, r#"{"x":12.5,"y":300}"#);
        assert_eq!(load_position(&store), Ok(Some(Position::new(12.5, 300.0))));
    }

    #[test]
    fn test_store_failures_are_errors() {
        assert!(matches!(
            load_position(&BrokenStore),
            Err(StoreError::Access(_))
        ));
        assert!(save_position(&BrokenStore, Position::new(1.0, 2.0)).is_err());
    }
}
