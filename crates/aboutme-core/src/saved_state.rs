//! Transient instance state that survives teardown and reconstruction of the
//! composition (rotation, process recreation by the host).
//!
//! Values are stored as JSON values under the key given to
//! `remember_saveable`. The bundle is opaque to the host: it is meant to be
//! handed back unchanged, not read or versioned.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedStateBundle {
    entries: BTreeMap<String, Value>,
}

impl SavedStateBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Decodes the entry under `key`, or `None` when absent.
    pub fn decode<T: DeserializeOwned>(&self, key: &str) -> Option<Result<T>> {
        self.entries.get(key).map(|v| {
            T::deserialize(v).map_err(|source| Error::SavedState {
                key: key.to_string(),
                source,
            })
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Converts a remembered value to and from its saved form.
pub trait Saver<T>: 'static {
    fn save(&self, value: &T) -> std::result::Result<Value, serde_json::Error>;
    fn restore(&self, saved: &Value) -> std::result::Result<T, serde_json::Error>;
}

/// Saver for any serde type.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSaver;

impl<T: Serialize + DeserializeOwned> Saver<T> for JsonSaver {
    fn save(&self, value: &T) -> std::result::Result<Value, serde_json::Error> {
        serde_json::to_value(value)
    }

    fn restore(&self, saved: &Value) -> std::result::Result<T, serde_json::Error> {
        T::deserialize(saved)
    }
}

type Provider = Box<dyn Fn() -> std::result::Result<Value, serde_json::Error>>;

/// Holds the bundle pending restoration and the providers that produce the
/// next bundle.
#[derive(Default)]
pub struct SavedStateRegistry {
    restored: Option<SavedStateBundle>,
    providers: BTreeMap<String, Provider>,
}

impl SavedStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_restored(&mut self, bundle: SavedStateBundle) {
        self.restored = Some(bundle);
    }

    /// Takes the restored value for `key`. Each value is handed out once.
    pub fn consume_restored(&mut self, key: &str) -> Option<Value> {
        let bundle = self.restored.as_mut()?;
        let v = bundle.remove(key);
        if bundle.is_empty() {
            self.restored = None;
        }
        v
    }

    pub fn has_pending(&self) -> bool {
        self.restored.is_some()
    }

    pub fn register(
        &mut self,
        key: impl Into<String>,
        provider: impl Fn() -> std::result::Result<Value, serde_json::Error> + 'static,
    ) {
        let key = key.into();
        if self.providers.contains_key(&key) {
            log::warn!("saved state key '{}' registered twice; keeping the latest", key);
        }
        self.providers.insert(key, Box::new(provider));
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.providers.retain(|k, _| keep(k));
    }

    /// Collects every provider's value. Values that fail to encode are
    /// logged and left out rather than failing the whole save.
    pub fn save(&self) -> SavedStateBundle {
        let mut bundle = SavedStateBundle::new();
        for (key, provider) in &self.providers {
            match provider() {
                Ok(v) => bundle.insert(key.clone(), v),
                Err(e) => log::warn!("skipping saved state '{}': {}", key, e),
            }
        }
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn consume_restored_hands_out_values_once() {
        let mut bundle = SavedStateBundle::new();
        bundle.insert("a", json!(1));
        let mut reg = SavedStateRegistry::new();
        reg.set_restored(bundle);

        assert_eq!(reg.consume_restored("a"), Some(json!(1)));
        assert_eq!(reg.consume_restored("a"), None);
        assert!(!reg.has_pending());
    }

    #[test]
    fn save_collects_registered_providers() {
        let mut reg = SavedStateRegistry::new();
        reg.register("name", || Ok(json!("Robin")));
        reg.register("flag", || Ok(json!(true)));

        let bundle = reg.save();
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("name"), Some(&json!("Robin")));
        assert_eq!(bundle.keys().collect::<Vec<_>>(), vec!["flag", "name"]);
    }

    #[test]
    fn decode_reports_the_failing_key() {
        let mut bundle = SavedStateBundle::new();
        bundle.insert("count", json!("not a number"));

        let err = bundle.decode::<u32>("count").unwrap().unwrap_err();
        assert!(matches!(err, Error::SavedState { ref key, .. } if key == "count"));
        assert!(bundle.decode::<u32>("missing").is_none());
    }

    #[test]
    fn bundle_json_is_a_flat_object() {
        let mut bundle = SavedStateBundle::new();
        bundle.insert("k", json!({"x": 1}));
        let text = bundle.to_json().unwrap();
        assert!(text.trim_start().starts_with('{'));
        assert_eq!(SavedStateBundle::from_json(&text).unwrap(), bundle);
        assert!(SavedStateBundle::from_json("[1, 2]").is_err());
    }
}
