//! # Typed Collections
//!
//! Typed views over the raw state backend: a singleton item, a
//! string-keyed map and a key set. Values are JSON-encoded with the
//! module codec; a value that fails to decode is reported as corruption,
//! never silently skipped.

use super::keys;
use crate::domain::errors::StoreError;
use crate::ports::store::StateBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

fn encode<T: Serialize>(key: &[u8], value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(value).map_err(|e| StoreError::Corrupted {
        key: String::from_utf8_lossy(key).into_owned(),
        message: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(key: &[u8], bytes: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupted {
        key: String::from_utf8_lossy(key).into_owned(),
        message: e.to_string(),
    })
}

/// A single value stored under a fixed key.
#[derive(Debug)]
pub struct Item<T> {
    prefix: &'static [u8],
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> Item<T> {
    pub(crate) fn new(prefix: &'static [u8]) -> Self {
        Self {
            prefix,
            _marker: PhantomData,
        }
    }

    /// Read the value, if set.
    pub fn get<B: StateBackend>(&self, backend: &B) -> Result<Option<T>, StoreError> {
        match backend.get(self.prefix)? {
            Some(bytes) => Ok(Some(decode(self.prefix, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Write the value.
    pub fn set<B: StateBackend>(&self, backend: &mut B, value: &T) -> Result<(), StoreError> {
        let bytes = encode(self.prefix, value)?;
        backend.set(self.prefix, &bytes)
    }
}

/// A string-keyed map of typed values.
#[derive(Debug)]
pub struct TypedMap<T> {
    prefix: &'static [u8],
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> TypedMap<T> {
    pub(crate) fn new(prefix: &'static [u8]) -> Self {
        Self {
            prefix,
            _marker: PhantomData,
        }
    }

    /// Read the value under `index`, if present.
    pub fn get<B: StateBackend>(&self, backend: &B, index: &str) -> Result<Option<T>, StoreError> {
        let key = keys::keyed(self.prefix, index);
        match backend.get(&key)? {
            Some(bytes) => Ok(Some(decode(&key, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Write a value under `index`.
    pub fn set<B: StateBackend>(
        &self,
        backend: &mut B,
        index: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let key = keys::keyed(self.prefix, index);
        let bytes = encode(&key, value)?;
        backend.set(&key, &bytes)
    }

    /// Check if `index` is present.
    pub fn has<B: StateBackend>(&self, backend: &B, index: &str) -> Result<bool, StoreError> {
        backend.has(&keys::keyed(self.prefix, index))
    }

    /// Remove `index`. Removing an absent index is not an error.
    pub fn remove<B: StateBackend>(&self, backend: &mut B, index: &str) -> Result<(), StoreError> {
        backend.delete(&keys::keyed(self.prefix, index))
    }

    /// Every (index, value) pair in the backend's scan order.
    pub fn entries<B: StateBackend>(&self, backend: &B) -> Result<Vec<(String, T)>, StoreError> {
        let mut out = Vec::new();
        for (key, bytes) in backend.scan_prefix(self.prefix)? {
            let Some(raw_index) = keys::strip_prefix(self.prefix, &key) else {
                continue;
            };
            let index = String::from_utf8(raw_index.to_vec()).map_err(|e| {
                StoreError::Corrupted {
                    key: String::from_utf8_lossy(&key).into_owned(),
                    message: e.to_string(),
                }
            })?;
            out.push((index, decode(&key, &bytes)?));
        }
        Ok(out)
    }
}

/// An append-oriented set of string keys.
#[derive(Debug)]
pub struct KeySet {
    prefix: &'static [u8],
}

impl KeySet {
    pub(crate) fn new(prefix: &'static [u8]) -> Self {
        Self { prefix }
    }

    /// Insert a key. Re-inserting is a no-op.
    pub fn insert<B: StateBackend>(&self, backend: &mut B, key: &str) -> Result<(), StoreError> {
        backend.set(&keys::keyed(self.prefix, key), &[])
    }

    /// Check membership.
    pub fn contains<B: StateBackend>(&self, backend: &B, key: &str) -> Result<bool, StoreError> {
        backend.has(&keys::keyed(self.prefix, key))
    }

    /// All keys in the backend's scan order.
    pub fn list<B: StateBackend>(&self, backend: &B) -> Result<Vec<String>, StoreError> {
        let mut out = Vec::new();
        for (key, _) in backend.scan_prefix(self.prefix)? {
            let Some(raw) = keys::strip_prefix(self.prefix, &key) else {
                continue;
            };
            out.push(String::from_utf8(raw.to_vec()).map_err(|e| StoreError::Corrupted {
                key: String::from_utf8_lossy(&key).into_owned(),
                message: e.to_string(),
            })?);
        }
        Ok(out)
    }
}
