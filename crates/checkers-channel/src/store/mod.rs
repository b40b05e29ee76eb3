//! # Module Store
//!
//! Schema-declared persistent collections: the params singleton, the
//! stored-games map and the audit key set, all over one `StateBackend`.
//!
//! The store is an explicit handle constructed once at startup and owned
//! by the service; there is no ambient global state. Construction is
//! fallible: registering overlapping prefixes is a schema conflict.

pub mod collections;
pub mod keys;

use crate::domain::entities::{Params, StoredGame};
use crate::domain::errors::{ChannelError, ChannelResult, StoreError, StoreResult};
use crate::ports::store::StateBackend;
use collections::{Item, KeySet, TypedMap};

/// Guard that rejects overlapping collection prefixes at construction.
#[derive(Debug, Default)]
pub struct StoreSchema {
    prefixes: Vec<&'static [u8]>,
}

impl StoreSchema {
    /// Register a prefix, rejecting any overlap with an earlier one.
    pub fn register(&mut self, prefix: &'static [u8]) -> StoreResult<()> {
        for existing in &self.prefixes {
            if existing.starts_with(prefix) || prefix.starts_with(existing) {
                return Err(StoreError::SchemaConflict {
                    prefix: String::from_utf8_lossy(prefix).into_owned(),
                });
            }
        }
        self.prefixes.push(prefix);
        Ok(())
    }
}

/// The module's persistent state, typed.
#[derive(Debug)]
pub struct ModuleStore<B: StateBackend> {
    backend: B,
    params: Item<Params>,
    games: TypedMap<StoredGame>,
    records: KeySet,
}

impl<B: StateBackend> ModuleStore<B> {
    /// Build the store over a backend, registering the collection schema.
    ///
    /// ## Errors
    ///
    /// - `SchemaConflict`: two collections registered overlapping prefixes
    pub fn new(backend: B) -> StoreResult<Self> {
        let mut schema = StoreSchema::default();
        schema.register(keys::PARAMS_PREFIX)?;
        schema.register(keys::STORED_GAMES_PREFIX)?;
        schema.register(keys::RECORD_PREFIX)?;

        Ok(Self {
            backend,
            params: Item::new(keys::PARAMS_PREFIX),
            games: TypedMap::new(keys::STORED_GAMES_PREFIX),
            records: KeySet::new(keys::RECORD_PREFIX),
        })
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrow the backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // --- Params (singleton) ---

    /// Read the params; defaults if never written.
    pub fn params(&self) -> StoreResult<Params> {
        Ok(self.params.get(&self.backend)?.unwrap_or_default())
    }

    /// Validate and write the params. The validation hook runs on every
    /// write; callers cannot skip it.
    ///
    /// ## Errors
    ///
    /// - `InvalidParams`: the params failed their validation hook
    pub fn set_params(&mut self, params: &Params) -> ChannelResult<()> {
        params.validate()?;
        Ok(self.params.set(&mut self.backend, params)?)
    }

    // --- Stored games (keyed map) ---

    /// Write a game under its index.
    pub fn set_game(&mut self, index: &str, game: &StoredGame) -> StoreResult<()> {
        self.games.set(&mut self.backend, index, game)
    }

    /// Read a game by index.
    ///
    /// ## Errors
    ///
    /// - `GameNotFound`: no game is stored under `index`
    pub fn game(&self, index: &str) -> ChannelResult<StoredGame> {
        self.games
            .get(&self.backend, index)?
            .ok_or_else(|| ChannelError::GameNotFound {
                index: index.to_string(),
            })
    }

    /// Check if a game exists.
    pub fn has_game(&self, index: &str) -> StoreResult<bool> {
        self.games.has(&self.backend, index)
    }

    /// Remove a game.
    pub fn remove_game(&mut self, index: &str) -> StoreResult<()> {
        self.games.remove(&mut self.backend, index)
    }

    /// Visit stored games in the backend's scan order.
    ///
    /// `range` bounds the visited indices as half-open `[start, end)`;
    /// `None` visits everything. The visitor returning `Ok(true)` stops
    /// the walk early.
    pub fn walk_games<F>(&self, range: Option<(&str, &str)>, mut visitor: F) -> ChannelResult<()>
    where
        F: FnMut(&str, StoredGame) -> ChannelResult<bool>,
    {
        for (index, game) in self.games.entries(&self.backend)? {
            if let Some((start, end)) = range {
                if index.as_str() < start || index.as_str() >= end {
                    continue;
                }
            }
            if visitor(&index, game)? {
                break;
            }
        }
        Ok(())
    }

    // --- Audit key set ---

    /// Append a marker to the audit set.
    pub fn insert_record(&mut self, marker: &str) -> StoreResult<()> {
        self.records.insert(&mut self.backend, marker)
    }

    /// Check audit-set membership.
    pub fn has_record(&self, marker: &str) -> StoreResult<bool> {
        self.records.contains(&self.backend, marker)
    }

    /// All audit markers in sorted order.
    pub fn list_records(&self) -> StoreResult<Vec<String>> {
        self.records.list(&self.backend)
    }
}
