//! # Capability Registry
//!
//! Name-keyed arena of claimed capability tokens. The registry owns
//! every live token; callers hold only opaque handles and prove
//! ownership by presenting a matching token, never by knowing the name.

use crate::domain::entities::CapabilityToken;
use crate::domain::errors::{ChannelError, ChannelResult};
use std::collections::HashMap;
use tracing::debug;

/// Binds capability names to claimed tokens.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    tokens: HashMap<String, CapabilityToken>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a token under a name.
    ///
    /// A name holds at most one active token; claiming twice without
    /// reconciliation is an error.
    ///
    /// ## Errors
    ///
    /// - `AlreadyClaimed`: the name already holds a token
    pub fn claim(&mut self, name: &str, token: CapabilityToken) -> ChannelResult<()> {
        if self.tokens.contains_key(name) {
            return Err(ChannelError::AlreadyClaimed {
                name: name.to_string(),
            });
        }
        debug!("[checkers] capability claimed: {name}");
        self.tokens.insert(name.to_string(), token);
        Ok(())
    }

    /// Check a token against the one claimed under `name`. Pure lookup,
    /// no side effects.
    pub fn authenticate(&self, name: &str, token: &CapabilityToken) -> bool {
        self.tokens.get(name) == Some(token)
    }

    /// Check whether any token is claimed under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }
}
