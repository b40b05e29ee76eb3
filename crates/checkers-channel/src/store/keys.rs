//! # Store Keys
//!
//! Byte prefixes for the module's collections. Prefixes are the
//! collection's namespace inside the backend; the schema guard rejects
//! overlapping registrations.

/// Prefix of the params singleton.
pub const PARAMS_PREFIX: &[u8] = b"Params";

/// Prefix of the stored-games map.
pub const STORED_GAMES_PREFIX: &[u8] = b"StoredGames/value/";

/// Prefix of the audit key set.
pub const RECORD_PREFIX: &[u8] = b"Record/value/";

/// Full backend key for a string index under a prefix.
pub fn keyed(prefix: &[u8], index: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + index.len());
    key.extend_from_slice(prefix);
    key.extend_from_slice(index.as_bytes());
    key
}

/// Recover the string index from a full backend key.
pub fn strip_prefix<'a>(prefix: &[u8], key: &'a [u8]) -> Option<&'a [u8]> {
    key.strip_prefix(prefix)
}
