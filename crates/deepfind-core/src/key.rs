//! Map keys and key normalization strategies.
//!
//! A [`Key`] is either textual (`"title"`, the form produced by decoding JSON)
//! or symbolic (`:title`). Two keys are equal only when both representation and
//! content match, unless the map holding them carries a [`KeyNormalizer`], in
//! which case both sides are normalized before being compared.

use std::borrow::Cow;
use std::fmt;

/// A map key or lookup target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Textual key, as produced by document decoding.
    Text(String),
    /// Symbolic key. Rendered as `:name`.
    Symbol(String),
}

impl Key {
    pub fn text(name: impl Into<String>) -> Self {
        Key::Text(name.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }

    /// Parse the command-line form of a key.
    ///
    /// A leading `:` makes the key symbolic; `\:` escapes a literal leading
    /// colon. A lone `:` is textual.
    pub fn parse(input: &str) -> Self {
        if let Some(rest) = input.strip_prefix("\\:") {
            return Key::Text(format!(":{rest}"));
        }
        match input.strip_prefix(':') {
            Some(name) if !name.is_empty() => Key::Symbol(name.to_string()),
            _ => Key::Text(input.to_string()),
        }
    }

    /// The key's content without its representation.
    pub fn name(&self) -> &str {
        match self {
            Key::Text(name) | Key::Symbol(name) => name,
        }
    }

    /// Same content, symbolic representation.
    pub fn to_symbol(&self) -> Key {
        Key::Symbol(self.name().to_string())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(name) => write!(f, "{name}"),
            Key::Symbol(name) => write!(f, ":{name}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Text(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Text(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Canonicalizes keys before comparison. Attached to individual maps, never
/// global: each map decides how its own keys compare.
///
/// Must be idempotent. Maps store keys in normalized form and index them as
/// stored.
pub trait KeyNormalizer: fmt::Debug + Send + Sync {
    fn normalize<'k>(&self, key: &'k Key) -> Cow<'k, Key>;
}

/// Indifferent access: symbolic keys compare as text of the same content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indifferent;

impl KeyNormalizer for Indifferent {
    fn normalize<'k>(&self, key: &'k Key) -> Cow<'k, Key> {
        match key {
            Key::Text(_) => Cow::Borrowed(key),
            Key::Symbol(name) => Cow::Owned(Key::Text(name.clone())),
        }
    }
}

/// Compare an entry key against a lookup key, through `normalizer` when the
/// owning map has one and exactly otherwise.
pub fn keys_equal(entry: &Key, lookup: &Key, normalizer: Option<&dyn KeyNormalizer>) -> bool {
    match normalizer {
        None => entry == lookup,
        Some(n) => n.normalize(entry) == n.normalize(lookup),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
