//! Core types for deepfind-core.
//!
//! This module defines the document tree searched by [`crate::search`]: the
//! [`Node`] union, the ordered [`Map`] with its optional key normalizer, and
//! [`Scalar`] leaves.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::key::{keys_equal, Indifferent, Key, KeyNormalizer};

/// One value in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Map(Map),
    Seq(Vec<Node>),
    Scalar(Scalar),
}

/// Non-traversable leaf value. `Null` is a real value, not absence.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl Node {
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Node]> {
        match self {
            Node::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Convert every map in the tree, including maps inside sequences, into
    /// an indifferent-access map. Keys that collide once normalized keep the
    /// last value.
    pub fn with_indifferent_access(self) -> Node {
        match self {
            Node::Map(map) => Node::Map(map.with_indifferent_access()),
            Node::Seq(items) => Node::Seq(
                items
                    .into_iter()
                    .map(Node::with_indifferent_access)
                    .collect(),
            ),
            scalar => scalar,
        }
    }

    /// Turn every textual key in the tree into a symbolic one. Maps keep their
    /// normalizer, so an indifferent map stays text-keyed.
    pub fn symbolize_keys(self) -> Node {
        match self {
            Node::Map(map) => {
                let mut out = Map::with_normalizer_of(&map);
                for (key, value) in map {
                    out.insert(key.to_symbol(), value.symbolize_keys());
                }
                Node::Map(out)
            }
            Node::Seq(items) => Node::Seq(items.into_iter().map(Node::symbolize_keys).collect()),
            scalar => scalar,
        }
    }
}

impl From<Map> for Node {
    fn from(map: Map) -> Self {
        Node::Map(map)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Seq(items)
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::String(s))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Scalar(Scalar::Number(n.into()))
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Node::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for Node {
    /// Non-finite floats have no number representation and become `Null`.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n)
            .map(|n| Node::Scalar(Scalar::Number(n)))
            .unwrap_or_else(Node::null)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(Node::null)
    }
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

/// Ordered key → [`Node`] mapping with unique keys.
///
/// Enumeration order is insertion order. With a normalizer attached, keys are
/// normalized on insert and compared through the normalizer on lookup, so
/// `"a"` and `:a` address the same entry of an indifferent map.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: Vec<(Key, Node)>,
    /// Stored key → position in `entries`. Stored keys are already normalized.
    index: HashMap<Key, usize>,
    normalizer: Option<Arc<dyn KeyNormalizer>>,
}

impl Map {
    /// Empty map with exact key comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty map with [`Indifferent`] key comparison.
    pub fn indifferent() -> Self {
        Self::with_normalizer(Arc::new(Indifferent))
    }

    pub fn with_normalizer(normalizer: Arc<dyn KeyNormalizer>) -> Self {
        Self {
            normalizer: Some(normalizer),
            ..Self::default()
        }
    }

    fn with_normalizer_of(other: &Map) -> Self {
        Self {
            normalizer: other.normalizer.clone(),
            ..Self::default()
        }
    }

    pub fn normalizer(&self) -> Option<&dyn KeyNormalizer> {
        self.normalizer.as_deref()
    }

    pub fn is_indifferent(&self) -> bool {
        self.normalizer.is_some()
    }

    /// Whether `entry` (a key of this map) matches `lookup` under this map's
    /// comparison semantics.
    pub fn key_matches(&self, entry: &Key, lookup: &Key) -> bool {
        keys_equal(entry, lookup, self.normalizer())
    }

    /// Insert or replace. A replaced entry keeps its position; the previous
    /// value is returned.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Node>) -> Option<Node> {
        let key = self.lookup_form(&key.into()).into_owned();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Node> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Node)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn with_indifferent_access(self) -> Map {
        let mut out = Map::indifferent();
        for (key, value) in self.entries {
            out.insert(key, value.with_indifferent_access());
        }
        out
    }

    fn lookup_form<'k>(&self, key: &'k Key) -> Cow<'k, Key> {
        match self.normalizer() {
            Some(n) => n.normalize(key),
            None => Cow::Borrowed(key),
        }
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.index.get(self.lookup_form(key).as_ref()).copied()
    }
}

/// Content equality: same keys (exactly) with equal values, in any order.
/// The normalizer is not part of a map's value.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(k, v)| {
                other
                    .entries
                    .iter()
                    .any(|(ok, ov)| ok == k && ov == v)
            })
    }
}

impl<K: Into<Key>, V: Into<Node>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (Key, Node);
    type IntoIter = std::vec::IntoIter<(Key, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
