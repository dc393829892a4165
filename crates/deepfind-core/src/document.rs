//! Document decoding and encoding.
//!
//! [`Node`] deserializes from any self-describing serde format. Map entries
//! keep the order they appear in the source text, independently of how
//! `serde_json::Map` orders its keys, and decoded keys are always
//! [`Key::Text`].

use std::fmt;
use std::io::Read;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Error, Result};
use crate::key::Key;
use crate::types::{Map, Node, Scalar};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a single JSON document.
pub fn parse_document(text: &str) -> Result<Node> {
    Ok(serde_json::from_str(text)?)
}

/// Parse JSON Lines: one document per non-blank line. Errors carry the
/// 1-based line number.
pub fn parse_lines(text: &str) -> Result<Vec<Node>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| Error::JsonLine { line: i + 1, source })
        })
        .collect()
}

/// Read all of `reader` and parse it as one document, or as JSON Lines when
/// `lines` is set.
pub fn read_documents<R: Read>(mut reader: R, lines: bool) -> Result<Vec<Node>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    tracing::debug!(bytes = text.len(), lines, "read input");
    if lines {
        parse_lines(&text)
    } else {
        parse_document(&text).map(|doc| vec![doc])
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map, sequence, string, number, boolean or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Node, E> {
        Ok(Node::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Node, E> {
        Ok(Node::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Node, E> {
        Ok(Node::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Node, E> {
        Ok(Node::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Node, E> {
        Ok(Node::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Node, E> {
        Ok(Node::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::null())
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element()? {
            items.push(item);
        }
        Ok(Node::Seq(items))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Duplicate keys: last wins, at the first occurrence's position.
        let mut map = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Node>()? {
            map.insert(Key::Text(key), value);
        }
        Ok(Node::Map(map))
    }
}

/// Symbolic keys serialize as their bare name. A plain map holding both `:a`
/// and `"a"` therefore writes the object key `a` twice; decoders that keep the
/// last duplicate (as [`parse_document`] does) read back only the second value.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key.name(), value)?;
                }
                out.end()
            }
            Node::Seq(items) => serializer.collect_seq(items),
            Node::Scalar(Scalar::Null) => serializer.serialize_unit(),
            Node::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Node::Scalar(Scalar::Number(n)) => n.serialize(serializer),
            Node::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// serde_json::Value interop
// ---------------------------------------------------------------------------

/// Map order follows `serde_json::Map`'s iteration order, which is sorted by
/// key unless serde_json's `preserve_order` feature is enabled. Use
/// [`parse_document`] when source order matters.
impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Node::null(),
            Value::Bool(b) => Node::from(b),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::from(s),
            Value::Array(items) => Node::Seq(items.into_iter().map(Node::from).collect()),
            Value::Object(obj) => Node::Map(
                obj.into_iter()
                    .map(|(k, v)| (Key::Text(k), Node::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Keys are written by name, so `:a` and `"a"` in one plain map collapse into
/// a single `"a"` entry holding the later value. Compare [`Node`]s directly
/// when the key representation matters.
impl From<&Node> for serde_json::Value {
    fn from(node: &Node) -> Self {
        use serde_json::Value;
        match node {
            Node::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.name().to_string(), Value::from(v)))
                    .collect(),
            ),
            Node::Seq(items) => Value::Array(items.iter().map(Value::from).collect()),
            Node::Scalar(Scalar::Null) => Value::Null,
            Node::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            Node::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            Node::Scalar(Scalar::String(s)) => Value::String(s.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
