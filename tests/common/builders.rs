//! Test builders: ergonomic constructors for document trees.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use deepfind_core::{document, Key, Map, Node};

// ---------------------------------------------------------------------------
// MapBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Map`] fixtures with explicit key representations.
///
/// # Example
///
/// ```rust
/// let node = MapBuilder::plain()
///     .sym("address", "X")
///     .text("title", MapBuilder::indifferent().sym("title", "inner").build())
///     .build();
/// ```
pub struct MapBuilder {
    map: Map,
}

impl MapBuilder {
    pub fn plain() -> Self {
        Self { map: Map::new() }
    }

    pub fn indifferent() -> Self {
        Self { map: Map::indifferent() }
    }

    pub fn text(mut self, key: &str, value: impl Into<Node>) -> Self {
        self.map.insert(Key::text(key), value);
        self
    }

    pub fn sym(mut self, key: &str, value: impl Into<Node>) -> Self {
        self.map.insert(Key::symbol(key), value);
        self
    }

    pub fn build_map(self) -> Map {
        self.map
    }

    pub fn build(self) -> Node {
        Node::Map(self.map)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Parse a JSON document, keeping source key order.
pub fn doc(json: &str) -> Node {
    document::parse_document(json).expect("test document must be valid JSON")
}

pub fn seq(items: impl IntoIterator<Item = Node>) -> Node {
    Node::Seq(items.into_iter().collect())
}

/// A chain of `depth` single-entry maps `{"level": {"level": ... "leaf"}}`.
pub fn nested_chain(depth: usize) -> Node {
    (0..depth).fold(Node::from("leaf"), |inner, _| {
        MapBuilder::plain().text("level", inner).build()
    })
}
