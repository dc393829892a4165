//! Static documents used across harnesses.
//!
//! The library document is the canonical nested fixture: maps inside
//! sequences inside maps, a null value, a map-valued key, and one key
//! (`title`) that recurs at three different depths.

use deepfind_core::{document, Node};

/// Library listing, keys in source order.
pub const LIBRARY_JSON: &str = r#"{
  "library": {
    "books": [
      { "title": "Call of the Wild", "author": "Jack London" },
      { "title": "Moby Dick", "author": "Herman Melville" }
    ],
    "shelves": null,
    "location": {
      "address": "123 Library St.",
      "title": "Main Library"
    },
    "employees": [
      {
        "info": { "name": "John", "surname": "Smith", "prefix": "Mr." },
        "position": "Head Librarian"
      }
    ]
  },
  "title": "Book Listing"
}"#;

/// JSON Lines input: three documents, the middle one without an `id`.
pub const EVENTS_JSONL: &str = r#"{"id": 1, "payload": {"user": {"id": "u-1"}}}
{"kind": "heartbeat"}

{"id": 3, "payload": {"tags": ["a", "b"]}}
"#;

/// The library with textual keys, as decoded from JSON.
pub fn library() -> Node {
    document::parse_document(LIBRARY_JSON).expect("fixture must parse")
}

/// The library with symbolic keys only, in plain (exact) maps.
pub fn library_symbols() -> Node {
    library().symbolize_keys()
}

/// The symbol-keyed library converted to indifferent access throughout.
pub fn library_indifferent() -> Node {
    library_symbols().with_indifferent_access()
}
