//! deepfind-core: deep key search over nested documents.
//!
//! This crate exposes the document tree, the key model, and the search
//! operations as public modules.
//!
//! # Architecture
//!
//! ```text
//! text ──► document ──► Node tree ──► search ──► matches
//!                          │
//!                          └── Map: key normalizer (exact / indifferent)
//! ```
//!
//! Searching is synchronous and read-only. It never fails: a missing key is
//! reported as `None`, distinct from a key that maps to null.

pub mod config;
pub mod document;
pub mod error;
pub mod key;
pub mod search;
pub mod types;

pub use error::{Error, Result};
pub use key::{Indifferent, Key, KeyNormalizer};
pub use search::{find_all, find_first, DeepFind, Traverse};
pub use types::{Map, Node, Scalar};
