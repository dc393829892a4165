//! deepfind: find values by key anywhere in a nested document.
//!
//! This crate re-exports [`deepfind_core`] and adds the command-line front end
//! in [`cli`], so that integration tests can drive the binary's logic
//! in-process.
//!
//! # Example
//!
//! ```
//! use deepfind::{document, DeepFind, Key};
//!
//! let doc = document::parse_document(r#"{"a": {"x": 1}, "b": {"x": 2}}"#).unwrap();
//! assert_eq!(doc.deep_find_all("x").map(|v| v.len()), Some(2));
//! assert!(doc.deep_find(Key::symbol("x")).is_none());
//! ```

pub mod cli;

pub use deepfind_core::*;
