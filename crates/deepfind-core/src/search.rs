//! Deep key search: locate values stored under a key anywhere in a tree.
//!
//! Both retrieval modes share one depth-first pre-order traversal: at each map
//! entry the key is checked before descending into the entry's value, and that
//! descent finishes before the next sibling is examined. A match never stops
//! the descent into the matched value. [`find_first`] stops the whole
//! traversal at the first match; [`find_all`] exhausts it.
//!
//! Key comparison is decided by each [`Map`] encountered (see
//! [`Map::key_matches`]), so indifferent and exact maps can be mixed freely in
//! one tree.

use std::convert::Infallible;
use std::ops::ControlFlow;

use crate::key::Key;
use crate::types::{Map, Node};

/// A tree root that can be searched.
pub trait Traverse {
    /// Walk the tree in pre-order, calling `on_match` with every value stored
    /// under `key`. Stops as soon as `on_match` breaks.
    fn traverse<'a, B, F>(&'a self, key: &Key, on_match: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&'a Node) -> ControlFlow<B>;
}

impl Traverse for Node {
    fn traverse<'a, B, F>(&'a self, key: &Key, on_match: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&'a Node) -> ControlFlow<B>,
    {
        match self {
            Node::Map(map) => map.traverse(key, on_match),
            Node::Seq(items) => items.as_slice().traverse(key, on_match),
            Node::Scalar(_) => ControlFlow::Continue(()),
        }
    }
}

impl Traverse for Map {
    fn traverse<'a, B, F>(&'a self, key: &Key, on_match: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&'a Node) -> ControlFlow<B>,
    {
        for (entry_key, value) in self.iter() {
            if self.key_matches(entry_key, key) {
                on_match(value)?;
            }
            value.traverse(key, on_match)?;
        }
        ControlFlow::Continue(())
    }
}

impl Traverse for [Node] {
    fn traverse<'a, B, F>(&'a self, key: &Key, on_match: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&'a Node) -> ControlFlow<B>,
    {
        for item in self {
            item.traverse(key, on_match)?;
        }
        ControlFlow::Continue(())
    }
}

/// First value stored under `key` in pre-order, or `None` when no key in the
/// tree matches.
///
/// A key mapped to null yields `Some(&Node::Scalar(Scalar::Null))`, which is
/// distinct from `None`.
///
/// [`Scalar::Null`]: crate::Scalar::Null
pub fn find_first<'a, T>(root: &'a T, key: &Key) -> Option<&'a Node>
where
    T: Traverse + ?Sized,
{
    let found = match root.traverse(key, &mut |value| ControlFlow::Break(value)) {
        ControlFlow::Break(value) => Some(value),
        ControlFlow::Continue(()) => None,
    };
    tracing::debug!(key = %key, found = found.is_some(), "find_first");
    found
}

/// Every value stored under `key`, in pre-order. `None` when there are no
/// matches, never an empty `Vec`.
pub fn find_all<'a, T>(root: &'a T, key: &Key) -> Option<Vec<&'a Node>>
where
    T: Traverse + ?Sized,
{
    let mut matches = Vec::new();
    let ControlFlow::Continue(()) = root.traverse::<Infallible, _>(key, &mut |value| {
        tracing::trace!(key = %key, "match");
        matches.push(value);
        ControlFlow::Continue(())
    });
    tracing::debug!(key = %key, matches = matches.len(), "find_all");
    (!matches.is_empty()).then_some(matches)
}

/// Method-style access to [`find_first`] and [`find_all`], accepting anything
/// convertible into a [`Key`].
pub trait DeepFind: Traverse {
    fn deep_find(&self, key: impl Into<Key>) -> Option<&Node> {
        find_first(self, &key.into())
    }

    fn deep_find_all(&self, key: impl Into<Key>) -> Option<Vec<&Node>> {
        find_all(self, &key.into())
    }
}

impl<T: Traverse + ?Sized> DeepFind for T {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scalar;
    use pretty_assertions::assert_eq;

    fn tree(json: &str) -> Node {
        crate::document::parse_document(json).expect("valid JSON")
    }

    fn strs<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
        nodes.iter().copied().filter_map(Node::as_str).collect()
    }

    #[test]
    fn all_matches_follow_declaration_order() {
        let root = tree(r#"{"a": {"x": 1}, "b": {"x": 2}}"#);
        let found = find_all(&root, &Key::text("x")).expect("matches");
        assert_eq!(found, vec![&Node::from(1i64), &Node::from(2i64)]);
    }

    #[test]
    fn match_does_not_block_descent() {
        let root = tree(r#"{"outer": {"title": "t1", "inner": {"title": "t2"}}}"#);
        let found = find_all(&root, &Key::text("title")).expect("matches");
        assert_eq!(strs(&found), vec!["t1", "t2"]);
    }

    #[test]
    fn matched_value_is_searched_too() {
        let root = tree(r#"{"k": {"k": "inner"}}"#);
        let found = find_all(&root, &Key::text("k")).expect("matches");
        assert_eq!(found.len(), 2);
        assert!(found[0].as_map().is_some());
        assert_eq!(found[1].as_str(), Some("inner"));
    }

    #[test]
    fn sequences_are_walked_in_index_order() {
        let root = tree(r#"{"items": [{"n": 1}, {"n": 2}]}"#);
        let found = find_all(&root, &Key::text("n")).expect("matches");
        assert_eq!(found, vec![&Node::from(1i64), &Node::from(2i64)]);
    }

    #[test]
    fn first_match_is_pre_order_not_shallowest() {
        let root = tree(r#"{"a": {"b": {"k": 1}}, "c": {"k": 2}}"#);
        assert_eq!(find_first(&root, &Key::text("k")), Some(&Node::from(1i64)));
    }

    #[test]
    fn first_match_stops_traversal() {
        let root = tree(r#"{"a": {"k": 1}, "b": {"k": 2}, "c": {"k": 3}}"#);
        let mut seen = 0;
        let flow = root.traverse(&Key::text("k"), &mut |_| {
            seen += 1;
            ControlFlow::Break(())
        });
        assert!(flow.is_break());
        assert_eq!(seen, 1);
    }

    #[test]
    fn missing_key_is_absent_for_both_modes() {
        let root = tree(r#"{"a": [1, {"b": null}]}"#);
        assert_eq!(find_first(&root, &Key::text("wahoo")), None);
        assert_eq!(find_all(&root, &Key::text("wahoo")), None);
    }

    #[test]
    fn matched_null_is_not_absent() {
        let root = tree(r#"{"shelves": null}"#);
        assert_eq!(
            find_first(&root, &Key::text("shelves")),
            Some(&Node::Scalar(Scalar::Null))
        );
        assert_eq!(find_all(&root, &Key::text("shelves")).map(|v| v.len()), Some(1));
    }

    #[test]
    fn scalar_root_has_no_matches() {
        assert_eq!(find_first(&Node::from("k"), &Key::text("k")), None);
    }

    #[test]
    fn sequence_root_is_searchable() {
        let docs = vec![tree(r#"{"id": 1}"#), tree(r#"{"id": 2}"#)];
        let found = find_all(docs.as_slice(), &Key::text("id")).expect("matches");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn symbolic_lookup_misses_textual_keys_in_plain_maps() {
        let root = tree(r#"{"address": "X"}"#);
        assert_eq!(root.deep_find(Key::symbol("address")), None);
        assert_eq!(root.deep_find("address").and_then(Node::as_str), Some("X"));
    }

    #[test]
    fn each_map_governs_its_own_comparison() {
        let mut inner = Map::indifferent();
        inner.insert("title", "inner");
        let mut outer = Map::new();
        outer.insert("title", "outer");
        outer.insert("nested", inner);

        let found = outer.deep_find_all(Key::symbol("title")).expect("matches");
        assert_eq!(strs(&found), vec!["inner"]);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn tree_types_are_send_and_sync() {
        assert_send_sync::<Node>();
        assert_send_sync::<Map>();
        assert_send_sync::<Key>();
    }
}
