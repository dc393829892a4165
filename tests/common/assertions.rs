//! Domain-specific assertion macros for deepfind harnesses.
//!
//! These wrap `pretty_assertions` and compare search results against
//! `serde_json::json!` literals, so expectations read like the documents they
//! are searched in. Each macro matches on its input so that temporaries in the
//! searched expression (`library().deep_find(..)`) outlive the comparison.

/// Assert that `find_first` matched a value equal to the JSON literal.
///
/// ```rust
/// assert_found!(doc.deep_find("address"), "123 Library St.");
/// ```
#[macro_export]
macro_rules! assert_found {
    ($result:expr, $($expected:tt)+) => {
        match $result {
            result => {
                let result: Option<&deepfind_core::Node> = result;
                let expected = serde_json::json!($($expected)+);
                match result {
                    Some(actual) => pretty_assertions::assert_eq!(
                        serde_json::Value::from(actual),
                        expected,
                        "assert_found! matched a different value"
                    ),
                    None => panic!("assert_found! failed: nothing matched.\n  expected: {}", expected),
                }
            }
        }
    };
}

/// Assert that a search came back Absent (`None`).
#[macro_export]
macro_rules! assert_absent {
    ($result:expr) => {
        match $result {
            Some(found) => panic!("assert_absent! failed: expected no match, found {:?}", found),
            None => {}
        }
    };
}

/// Assert that `find_all` matched exactly these values, in this order.
///
/// ```rust
/// assert_all_found!(doc.deep_find_all("x"), [1, 2]);
/// ```
#[macro_export]
macro_rules! assert_all_found {
    ($result:expr, $($expected:tt)+) => {
        match $result {
            result => {
                let result: Option<Vec<&deepfind_core::Node>> = result;
                let expected = serde_json::json!($($expected)+);
                match result {
                    Some(nodes) => {
                        let actual = serde_json::Value::Array(
                            nodes.into_iter().map(serde_json::Value::from).collect(),
                        );
                        pretty_assertions::assert_eq!(
                            actual,
                            expected,
                            "assert_all_found! order or content differs"
                        );
                    }
                    None => panic!("assert_all_found! failed: nothing matched.\n  expected: {}", expected),
                }
            }
        }
    };
}

/// Assert that `find_all` matched at least each of these values, in any order.
#[macro_export]
macro_rules! assert_includes {
    ($result:expr, [$($expected:tt),+ $(,)?]) => {
        match $result {
            result => {
                let result: Option<Vec<&deepfind_core::Node>> = result;
                let nodes = result.expect("assert_includes! failed: nothing matched");
                let actual: Vec<serde_json::Value> =
                    nodes.into_iter().map(serde_json::Value::from).collect();
                $(
                    let expected = serde_json::json!($expected);
                    if !actual.contains(&expected) {
                        panic!(
                            "assert_includes! failed: {} not among matches.\n  matches: {:?}",
                            expected, actual
                        );
                    }
                )+
            }
        }
    };
}
