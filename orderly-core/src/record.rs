//! Path traversal over record data.
//!
//! [`Record`] is the seam between the evaluator and whatever data model the
//! caller sorts. It is implemented for [`orderly_model::Value`] and, with the
//! `json` feature, for `serde_json::Value`. Types that are only ever sorted
//! through getters can implement it with an empty body.

use crate::error::{Result, SortError};
use orderly_model::{FieldPath, LENGTH_SEGMENT, SortValue, Value};

/// Outcome of stepping one segment into a record node.
#[derive(Debug)]
pub enum Step<'a, R: ?Sized> {
    /// A nested node that may be stepped into further.
    Node(&'a R),
    /// A computed scalar, such as a list's `length`.
    Value(SortValue),
    /// The segment does not exist, or holds null.
    Missing,
}

/// Data that dotted paths can be resolved against.
pub trait Record {
    /// Step into `segment`. `None` means this node is a primitive and cannot
    /// be indexed at all.
    fn child(&self, segment: &str) -> Option<Step<'_, Self>> {
        let _ = segment;
        None
    }

    /// The comparison operand for this node. `None` for structured nodes.
    fn sort_value(&self) -> Option<SortValue> {
        None
    }
}

enum Cursor<'a, R: ?Sized> {
    Node(&'a R),
    Value(SortValue),
    Missing,
}

/// Resolve `path` against `record`.
///
/// A missing intermediate makes the whole path missing. Stepping into a
/// present primitive fails with [`SortError::PathResolution`], and a path that
/// ends on a list or map fails with [`SortError::UnsortableValue`].
pub fn resolve_path<R: Record + ?Sized>(record: &R, path: &FieldPath) -> Result<SortValue> {
    let mut cursor = Cursor::Node(record);

    for segment in path.segments() {
        cursor = match cursor {
            Cursor::Node(node) => match node.child(segment) {
                Some(Step::Node(next)) => Cursor::Node(next),
                Some(Step::Value(value)) => Cursor::Value(value),
                Some(Step::Missing) => Cursor::Missing,
                None => {
                    return Err(SortError::PathResolution {
                        path: path.to_string(),
                    });
                }
            },
            Cursor::Value(_) => {
                return Err(SortError::PathResolution {
                    path: path.to_string(),
                });
            }
            Cursor::Missing => break,
        };
    }

    match cursor {
        Cursor::Node(node) => node.sort_value().ok_or_else(|| SortError::UnsortableValue {
            path: path.to_string(),
        }),
        Cursor::Value(value) => Ok(value),
        Cursor::Missing => Ok(SortValue::Missing),
    }
}

fn list_step<'a, R>(items: &'a [R], segment: &str) -> Step<'a, R> {
    if segment == LENGTH_SEGMENT {
        return Step::Value(SortValue::from(items.len()));
    }

    match list_index(segment).and_then(|index| items.get(index)) {
        Some(item) => Step::Node(item),
        None => Step::Missing,
    }
}

/// Canonical decimal index: digits only, no leading zero except `0` itself.
/// Anything else (`+1`, `01`, `1.0`) names no element.
fn list_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));

    if canonical { segment.parse().ok() } else { None }
}

impl Record for Value {
    fn child(&self, segment: &str) -> Option<Step<'_, Self>> {
        match self {
            Value::Map(map) => Some(match map.get(segment) {
                Some(Value::Null) | None => Step::Missing,
                Some(value) => Step::Node(value),
            }),
            Value::List(items) => Some(list_step(items, segment)),
            Value::Null => Some(Step::Missing),
            _ => None,
        }
    }

    fn sort_value(&self) -> Option<SortValue> {
        self.to_sort_value()
    }
}

#[cfg(feature = "json")]
impl Record for serde_json::Value {
    fn child(&self, segment: &str) -> Option<Step<'_, Self>> {
        use serde_json::Value as Json;

        match self {
            Json::Object(map) => Some(match map.get(segment) {
                Some(Json::Null) | None => Step::Missing,
                Some(value) => Step::Node(value),
            }),
            Json::Array(items) => Some(list_step(items, segment)),
            Json::Null => Some(Step::Missing),
            _ => None,
        }
    }

    fn sort_value(&self) -> Option<SortValue> {
        use serde_json::Value as Json;

        match self {
            Json::Null => Some(SortValue::Missing),
            Json::Bool(b) => Some(SortValue::Bool(*b)),
            Json::Number(n) => Some(n.as_f64().map_or(SortValue::Missing, SortValue::Number)),
            Json::String(s) => Some(SortValue::Text(s.clone())),
            Json::Array(_) | Json::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    fn user() -> Value {
        Value::map([
            ("name", Value::from("Alice")),
            (
                "address",
                Value::map([("city", Value::from("Zagreb"))]),
            ),
            ("emails", Value::list(["a@ltd.test", "b@mail.test"])),
            ("nickname", Value::Null),
        ])
    }

    #[test]
    fn test_resolves_nested_fields_and_indices() {
        let record = user();
        assert_eq!(
            resolve_path(&record, &path("address.city")).unwrap(),
            SortValue::from("Zagreb")
        );
        assert_eq!(
            resolve_path(&record, &path("emails.1")).unwrap(),
            SortValue::from("b@mail.test")
        );
        assert_eq!(
            resolve_path(&record, &path("emails.length")).unwrap(),
            SortValue::Number(2.0)
        );
    }

    #[test]
    fn test_missing_intermediates_resolve_to_missing() {
        let record = Value::map([("name", Value::from("Bob"))]);
        assert!(resolve_path(&record, &path("address.city")).unwrap().is_missing());
        assert!(resolve_path(&user(), &path("nickname.first")).unwrap().is_missing());
        assert!(resolve_path(&user(), &path("emails.7")).unwrap().is_missing());
    }

    #[test]
    fn test_only_canonical_indices_address_list_elements() {
        let record = user();
        assert_eq!(
            resolve_path(&record, &path("emails.0")).unwrap(),
            SortValue::from("a@ltd.test")
        );
        for segment in ["emails.01", "emails.+1", "emails.00", "emails.1e0", "emails.-0"] {
            assert!(
                resolve_path(&record, &path(segment)).unwrap().is_missing(),
                "{segment} should not address an element"
            );
        }
        assert_eq!(list_index("10"), Some(10));
        assert_eq!(list_index(""), None);
    }

    #[test]
    fn test_indexing_a_primitive_fails() {
        let err = resolve_path(&user(), &path("name.first")).unwrap_err();
        assert!(matches!(err, SortError::PathResolution { ref path } if path == "name.first"));

        let err = resolve_path(&user(), &path("emails.length.x")).unwrap_err();
        assert!(matches!(err, SortError::PathResolution { .. }));
    }

    #[test]
    fn test_structured_leaf_is_unsortable() {
        let err = resolve_path(&user(), &path("address")).unwrap_err();
        assert!(matches!(err, SortError::UnsortableValue { .. }));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_records() {
        let record = serde_json::json!({"positions": [{"company": "Amazon", "years": 5}]});
        assert_eq!(
            resolve_path(&record, &path("positions.0.years")).unwrap(),
            SortValue::Number(5.0)
        );
        assert_eq!(
            resolve_path(&record, &path("positions.length")).unwrap(),
            SortValue::Number(1.0)
        );
    }
}
