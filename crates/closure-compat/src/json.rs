//! `serde_json::Value` as a loosely typed legacy value.
//!
//! - `Null` is an absent sequence.
//! - `Array` is a sequence.
//! - `String` is a sequence of one-character strings. Each read walks the
//!   string from the start, as `str` does.
//! - `Object` is array-like through its `"length"` property and decimal
//!   index keys (`{"0": "a", "1": "b", "length": 2}`).
//! - `Bool` and `Number` have no elements.
//!
//! Arrays and objects are distinct objects: they are never strictly equal to
//! anything, not even a structurally equal copy.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use serde_json::{Map, Value};

use crate::array::Spread;
use crate::array_like::{ArrayLike, ArrayLikeMut};
use crate::nullness::Nullish;
use crate::strict_eq::{SameValueZero, StrictEq};

const LENGTH: &str = "length";

/// `ToLength` applied to an object's `length` property.
fn object_length(map: &Map<String, Value>) -> usize {
    let n = match map.get(LENGTH) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if n.is_nan() || n <= 0.0 {
        0
    } else {
        n.floor() as usize
    }
}

impl ArrayLike for Value {
    type Item = Value;

    fn length(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::String(s) => s.chars().count(),
            Value::Object(map) => object_length(map),
            _ => 0,
        }
    }

    fn item(&self, index: usize) -> Option<Value> {
        match self {
            Value::Array(items) => items.get(index).cloned(),
            Value::String(s) => s.chars().nth(index).map(|c| Value::String(c.to_string())),
            Value::Object(map) => map.get(&index.to_string()).cloned(),
            _ => None,
        }
    }

    /// A hole in an array-like object reads as `null`, the closest JSON has to
    /// `undefined`.
    fn undefined(&self) -> Option<Value> {
        Some(Value::Null)
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn has_zero_length(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            // Strict comparison: only the number zero counts.
            Value::Object(map) => map.get(LENGTH).and_then(Value::as_f64) == Some(0.0),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

impl ArrayLikeMut for Value {
    fn set_item(&mut self, index: usize, item: Value) {
        match self {
            Value::Array(items) => {
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = item;
            }
            Value::Object(map) => {
                map.insert(index.to_string(), item);
            }
            // Writes to primitives are silently dropped.
            _ => {}
        }
    }

    fn set_length(&mut self, len: usize) {
        match self {
            Value::Array(items) => items.resize(len, Value::Null),
            // A plain object only records the new length; stale index keys stay.
            Value::Object(map) => {
                map.insert(LENGTH.to_string(), Value::from(len));
            }
            _ => {}
        }
    }

    fn remove_item(&mut self, index: usize) -> Option<Value> {
        match self {
            Value::Array(items) => {
                if index < items.len() {
                    Some(items.remove(index))
                } else {
                    None
                }
            }
            Value::Object(map) => {
                let len = object_length(map);
                if index >= len {
                    return None;
                }
                let removed = map.remove(&index.to_string());
                for k in index + 1..len {
                    match map.remove(&k.to_string()) {
                        Some(v) => {
                            map.insert((k - 1).to_string(), v);
                        }
                        None => {
                            map.remove(&(k - 1).to_string());
                        }
                    }
                }
                map.insert(LENGTH.to_string(), Value::from(len - 1));
                Some(removed.unwrap_or(Value::Null))
            }
            _ => None,
        }
    }
}

impl Nullish for Value {
    fn is_undefined(&self) -> bool {
        false
    }

    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

impl StrictEq for Value {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl SameValueZero for Value {
    type Key = ValueKey;

    fn same_value_zero_key(&self) -> ValueKey {
        same_value_zero_key(self)
    }
}

impl Spread for Value {
    fn spread(&self) -> Option<Vec<Value>> {
        match self {
            Value::Array(items) => Some(items.clone()),
            _ => None,
        }
    }
}

/// A hashable stand-in for a value under `SameValueZero`.
///
/// [`remove_duplicates`](crate::array::remove_duplicates) keys loose values
/// by it, deduplicating the way a legacy `Set` does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Null,
    Bool(bool),
    Number(u64),
    String(String),
    Object(u64),
}

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(0);

/// The `SameValueZero` key of `value`.
///
/// `-0` and `0` share a key, as do all `NaN`s. Every array or object gets a
/// fresh key, so composites are never considered duplicates.
///
/// # Examples
///
/// ```
/// use closure_compat::{array, json};
/// use serde_json::json;
///
/// let key = json::same_value_zero_key;
/// assert_eq!(key(&json!(0)), key(&json!(-0.0)));
/// assert_ne!(key(&json!([1])), key(&json!([1])));
/// ```
pub fn same_value_zero_key(value: &Value) -> ValueKey {
    match value {
        Value::Null => ValueKey::Null,
        Value::Bool(b) => ValueKey::Bool(*b),
        Value::Number(n) => {
            let f = n.as_f64().unwrap_or(f64::NAN);
            let f = if f == 0.0 { 0.0 } else { f };
            let bits = if f.is_nan() { f64::NAN.to_bits() } else { f.to_bits() };
            ValueKey::Number(bits)
        }
        Value::String(s) => ValueKey::String(s.clone()),
        Value::Array(_) | Value::Object(_) => {
            ValueKey::Object(NEXT_OBJECT_ID.fetch_add(1, AtomicOrdering::Relaxed))
        }
    }
}

/// The legacy string form of a value, as used by the default sort order.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                if f == 0.0 {
                    "0".to_string()
                } else if f.fract() == 0.0 && f.abs() < 1e21 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// The order a legacy sort uses when no comparator is given: string forms
/// compared by UTF-16 code units.
///
/// # Examples
///
/// ```
/// use closure_compat::{array, json};
/// use serde_json::json;
///
/// let mut v = json!([10, 9, 1]);
/// array::sort_by(Some(&mut v), json::default_compare);
/// assert_eq!(v, json!([1, 10, 9]));
/// ```
pub fn default_compare(a: &Value, b: &Value) -> Ordering {
    to_js_string(a)
        .encode_utf16()
        .cmp(to_js_string(b).encode_utf16())
}
