#![cfg(feature = "json")]

use closure_compat::{array, is_def, is_def_and_not_null, is_null, json, Nullable};
use serde::Deserialize;
use serde_json::{json, Value};

#[test]
fn users_from_json() {
    let users = json!([
        {"id": 1, "name": "ada", "isActive": true},
        {"id": 2, "name": "bob", "isActive": false},
    ]);
    let active = array::filter(Some(&users), |_, u, _, _| u["isActive"] == json!(true), None);
    assert_eq!(active, vec![json!({"id": 1, "name": "ada", "isActive": true})]);
    assert_eq!(users.as_array().map(Vec::len), Some(2));
}

#[test]
fn null_is_an_empty_sequence() {
    let null = Value::Null;
    let mut calls = 0;
    array::for_each(Some(&null), |_, _, _, _| calls += 1, None);
    assert_eq!(calls, 0);
    assert!(array::is_empty(Some(&null)));
    assert!(!array::contains(Some(&null), &json!(1)));
    assert_eq!(array::find(Some(&null), |_, _, _, _| true, None), None);
}

#[test]
fn array_like_object_is_iterated_by_index() {
    let obj = json!({"0": "x", "1": "y", "length": 2});
    let upper = array::map(
        Some(&obj),
        |_, v, _, _| v.as_str().map(str::to_uppercase).unwrap_or_default(),
        None,
    );
    assert_eq!(upper, vec!["X".to_string(), "Y".to_string()]);
    assert!(array::contains(Some(&obj), &json!("y")));
}

#[test]
fn contains_uses_strict_equality() {
    let v = json!([1, "2", null, [3]]);
    assert!(array::contains(Some(&v), &json!(1.0)));
    assert!(!array::contains(Some(&v), &json!(2)));
    assert!(array::contains(Some(&v), &json!(null)));
    assert!(!array::contains(Some(&v), &json!([3])));
}

#[test]
fn flatten_one_level() {
    let v = json!([[1, 2], 3, [4]]);
    assert_eq!(
        array::flatten(Some(&v)),
        vec![json!(1), json!(2), json!(3), json!(4)]
    );
    let deep = json!([[1, [2]]]);
    assert_eq!(array::flatten(Some(&deep)), vec![json!(1), json!([2])]);
}

#[test]
fn remove_duplicates_with_same_value_zero() {
    let mut v = json!([3, 1, 3.0, 2, 1, "1"]);
    array::remove_duplicates(Some(&mut v), None);
    assert_eq!(v, json!([3, 1, 2, "1"]));

    let mut composites = json!([1, 1.0, [1], [1]]);
    array::remove_duplicates(Some(&mut composites), None);
    assert_eq!(composites, json!([1, [1], [1]]));
}

#[test]
fn remove_duplicates_fills_return_array_and_source() {
    let mut source = json!(["a", "b", "a"]);
    let mut rv = vec![json!("stale")];
    array::remove_duplicates(Some(&mut source), Some(&mut rv));
    assert_eq!(rv, vec![json!("a"), json!("b")]);
    assert_eq!(source, json!(["a", "b"]));
}

#[test]
fn remove_duplicates_by_custom_key() {
    let mut users = json!([{"id": 1}, {"id": 2}, {"id": 1}]);
    array::remove_duplicates_by(Some(&mut users), None, |u| u["id"].as_u64());
    assert_eq!(users, json!([{"id": 1}, {"id": 2}]));
}

#[test]
fn sparse_array_like_holes() {
    let sparse = json!({"0": 1, "2": 3, "length": 3});
    let mapped = array::map(Some(&sparse), |_, v, _, _| v.as_i64(), None);
    assert_eq!(mapped, vec![Some(1), None, Some(3)]);
    assert_eq!(array::clone(Some(&sparse)).len(), 3);

    let mut calls = 0;
    array::for_each(Some(&sparse), |_, _, _, _| calls += 1, None);
    assert_eq!(calls, 2);

    let mut dupes = json!({"0": 1, "2": 1, "length": 3});
    array::remove_duplicates(Some(&mut dupes), None);
    assert_eq!(dupes["length"], json!(2));
    assert_eq!(dupes["1"], Value::Null);
}

#[test]
fn sort_with_legacy_default_order() {
    let mut v = json!([10, 1, 9, "b", "a"]);
    array::sort_by(Some(&mut v), json::default_compare);
    assert_eq!(v, json!([1, 10, 9, "a", "b"]));
}

#[test]
fn remove_at_on_json_array() {
    let mut v = json!(["a", "b", "c"]);
    assert!(array::remove_at(Some(&mut v), 0));
    assert!(!array::remove_at(Some(&mut v), 2));
    assert_eq!(v, json!(["b", "c"]));
}

#[test]
fn json_null_classification() {
    let null = Value::Null;
    assert!(is_def(&null));
    assert!(is_null(&null));
    assert!(!is_def_and_not_null(&null));
    assert!(is_def_and_not_null(&json!(0)));
    assert!(is_def_and_not_null(&json!("")));
}

#[derive(Debug, Deserialize)]
struct Profile {
    #[serde(default)]
    nickname: Nullable<String>,
}

#[test]
fn nullable_distinguishes_missing_from_null() {
    let missing: Profile = serde_json::from_value(json!({})).expect("missing field");
    let null: Profile = serde_json::from_value(json!({"nickname": null})).expect("null field");
    let set: Profile = serde_json::from_value(json!({"nickname": "ace"})).expect("set field");

    assert!(!is_def(&missing.nickname));
    assert!(is_def(&null.nickname));
    assert!(is_null(&null.nickname));
    assert!(is_def_and_not_null(&set.nickname));
    assert_eq!(set.nickname, Nullable::Value("ace".to_string()));

    assert_eq!(serde_json::to_value(&missing.nickname).ok(), Some(Value::Null));
    assert_eq!(serde_json::to_value(&set.nickname).ok(), Some(json!("ace")));
}
