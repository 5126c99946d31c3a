/// Value model tests: construction from typed and type-erased input,
/// structural equality, hashing, and container iteration.
use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};

use anyjson::{Number, Object, PathKey, Value};

fn hash_of(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn object(pairs: &[(&str, Value)]) -> Value {
    pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn from_scalars() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
    assert_eq!(Value::from(String::from("hi")), Value::String("hi".to_string()));
    assert_eq!(Value::from(2.5f64), Value::Number(Number::from(2.5f64)));
    assert_eq!(Value::from(()), Value::Null);
}

#[test]
fn from_option() {
    assert_eq!(Value::from(Some(3i32)), Value::from(3i32));
    assert_eq!(Value::from(None::<i32>), Value::Null);
}

#[test]
fn from_vec_is_element_wise() {
    let v = Value::from(vec![1i8, 2, 3]);
    assert_eq!(
        v,
        Value::Array(vec![Value::Bool(true), Value::from(2i8), Value::from(3i8)])
    );
}

#[test]
fn from_maps_keep_null_members() {
    let mut map: HashMap<String, Option<i32>> = HashMap::new();
    map.insert("a".to_string(), Some(1));
    map.insert("b".to_string(), None);
    let v = Value::from(map);
    assert_eq!(v.len(), 2);
    assert_eq!(v["b"], Value::Null);
    assert!(v.as_object().unwrap().contains_key("b"));

    let mut tree: BTreeMap<&str, &str> = BTreeMap::new();
    tree.insert("k", "v");
    assert_eq!(Value::from(tree), object(&[("k", Value::from("v"))]));
}

#[test]
fn from_number_applies_bool_like_rule() {
    assert_eq!(Value::from(Number::from(1i8)), Value::Bool(true));
    assert_eq!(Value::from(Number::from(true)), Value::Bool(true));
    assert!(Value::from(Number::from(1i16)).is_number());
}

#[test]
fn from_native_tree() {
    let native = serde_json::json!({"a": [1, true, null, "x"], "b": {"c": 1.5}});
    let v = Value::from(native);
    assert_eq!(v["a"][0], Value::from(1i64));
    assert_eq!(v["a"][1], Value::Bool(true));
    assert_eq!(v["a"][2], Value::Null);
    assert_eq!(v["a"][3], Value::from("x"));
    assert_eq!(v["b"]["c"], Value::from(1.5f64));
}

#[test]
fn native_true_and_one_stay_distinct() {
    let v = Value::from_native(serde_json::json!([true, 1]));
    assert!(v[0].is_bool());
    assert!(v[1].is_number());
}

// ============================================================================
// Type-erased construction
// ============================================================================

#[test]
fn from_any_scalars() {
    assert_eq!(Value::from_any(&true), Value::Bool(true));
    assert_eq!(Value::from_any(&1i8), Value::Bool(true));
    assert_eq!(Value::from_any(&1i16), Value::from(1i16));
    assert_eq!(Value::from_any(&2.5f32), Value::from(2.5f32));
    assert_eq!(Value::from_any(&String::from("s")), Value::from("s"));
    assert_eq!(Value::from_any(&"s"), Value::from("s"));
}

#[test]
fn from_any_value_is_idempotent() {
    let v = object(&[("k", Value::from(vec![1i32, 2]))]);
    assert_eq!(Value::from_any(&v), v);
}

#[test]
fn from_any_unrecognized_is_null() {
    struct Opaque;
    assert_eq!(Value::from_any(&Opaque), Value::Null);
    assert_eq!(Value::from_any(&()), Value::Null);
    let none: Option<Box<dyn Any>> = None;
    assert_eq!(Value::from_any(&none), Value::Null);
}

#[test]
fn from_any_nested_collections() {
    let list: Vec<Box<dyn Any>> = vec![Box::new(1i32), Box::new("two"), Box::new(())];
    let mut map: HashMap<String, Box<dyn Any>> = HashMap::new();
    map.insert("list".to_string(), Box::new(list));
    map.insert("flag".to_string(), Box::new(false));

    let v = Value::from_any(&map);
    assert_eq!(v["flag"], Value::Bool(false));
    assert_eq!(
        v["list"],
        Value::Array(vec![Value::from(1i32), Value::from("two"), Value::Null])
    );
}

#[test]
fn from_any_typed_vectors() {
    assert_eq!(Value::from_any(&vec![1i64, 2]), Value::from(vec![1i64, 2]));
    assert_eq!(
        Value::from_any(&vec![String::from("a"), String::from("b")]),
        Value::from(vec!["a", "b"])
    );
    assert_eq!(Value::from_any(&vec![true, false]), Value::from(vec![true, false]));
    assert_eq!(Value::from_any(&vec![0.5f64]), Value::from(vec![0.5f64]));
    assert_eq!(Value::from_any(&vec!["x"]), Value::from(vec!["x"]));
}

#[test]
fn from_any_typed_maps() {
    let mut names: HashMap<String, String> = HashMap::new();
    names.insert("first".to_string(), "Ada".to_string());
    assert_eq!(
        Value::from_any(&names),
        object(&[("first", Value::from("Ada"))])
    );

    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    counts.insert("n".to_string(), 3);
    assert_eq!(Value::from_any(&counts), object(&[("n", Value::from(3i64))]));

    let mut flags: indexmap::IndexMap<String, bool> = indexmap::IndexMap::new();
    flags.insert("on".to_string(), true);
    assert_eq!(Value::from_any(&flags), object(&[("on", Value::Bool(true))]));
}

// ============================================================================
// Equality and hashing
// ============================================================================

#[test]
fn array_equality_is_order_sensitive() {
    assert_ne!(Value::from(vec![1i32, 2]), Value::from(vec![2i32, 1]));
    assert_eq!(Value::from(vec![1i32, 2]), Value::from(vec![1.0f64, 2.0]));
}

#[test]
fn object_equality_ignores_member_order() {
    let a = object(&[("x", Value::from(1i32)), ("y", Value::from(2i32))]);
    let b = object(&[("y", Value::from(2i32)), ("x", Value::from(1i32))]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn object_with_explicit_null_differs_from_absent_member() {
    let a = object(&[("x", Value::Null)]);
    let b = Value::Object(Object::new());
    assert_ne!(a, b);
}

#[test]
fn hash_agrees_for_numbers_of_different_kinds() {
    let a = Value::from(vec![Value::from(3i16), Value::from(2.5f32)]);
    let b = Value::from(vec![Value::from(3u64), Value::from(2.5f64)]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn variants_never_compare_equal_across_kinds() {
    assert_ne!(Value::Bool(true), Value::from(1i32));
    assert_ne!(Value::from("1"), Value::from(1i32));
    assert_ne!(Value::Null, Value::Array(vec![]));
}

#[test]
fn nan_value_is_not_equal_to_itself() {
    let nan = Value::from(vec![Value::from(f64::NAN)]);
    assert_ne!(nan, nan.clone());
    assert_eq!(Value::from(1.5f64), Value::from(1.5f64));
}

#[test]
fn values_work_as_hash_set_members() {
    let mut set = std::collections::HashSet::new();
    set.insert(Value::from(1i32));
    set.insert(Value::from(1.0f64));
    set.insert(Value::from("1"));
    assert_eq!(set.len(), 2);
}

// ============================================================================
// Introspection and iteration
// ============================================================================

#[test]
fn kind_names_and_intro() {
    assert_eq!(Value::Null.kind_name(), "null");
    assert_eq!(Value::from(vec![1i32, 2, 3]).intro(), "array(3)");
    assert_eq!(Value::from("hi").intro(), "string(\"hi\")");
    assert_eq!(Value::Bool(false).intro(), "bool(false)");
}

#[test]
fn len_of_scalars_is_zero() {
    assert_eq!(Value::from("abc").len(), 0);
    assert!(Value::Null.is_empty());
    assert_eq!(Value::from(vec![1i32, 2]).len(), 2);
}

#[test]
fn iter_array_yields_index_keys() {
    let v = Value::from(vec!["a", "b"]);
    let items: Vec<(PathKey, &Value)> = v.iter().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].0, PathKey::Index(0));
    assert_eq!(items[1].1, &Value::from("b"));
}

#[test]
fn iter_object_yields_field_keys() {
    let v = object(&[("a", Value::from(1i32))]);
    let keys: Vec<PathKey> = v.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![PathKey::Field("a".to_string())]);
}

#[test]
fn iter_scalar_yields_nothing() {
    assert_eq!(Value::from(5i32).iter().count(), 0);
    assert_eq!((&Value::Null).into_iter().count(), 0);
}

#[test]
fn clone_is_deep() {
    let original = object(&[("list", Value::from(vec![1i32]))]);
    let mut copy = original.clone();
    copy.set(PathKey::from("list"), Value::from("replaced"));
    assert_eq!(original["list"], Value::from(vec![1i32]));
}
