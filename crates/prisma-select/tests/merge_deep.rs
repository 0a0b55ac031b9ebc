use pretty_assertions::assert_eq;
use prisma_select::merge::{is_object, merge_deep, MAX_MERGE_DEPTH};
use serde_json::{json, Value};

#[test]
fn is_object_only_for_maps() {
    assert!(is_object(&json!({})));
    assert!(is_object(&json!({ "a": 1 })));

    assert!(!is_object(&json!(null)));
    assert!(!is_object(&json!(42)));
    assert!(!is_object(&json!("str")));
    assert!(!is_object(&json!([1, 2])));
}

#[test]
fn merges_flat_objects() {
    let mut target = json!({ "a": 1 });
    merge_deep(&mut target, [json!({ "b": 2 })]);
    assert_eq!(target, json!({ "a": 1, "b": 2 }));
}

#[test]
fn merges_nested_objects() {
    let mut target = json!({ "a": { "x": 1 } });
    let merged = merge_deep(&mut target, [json!({ "a": { "y": 2 }, "b": 3 })]).clone();
    assert_eq!(merged, json!({ "a": { "x": 1, "y": 2 }, "b": 3 }));
    assert_eq!(target, merged);
}

#[test]
fn overwrites_non_object_values() {
    let mut target = json!({ "a": 1 });
    merge_deep(&mut target, [json!({ "a": 2 })]);
    assert_eq!(target, json!({ "a": 2 }));
}

#[test]
fn handles_multiple_sources() {
    let mut target = json!({});
    merge_deep(
        &mut target,
        [json!({ "a": 1 }), json!({ "b": 2 }), json!({ "c": 3, "a": 4 })],
    );
    assert_eq!(target, json!({ "a": 4, "b": 2, "c": 3 }));
}

#[test]
fn arrays_are_replaced_not_merged() {
    let mut target = json!({ "orderBy": [{ "id": "asc" }, { "name": "asc" }] });
    merge_deep(&mut target, [json!({ "orderBy": [{ "title": "desc" }] })]);
    assert_eq!(target, json!({ "orderBy": [{ "title": "desc" }] }));
}

#[test]
fn object_replaces_scalar_slot() {
    let mut target = json!({ "author": true });
    merge_deep(&mut target, [json!({ "author": { "select": { "id": true } } })]);
    assert_eq!(target, json!({ "author": { "select": { "id": true } } }));
}

#[test]
fn non_object_inputs_are_ignored() {
    let mut target = json!(true);
    merge_deep(&mut target, [json!({ "a": 1 })]);
    assert_eq!(target, json!(true));

    let mut target = json!({ "a": 1 });
    merge_deep(&mut target, [json!([1, 2]), json!(null)]);
    assert_eq!(target, json!({ "a": 1 }));
}

#[test]
fn no_sources_leaves_target_untouched() {
    let mut target = json!({ "a": { "b": 1 } });
    merge_deep(&mut target, Vec::<Value>::new());
    assert_eq!(target, json!({ "a": { "b": 1 } }));
}

#[test]
fn deep_sources_are_bounded() {
    fn nest(depth: usize, leaf: Value) -> Value {
        (0..depth).fold(leaf, |inner, _| json!({ "n": inner }))
    }

    let mut target = nest(MAX_MERGE_DEPTH + 10, json!({ "kept": true }));
    merge_deep(&mut target, [nest(MAX_MERGE_DEPTH + 10, json!({ "added": true }))]);

    let mut node = &target;
    for _ in 0..MAX_MERGE_DEPTH + 10 {
        node = &node["n"];
    }
    // Past the depth bound the source replaces the target wholesale
    assert_eq!(node, &json!({ "added": true }));
}
