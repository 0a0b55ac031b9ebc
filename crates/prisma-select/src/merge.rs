//! Deep merge of JSON objects, used to layer caller overrides on top of a
//! computed projection.

use serde_json::{Map, Value};

/// Nesting depth past which objects are copied wholesale instead of merged.
pub const MAX_MERGE_DEPTH: usize = 128;

/// Returns true if `value` is a JSON object. Arrays are not objects.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Merges every source into `target`, left to right, and returns `target`.
///
/// Object values are merged recursively, creating the nested object in
/// `target` when it is missing or not an object. Any other value, arrays
/// included, overwrites what `target` holds. A source that is not an object is
/// ignored, and so is every source when `target` is not an object.
pub fn merge_deep<I>(target: &mut Value, sources: I) -> &mut Value
where
    I: IntoIterator<Item = Value>,
{
    for source in sources {
        if let (Value::Object(target), Value::Object(source)) = (&mut *target, source) {
            merge_object(target, source, 0);
        }
    }

    target
}

fn merge_object(target: &mut Map<String, Value>, source: Map<String, Value>, depth: usize) {
    for (key, value) in source {
        match value {
            Value::Object(nested) if depth < MAX_MERGE_DEPTH => {
                let slot = target
                    .entry(key)
                    .or_insert_with(|| Value::Object(Map::new()));

                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }

                if let Value::Object(slot) = slot {
                    merge_object(slot, nested, depth + 1);
                }
            }
            value => {
                target.insert(key, value);
            }
        }
    }
}
