use crate::{info::named_type, merge::merge_deep, Options, ResolveInfo, ResolvedField};

use log::{debug, trace};
use prisma_select_core::schema::FieldKind;
use serde_json::{Map, Value};

/// Field name → `true` or nested projection, as found under `select`.
pub type Selection = Map<String, Value>;

/// Root arguments forwarded to the storage layer. Anything else the query
/// passes is dropped.
const AVAILABLE_ARGS: [&str; 6] = ["where", "orderBy", "skip", "cursor", "take", "distinct"];

/// Meta fields copied through without consulting the schema.
const ALLOWED_PROPS: [&str; 1] = ["_count"];

/// Return types containing this marker produce flat, `select`-less output.
const AGGREGATE_MARKER: &str = "Aggregate";

const SELECT: &str = "select";

/// Converts the selection tree of a resolver into a storage `select`
/// projection.
///
/// Built per resolver call and thrown away afterwards. Every accessor
/// recomputes its result from the resolve info, so repeated calls return
/// equal, freshly allocated values.
///
/// ```ignore
/// let select = PrismaSelect::new(&info, Options::new().schema(schema));
/// // { "select": { "id": true, "posts": { "select": { "title": true } } } }
/// let projection = select.value();
/// ```
#[derive(Debug, Clone)]
pub struct PrismaSelect<'a> {
    info: &'a ResolveInfo,
    options: Options,

    /// Root return type without list / non-null markers
    root_type: String,

    /// True when the root type is an aggregation result
    is_aggregate: bool,
}

impl<'a> PrismaSelect<'a> {
    pub fn new(info: &'a ResolveInfo, options: Options) -> Self {
        let root_type = named_type(&info.return_type);
        let is_aggregate = root_type.contains(AGGREGATE_MARKER);

        Self {
            info,
            options,
            root_type,
            is_aggregate,
        }
    }

    /// The filtered projection for the whole query, using the root return
    /// type as the model name.
    pub fn value(&self) -> Value {
        self.value_with_filter(&self.root_type)
    }

    /// The filtered projection for the whole query, filtered against
    /// `model_name`. Use this when the GraphQL type is not named after the
    /// model.
    pub fn value_with_filter(&self, model_name: &str) -> Value {
        self.filter_by(model_name, self.get_select(&self.info.field, true))
    }

    /// The unfiltered projection of the field at the dot-separated `path`.
    ///
    /// Returns `{}` when any segment of the path was not selected.
    pub fn value_of(&self, path: &str) -> Value {
        self.navigate(path).unwrap_or_else(empty)
    }

    /// Like [`value_of`](Self::value_of), but filters the node against
    /// `filter_by` and then deep-merges `merge_object` on top of the result.
    pub fn value_of_with(&self, path: &str, filter_by: &str, merge_object: Value) -> Value {
        let Some(node) = self.navigate(path) else {
            return empty();
        };

        let mut filtered = self.filter_by(filter_by, node);
        merge_deep(&mut filtered, [merge_object]);
        filtered
    }

    pub fn is_aggregate(&self) -> bool {
        self.is_aggregate
    }

    pub fn root_type_name(&self) -> &str {
        &self.root_type
    }

    pub fn info(&self) -> &ResolveInfo {
        self.info
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn navigate(&self, path: &str) -> Option<Value> {
        let mut node = self.get_select(&self.info.field, true);

        for segment in path.split('.') {
            node = self.take_selected(node, segment)?;
        }

        Some(node)
    }

    /// Removes and returns the selection of `key` from `node`.
    fn take_selected(&self, node: Value, key: &str) -> Option<Value> {
        let Value::Object(mut node) = node else {
            return None;
        };

        if self.is_aggregate {
            return node.remove(key);
        }

        match node.remove(SELECT)? {
            Value::Object(mut selection) => selection.remove(key),
            _ => None,
        }
    }

    /// Builds the unfiltered projection of `field`. Only the root carries
    /// arguments.
    fn get_select(&self, field: &ResolvedField, root: bool) -> Value {
        let mut selection = Selection::new();

        for child in field.children() {
            let value = if child.is_leaf() {
                Value::Bool(true)
            } else {
                self.get_select(child, false)
            };

            selection.insert(child.name.clone(), value);
        }

        if self.is_aggregate {
            return Value::Object(selection);
        }

        let mut node = Map::new();
        node.insert(SELECT.to_string(), Value::Object(selection));

        if root {
            for name in AVAILABLE_ARGS {
                match field.args.get(name) {
                    Some(Value::Null) | None => {}
                    Some(value) => {
                        node.insert(name.to_string(), value.clone());
                    }
                }
            }
        }

        Value::Object(node)
    }

    /// Filters `node` against the model resolved from `model_name`.
    ///
    /// Unknown models and non-object nodes pass through unchanged.
    fn filter_by(&self, model_name: &str, node: Value) -> Value {
        let Some(schema) = self.options.get_schema() else {
            return node;
        };

        let Some((declared, model)) = schema.resolve(model_name) else {
            debug!("no model matches `{model_name}`; selection is not filtered");
            return node;
        };

        let mut node = match node {
            Value::Object(node) => node,
            other => return other,
        };

        let selection = if self.is_aggregate {
            std::mem::take(&mut node)
        } else {
            match node.get_mut(SELECT) {
                Some(Value::Object(selection)) => std::mem::take(selection),
                _ => Selection::new(),
            }
        };

        // Defaults are seeded as-is; the exclude list only applies to fields
        // requested by the query.
        let mut filtered = match self.options.defaults_for(model_name, declared) {
            Some(spec) => spec.resolve(&selection).into_owned(),
            None => Selection::new(),
        };

        let excluded = self
            .options
            .excludes_for(model_name, declared)
            .map(|spec| spec.resolve(&selection));

        for (key, value) in selection {
            if excluded
                .as_deref()
                .is_some_and(|excluded| excluded.iter().any(|name| *name == key))
            {
                trace!("excluding `{declared}.{key}`");
                continue;
            }

            if ALLOWED_PROPS.contains(&key.as_str()) {
                filtered.insert(key, value);
                continue;
            }

            let Some(field) = model.field(&key) else {
                trace!("dropping `{key}`; not declared on `{declared}`");
                continue;
            };

            match field.kind() {
                FieldKind::Scalar | FieldKind::Enum => {
                    filtered.insert(key, Value::Bool(true));
                }
                FieldKind::Relation => match self.filter_by(field.ty(), value) {
                    Value::Bool(true) => {
                        filtered.insert(key, Value::Bool(true));
                    }
                    nested if self.has_selection(&nested) => {
                        filtered.insert(key, nested);
                    }
                    _ => {
                        trace!("pruning empty relation `{declared}.{key}`");
                    }
                },
            }
        }

        if self.is_aggregate {
            return Value::Object(filtered);
        }

        node.insert(SELECT.to_string(), Value::Object(filtered));
        Value::Object(node)
    }

    fn has_selection(&self, node: &Value) -> bool {
        let selection = if self.is_aggregate {
            node.as_object()
        } else {
            node.get(SELECT).and_then(Value::as_object)
        };

        selection.is_some_and(|selection| !selection.is_empty())
    }
}

fn empty() -> Value {
    Value::Object(Map::new())
}
