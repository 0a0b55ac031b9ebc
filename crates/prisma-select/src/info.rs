use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a resolver knows about the field it is resolving: the declared return
/// type and the tree of sub-selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveInfo {
    /// Declared return type, possibly decorated, e.g. `[User!]!`
    pub return_type: String,

    /// The root field of the resolver
    pub field: ResolvedField,
}

/// One node of a resolved selection tree.
///
/// Mirrors the shape produced by common resolve-info parsers, so it can be
/// deserialized straight from `{name, alias, args, fieldsByTypeName}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    /// Name of the underlying schema field
    pub name: String,

    /// Response key; equal to `name` unless the query aliased the field
    #[serde(default)]
    pub alias: String,

    /// Arguments passed to the field
    #[serde(default)]
    pub args: Map<String, Value>,

    /// Sub-selections grouped by type condition, each keyed by response key
    #[serde(default)]
    pub fields_by_type_name: IndexMap<String, IndexMap<String, ResolvedField>>,
}

impl ResolveInfo {
    pub fn new(return_type: impl Into<String>, field: ResolvedField) -> Self {
        Self {
            return_type: return_type.into(),
            field,
        }
    }

    /// The return type with list and non-null markers removed.
    pub fn named_type(&self) -> String {
        named_type(&self.return_type)
    }
}

impl ResolvedField {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            ..Self::default()
        }
    }

    /// Sets the response key.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Adds sub-selections under the type condition `type_name`.
    pub fn select(
        mut self,
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = ResolvedField>,
    ) -> Self {
        let selections = self
            .fields_by_type_name
            .entry(type_name.into())
            .or_default();

        for field in fields {
            selections.insert(field.response_key().to_string(), field);
        }

        self
    }

    pub fn response_key(&self) -> &str {
        if self.alias.is_empty() {
            &self.name
        } else {
            &self.alias
        }
    }

    /// Returns true if nothing is selected below this field.
    pub fn is_leaf(&self) -> bool {
        self.fields_by_type_name.is_empty()
    }

    /// Sub-selections across every type condition, in order.
    pub fn children(&self) -> impl Iterator<Item = &ResolvedField> {
        self.fields_by_type_name
            .values()
            .flat_map(|selections| selections.values())
    }
}

/// Strips GraphQL list and non-null markers: `[Post!]!` becomes `Post`.
pub fn named_type(ty: &str) -> String {
    ty.chars()
        .filter(|c| !matches!(c, '[' | ']' | '!'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_wrapping_markers() {
        assert_eq!(named_type("[User!]!"), "User");
        assert_eq!(named_type("AggregateUser!"), "AggregateUser");
        assert_eq!(named_type("Post"), "Post");
    }

    #[test]
    fn aliased_children_keep_their_real_name() {
        let field = ResolvedField::new("user").select(
            "User",
            [
                ResolvedField::new("id"),
                ResolvedField::new("name").alias("displayName"),
            ],
        );

        let keys: Vec<_> = field.fields_by_type_name["User"]
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["id", "displayName"]);

        let names: Vec<_> = field.children().map(|child| child.name.as_str()).collect();
        assert_eq!(names, ["id", "name"]);
    }
}
