use super::{Field, MapAnnotation};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Fields keyed by name, in declaration order
    pub fields: IndexMap<String, Field>,

    /// Raw documentation comment. May carry a `@PrismaSelect.map([...])`
    /// annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, returning the model for chaining.
    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// The `@PrismaSelect.map([...])` annotation carried by the
    /// documentation, if any.
    pub fn map_annotation(&self) -> Option<MapAnnotation<'_>> {
        self.documentation().and_then(MapAnnotation::parse)
    }

    /// Returns true if the documentation maps the external type `name` onto
    /// this model.
    pub fn is_mapped_to(&self, name: &str) -> bool {
        self.map_annotation()
            .map(|annotation| annotation.contains(name))
            .unwrap_or(false)
    }
}
