mod alias;
pub use alias::MapAnnotation;

mod field;
pub use field::{Field, FieldKind};

mod model;
pub use model::Model;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Static description of the data model: model name → [`Model`].
///
/// Built once by the generator and shared read-only between translations.
/// Insertion order is preserved; it decides which model wins when two models
/// claim the same alias through `@PrismaSelect.map([...])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub models: IndexMap<String, Model>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model, returning the schema for chaining.
    pub fn with_model(mut self, name: impl Into<String>, model: Model) -> Self {
        self.insert(name, model);
        self
    }

    /// Inserts a model, returning the one previously stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, model: Model) -> Option<Model> {
        self.models.insert(name.into(), model)
    }

    /// Get a model by its declared name only.
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Resolve a type name to a model.
    ///
    /// A model declared under `name` always wins. Otherwise the first model,
    /// in insertion order, whose documentation maps `name` is returned.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.resolve(name).map(|(_, model)| model)
    }

    /// Same as [`Schema::model`] but also returns the declared model name.
    pub fn resolve(&self, name: &str) -> Option<(&str, &Model)> {
        if name.is_empty() {
            return None;
        }

        if let Some((declared, model)) = self.models.get_key_value(name) {
            return Some((declared.as_str(), model));
        }

        self.models
            .iter()
            .find(|(_, model)| model.is_mapped_to(name))
            .map(|(declared, model)| (declared.as_str(), model))
    }

    pub fn models(&self) -> impl Iterator<Item = (&str, &Model)> {
        self.models.iter().map(|(name, model)| (name.as_str(), model))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<(String, Model)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, Model)>>(iter: I) -> Self {
        Schema {
            models: iter.into_iter().collect(),
        }
    }
}
