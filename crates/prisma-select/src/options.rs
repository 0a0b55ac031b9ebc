use crate::Selection;

use indexmap::IndexMap;
use prisma_select_core::Schema;
use serde_json::Value;
use std::{borrow::Cow, fmt, sync::Arc};

/// Fields always selected for a model, even if the query did not ask for them.
pub type DefaultFields = FieldSpec<Selection>;

/// Fields never selected for a model, even if the query asked for them.
pub type ExcludeFields = FieldSpec<Vec<String>>;

/// A per-model field specification: either a fixed value or a function of the
/// selection requested for that model.
pub enum FieldSpec<T> {
    Static(T),
    Computed(Arc<dyn Fn(&Selection) -> T + Send + Sync>),
}

impl<T: Clone> FieldSpec<T> {
    pub fn computed(f: impl Fn(&Selection) -> T + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    /// Evaluates against the selection requested at this level.
    pub fn resolve(&self, selection: &Selection) -> Cow<'_, T> {
        match self {
            Self::Static(value) => Cow::Borrowed(value),
            Self::Computed(f) => Cow::Owned(f(selection)),
        }
    }
}

impl FieldSpec<Selection> {
    /// Selects each named field with `true`.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Static(
            names
                .into_iter()
                .map(|name| (name.into(), Value::Bool(true)))
                .collect(),
        )
    }
}

impl FieldSpec<Vec<String>> {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Static(names.into_iter().map(Into::into).collect())
    }
}

impl<T> From<T> for FieldSpec<T> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: Clone> Clone for FieldSpec<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(value) => Self::Static(value.clone()),
            Self::Computed(f) => Self::Computed(f.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => fmt.debug_tuple("Static").field(value).finish(),
            Self::Computed(_) => fmt.write_str("Computed(..)"),
        }
    }
}

/// Construction-time options of a [`PrismaSelect`](crate::PrismaSelect).
///
/// Without a schema, filtering is skipped and the projection mirrors the
/// query as-is.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Schema description used to drop undeclared fields
    pub schema: Option<Arc<Schema>>,

    /// Fields to always include, keyed by model name
    pub default_fields: IndexMap<String, DefaultFields>,

    /// Fields to always drop, keyed by model name
    pub exclude_fields: IndexMap<String, ExcludeFields>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<Arc<Schema>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn default_fields(
        mut self,
        model: impl Into<String>,
        spec: impl Into<DefaultFields>,
    ) -> Self {
        self.default_fields.insert(model.into(), spec.into());
        self
    }

    pub fn exclude_fields(
        mut self,
        model: impl Into<String>,
        spec: impl Into<ExcludeFields>,
    ) -> Self {
        self.exclude_fields.insert(model.into(), spec.into());
        self
    }

    pub fn get_schema(&self) -> Option<&Schema> {
        self.schema.as_deref()
    }

    /// Default fields for a model, looked up by the requested name first and
    /// by the declared model name second.
    pub(crate) fn defaults_for(&self, requested: &str, declared: &str) -> Option<&DefaultFields> {
        self.default_fields
            .get(requested)
            .or_else(|| self.default_fields.get(declared))
    }

    pub(crate) fn excludes_for(&self, requested: &str, declared: &str) -> Option<&ExcludeFields> {
        self.exclude_fields
            .get(requested)
            .or_else(|| self.exclude_fields.get(declared))
    }
}
