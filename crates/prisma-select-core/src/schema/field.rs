use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes one field of a model. The field name is the key it is stored
/// under in [`Model::fields`](super::Model::fields).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Scalar, enum or relation
    pub kind: FieldKind,

    /// Referenced type name. For relations this is the target model name,
    /// otherwise the scalar or enum type name.
    #[serde(rename = "type")]
    pub ty: String,
}

/// How a field is stored. Serialized with the datamodel vocabulary, where a
/// relation is an `"object"` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "scalar")]
    Scalar,
    #[serde(rename = "enum")]
    Enum,
    #[serde(rename = "object")]
    Relation,
}

impl Field {
    pub fn new(kind: FieldKind, ty: impl Into<String>) -> Self {
        Self {
            kind,
            ty: ty.into(),
        }
    }

    pub fn scalar(ty: impl Into<String>) -> Self {
        Self::new(FieldKind::Scalar, ty)
    }

    pub fn enumeration(ty: impl Into<String>) -> Self {
        Self::new(FieldKind::Enum, ty)
    }

    pub fn relation(target: impl Into<String>) -> Self {
        Self::new(FieldKind::Relation, target)
    }

    /// Gets the kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Gets the referenced type name.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn is_relation(&self) -> bool {
        self.kind.is_relation()
    }

    /// If the field is a relation, return the target model name.
    pub fn relation_target(&self) -> Option<&str> {
        match self.kind {
            FieldKind::Relation => Some(&self.ty),
            FieldKind::Scalar | FieldKind::Enum => None,
        }
    }
}

impl FieldKind {
    pub fn is_relation(self) -> bool {
        matches!(self, Self::Relation)
    }

    /// The datamodel spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Relation => "object",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
