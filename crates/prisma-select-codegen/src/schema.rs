use prisma_select_core::{err, schema::FieldKind, Error, Result};
use serde::{Deserialize, Serialize};

/// A model as declared in the datamodel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInput {
    /// Model name
    pub name: String,

    /// Model fields, in declaration order
    pub fields: Vec<FieldInput>,

    /// Documentation comment attached to the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInput {
    /// Field name
    pub name: String,

    /// Scalar, enum or relation (`"object"`)
    pub kind: FieldKind,

    /// Scalar type, enum name or related model name
    #[serde(rename = "type")]
    pub ty: String,
}

impl ModelInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            documentation: None,
        }
    }

    pub fn field(mut self, name: impl Into<String>, kind: FieldKind, ty: impl Into<String>) -> Self {
        self.fields.push(FieldInput {
            name: name.into(),
            kind,
            ty: ty.into(),
        });
        self
    }

    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Models(Vec<ModelInput>),
    List(ModelList),
    Dmmf { datamodel: ModelList },
}

#[derive(Deserialize)]
struct ModelList {
    models: Vec<ModelInput>,
}

/// Parses the models out of a datamodel JSON document.
///
/// Accepts a bare array of models, an object with a `models` array, or a
/// DMMF document holding them under `datamodel.models`. Keys other than the
/// ones [`ModelInput`] knows about are ignored.
pub fn parse_datamodel(src: &str) -> Result<Vec<ModelInput>> {
    let document: Document = serde_json::from_str(src)
        .map_err(|e| Error::from(anyhow::Error::from(e)).context(err!("invalid datamodel")))?;

    Ok(match document {
        Document::Models(models) => models,
        Document::List(list) => list.models,
        Document::Dmmf { datamodel } => datamodel.models,
    })
}
