//! Generates the schema description consumed by `prisma-select` from a list
//! of datamodel models.

mod expand;

mod schema;
pub use schema::{parse_datamodel, FieldInput, ModelInput};

mod writer;
pub use writer::{write_schema, Generated};

use prisma_select_core::{
    schema::{Field, Model},
    Error, Result, Schema,
};

pub const GENERATOR_NAME: &str = "prisma-select";
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output directory suggested to users. Never applied implicitly.
pub const DEFAULT_OUTPUT: &str = "./generated/prisma-select";

/// Builds the schema description for `models`.
///
/// Kinds, referenced type names and documentation are copied verbatim, and
/// field order follows the input. Model names and field names within a model
/// must be unique.
pub fn generate(models: &[ModelInput]) -> Result<Schema> {
    let mut schema = Schema::new();

    for input in models {
        let mut model = Model::new();

        for field in &input.fields {
            if model.fields.contains_key(&field.name) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` declares field `{}` more than once",
                    input.name, field.name
                )));
            }

            model
                .fields
                .insert(field.name.clone(), Field::new(field.kind, &field.ty));
        }

        model.documentation = input.documentation.clone();

        if schema.insert(input.name.clone(), model).is_some() {
            return Err(Error::invalid_schema(format!(
                "model `{}` is declared more than once",
                input.name
            )));
        }
    }

    Ok(schema)
}

/// Renders `schema` as the Rust source of the generated `schema.rs`.
pub fn render_schema(schema: &Schema) -> Result<String> {
    expand::schema_file(schema)
}
