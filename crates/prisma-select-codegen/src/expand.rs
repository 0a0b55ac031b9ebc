use crate::{GENERATOR_NAME, GENERATOR_VERSION};

use prisma_select_core::{
    schema::{FieldKind, Model},
    Error, Result, Schema,
};
use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn schema_file(schema: &Schema) -> Result<String> {
    Ok(with_header(expand_schema(schema)?))
}

pub(crate) fn mod_file() -> String {
    with_header(quote! {
        mod schema;
        pub use self::schema::{schema, ModelName};
    })
}

fn with_header(code: TokenStream) -> String {
    format!("// @generated by {GENERATOR_NAME} v{GENERATOR_VERSION}. Do not edit.\n\n{code}\n")
}

fn expand_schema(schema: &Schema) -> Result<TokenStream> {
    let models = schema.models().map(|(name, model)| {
        let model = expand_model(model);
        quote!(.with_model(#name, #model))
    });
    let model_names = expand_model_names(schema)?;

    Ok(quote! {
        use prisma_select::schema::{Field, FieldKind, Model};
        use prisma_select::Schema;

        /// Schema description of the datamodel.
        pub fn schema() -> Schema {
            Schema::new()
                #( #models )*
        }

        #model_names
    })
}

fn expand_model(model: &Model) -> TokenStream {
    let fields = model.fields.iter().map(|(name, field)| {
        let kind = expand_kind(field.kind());
        let ty = field.ty();
        quote!(.with_field(#name, Field::new(#kind, #ty)))
    });

    let documentation = model
        .documentation()
        .map(|documentation| quote!(.with_documentation(#documentation)));

    quote! {
        Model::new()
            #( #fields )*
            #documentation
    }
}

fn expand_kind(kind: FieldKind) -> TokenStream {
    match kind {
        FieldKind::Scalar => quote!(FieldKind::Scalar),
        FieldKind::Enum => quote!(FieldKind::Enum),
        FieldKind::Relation => quote!(FieldKind::Relation),
    }
}

fn expand_model_names(schema: &Schema) -> Result<TokenStream> {
    let mut variants = vec![];
    let mut names = vec![];
    let mut docs = vec![];

    for (name, model) in schema.models() {
        let ident = syn::parse_str::<syn::Ident>(name).map_err(|_| {
            Error::invalid_schema(format!(
                "model name `{name}` cannot be used as a Rust identifier"
            ))
        })?;

        let doc = model.documentation().map(|doc| quote!(#[doc = #doc]));

        variants.push(ident);
        names.push(name);
        docs.push(doc);
    }

    Ok(quote! {
        /// Models declared in the datamodel.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ModelName {
            #(
                #docs
                #variants,
            )*
        }

        impl ModelName {
            pub const ALL: &'static [ModelName] = &[ #( ModelName::#variants ),* ];

            pub fn as_str(&self) -> &'static str {
                match *self {
                    #( ModelName::#variants => #names, )*
                }
            }
        }

        impl std::fmt::Display for ModelName {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    })
}
