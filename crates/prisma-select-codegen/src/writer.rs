use crate::{expand, generate, ModelInput, DEFAULT_OUTPUT, GENERATOR_NAME, GENERATOR_VERSION};

use log::info;
use prisma_select_core::{Error, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Files written by [`write_schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The schema description as JSON
    pub json: PathBuf,

    /// The schema description as Rust source
    pub source: PathBuf,

    /// Module file re-exporting the Rust source
    pub module: PathBuf,
}

/// Generates the schema description for `models` and writes it to `output`.
///
/// Fails before touching the filesystem when no output directory is given.
/// An empty path counts as none.
pub fn write_schema(output: Option<&Path>, models: &[ModelInput]) -> Result<Generated> {
    let Some(output) = output.filter(|output| !output.as_os_str().is_empty()) else {
        return Err(Error::configuration(format!(
            "Output directory is required. Add `output = \"{DEFAULT_OUTPUT}\"` to your generator block."
        )));
    };

    let schema = generate(models)?;
    let source = expand::schema_file(&schema)?;
    let json = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;

    fs::create_dir_all(output)?;

    info!("{GENERATOR_NAME} generator v{GENERATOR_VERSION}");
    info!("output: {}", output.display());

    let generated = Generated {
        json: output.join("schema.json"),
        source: output.join("schema.rs"),
        module: output.join("mod.rs"),
    };

    fs::write(&generated.json, json + "\n")?;
    fs::write(&generated.source, source)?;
    fs::write(&generated.module, expand::mod_file())?;

    info!("generated {} models", schema.len());

    Ok(generated)
}
