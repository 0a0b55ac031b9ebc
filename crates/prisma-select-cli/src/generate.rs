use crate::Config;

use anyhow::Result;
use clap::Parser;
use log::debug;
use prisma_select_codegen::{parse_datamodel, write_schema, Generated};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Datamodel JSON: a model array, `{ "models": [...] }` or a DMMF document
    #[arg(short, long)]
    datamodel: PathBuf,

    /// Directory to write the generated files to
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<Generated> {
        debug!("reading datamodel from {}", self.datamodel.display());

        let src = fs::read_to_string(&self.datamodel)?;
        let models = parse_datamodel(&src)?;

        let output = self.output.as_deref().or(config.get_output());
        let generated = write_schema(output, &models)?;

        println!("Generated {}", generated.json.display());
        println!("Generated {}", generated.source.display());
        println!("Generated {}", generated.module.display());

        Ok(generated)
    }
}
