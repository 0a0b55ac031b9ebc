mod config;
mod generate;

pub use config::*;
pub use generate::GenerateCommand;

use anyhow::Result;
use clap::Parser;
use prisma_select_codegen::Generated;

/// Command-line front end of the schema generator.
///
/// Embed it in a project binary to run `generate` with a preset [`Config`].
#[derive(Debug, Default)]
pub struct PrismaSelectCli {
    config: Config,
}

impl PrismaSelectCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Falls back to `config` for options missing from the command line.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the command given on the process command line.
    pub fn parse_and_run(&self) -> Result<Generated> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Runs the command given in `args`, whose first item is the binary name.
    /// Argument errors are returned rather than printed.
    pub fn parse_from<I, T>(&self, args: I) -> Result<Generated>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<Generated> {
        match cli.command {
            Command::Generate(cmd) => cmd.run(&self.config),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "prisma-select")]
#[command(about = "Generates the schema description used to build Prisma select projections")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate schema.json, schema.rs and mod.rs from a datamodel
    Generate(GenerateCommand),
}
