use prisma_select_codegen::DEFAULT_OUTPUT;
use std::path::{Path, PathBuf};

/// Defaults applied when the command line leaves an option out.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Output directory used when `--output` is not passed
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Use the suggested `./generated/prisma-select` output directory
    pub fn default_output(self) -> Self {
        self.output(DEFAULT_OUTPUT)
    }

    pub fn get_output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}
