// ABOUTME: Configuration module for the touying-export application
// ABOUTME: Holds the read-only defaults consulted when CLI options are omitted

use std::path::PathBuf;

/// Input file used when none is given on the command line.
/// Set to `None` to always require an explicit input.
pub const DEFAULT_INPUT: Option<&str> = Some("Tutorial.typ");

/// Program that performs the actual Touying to HTML conversion
pub const DEFAULT_EXPORTER_PROGRAM: &str = "touying";

/// Process-wide fallback settings, never mutated after startup
#[derive(Debug, Clone)]
pub struct Config {
    pub default_input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub start_page: u32,
    /// `None` exports every remaining page
    pub count: Option<u32>,
    pub silent: bool,
    pub exporter_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_input: DEFAULT_INPUT.map(PathBuf::from),
            output: None,
            root: None,
            start_page: 1,
            count: None,
            silent: false,
            exporter_program: DEFAULT_EXPORTER_PROGRAM.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_input(mut self, input: Option<PathBuf>) -> Self {
        self.default_input = input;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    pub fn with_start_page(mut self, start_page: u32) -> Self {
        self.start_page = start_page;
        self
    }

    pub fn with_count(mut self, count: Option<u32>) -> Self {
        self.count = count;
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_exporter_program(mut self, program: impl Into<String>) -> Self {
        self.exporter_program = program.into();
        self
    }
}
