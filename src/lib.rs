// ABOUTME: Library module for the touying-export program.
// ABOUTME: Contains argument handling and the delegation to the Touying exporter.

pub mod cli;
pub mod config;
pub mod errors;
pub mod exporter;
pub mod runner;
pub mod utils;

// Reexport common types and functions
pub use cli::ExportArgs;
pub use config::{Config, DEFAULT_EXPORTER_PROGRAM, DEFAULT_INPUT};
pub use errors::{ExportError, Result};
pub use exporter::{CommandExporter, ConversionError, ExportRequest, Exporter};
pub use runner::{build_request, parse_sys_inputs, run};
pub use utils::{HTML_EXTENSION, default_output_path, resolve_against};
