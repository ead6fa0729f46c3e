// ABOUTME: Command-line arguments for the touying-export application
// ABOUTME: Declares the clap schema mirrored by the exporter's own options

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  touying-export presentation.typ
  touying-export presentation.typ -o output.html
  touying-export presentation.typ --start-page 2 --count 5

You can also configure the file path directly by setting DEFAULT_INPUT in src/config.rs.";

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Export Touying presentation to HTML",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct ExportArgs {
    /// Input typst file
    pub input: Option<PathBuf>,

    /// Output HTML file (default: input.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Root directory for typst file
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Paths to custom fonts
    #[arg(long, num_args = 0..)]
    pub font_paths: Vec<PathBuf>,

    /// Page to start from (default: 1)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub start_page: Option<u32>,

    /// Number of pages to convert (default: all)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Run silently without output
    #[arg(long)]
    pub silent: bool,

    /// JSON string to pass to typst's sys.inputs
    #[arg(long, default_value = "{}")]
    pub sys_inputs: String,
}
