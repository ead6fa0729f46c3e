// ABOUTME: Main entry point for the touying-export program.
// ABOUTME: Parses the CLI, runs one export and maps the outcome to an exit status.

use clap::Parser;
use env_logger::Env;
use std::io;
use touying_export::{CommandExporter, Config, ExportArgs, ExportError};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Every argument error exits 1; help and version still exit 0
    let args = match ExportArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let config = Config::default();
    let exporter = CommandExporter::from_config(&config);

    let result = std::env::current_dir()
        .map_err(ExportError::from)
        .and_then(|cwd| touying_export::run(&args, &config, &cwd, &exporter, &mut io::stdout()));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
