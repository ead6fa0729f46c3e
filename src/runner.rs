// ABOUTME: Runner for the touying-export application
// ABOUTME: Validates arguments, delegates to the exporter and reports the outcome

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::errors::{ExportError, Result};
use crate::exporter::{ConversionError, ExportRequest, Exporter};
use crate::utils::{resolve_against, validate_input_exists};
use log::{debug, info};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Parse the `--sys-inputs` string into a key-value mapping
pub fn parse_sys_inputs(raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ExportError::SysInputsNotObject {
            input: raw.to_string(),
        }),
        Err(e) => Err(ExportError::InvalidJsonError {
            input: raw.to_string(),
            source: e,
        }),
    }
}

/// Apply defaults and local checks, producing the request for the exporter
pub fn build_request(args: &ExportArgs, config: &Config, cwd: &Path) -> Result<ExportRequest> {
    let non_empty = |p: &&PathBuf| !p.as_os_str().is_empty();
    let input = args
        .input
        .as_ref()
        .filter(non_empty)
        .or_else(|| config.default_input.as_ref().filter(non_empty))
        .ok_or(ExportError::UsageError)?;

    let input = resolve_against(cwd, input);
    validate_input_exists(&input, cwd)?;

    let sys_inputs = parse_sys_inputs(&args.sys_inputs)?;

    let output = args
        .output
        .as_ref()
        .or(config.output.as_ref())
        .map(|p| resolve_against(cwd, p));
    let root: Option<PathBuf> = args.root.clone().or_else(|| config.root.clone());

    Ok(ExportRequest {
        input,
        root,
        font_paths: args.font_paths.clone(),
        output,
        start_page: args.start_page.unwrap_or(config.start_page),
        count: args.count.or(config.count),
        silent: args.silent || config.silent,
        sys_inputs,
    })
}

/// Run one export: validate, delegate once, then report success to `out`.
///
/// Returns the path of the produced artifact.
pub fn run<E, W>(
    args: &ExportArgs,
    config: &Config,
    cwd: &Path,
    exporter: &E,
    out: &mut W,
) -> Result<PathBuf>
where
    E: Exporter + ?Sized,
    W: Write,
{
    let request = build_request(args, config, cwd)?;
    info!("Exporting {:?} to HTML", request.input);
    debug!("Export request: {:?}", request);

    exporter.to_html(&request).map_err(|e| match e {
        ConversionError::PermissionDenied(details) => ExportError::AccessDeniedError {
            input: request.input.clone(),
            details,
        },
        ConversionError::Failed(message) => ExportError::GenericConversionError(message),
    })?;

    let output = request.output_path();
    if !request.silent {
        writeln!(out, "Successfully exported to {}", output.display())?;
    }
    Ok(output)
}
