// ABOUTME: Exporter module for the touying-export application
// ABOUTME: Defines the conversion seam and drives the external Touying exporter

use crate::config::Config;
use crate::utils::default_output_path;
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Normalized parameters handed to the exporter
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub input: PathBuf,
    pub root: Option<PathBuf>,
    pub font_paths: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub start_page: u32,
    /// `None` exports every page from `start_page` on
    pub count: Option<u32>,
    pub silent: bool,
    pub sys_inputs: Map<String, Value>,
}

impl ExportRequest {
    /// The file the exporter writes to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// Failures surfaced by an exporter
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Failed(String),
}

/// Something that can turn a presentation into an HTML artifact on disk
pub trait Exporter {
    fn to_html(&self, request: &ExportRequest) -> Result<(), ConversionError>;
}

/// Runs `touying compile` as a child process
#[derive(Debug, Clone)]
pub struct CommandExporter {
    pub program: String,
}

impl CommandExporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.exporter_program.clone())
    }

    /// Build the argument list passed to the exporter program
    pub fn command_args(&self, request: &ExportRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "compile".into(),
            request.input.clone().into_os_string(),
            "--format".into(),
            "html".into(),
        ];

        if let Some(output) = &request.output {
            args.push("--output".into());
            args.push(output.clone().into_os_string());
        }
        if let Some(root) = &request.root {
            args.push("--root".into());
            args.push(root.clone().into_os_string());
        }
        if !request.font_paths.is_empty() {
            args.push("--font-paths".into());
            args.extend(request.font_paths.iter().map(|p| p.clone().into_os_string()));
        }

        args.push("--start-page".into());
        args.push(request.start_page.to_string().into());
        if let Some(count) = request.count {
            args.push("--count".into());
            args.push(count.to_string().into());
        }
        if request.silent {
            args.push("--silent".into());
        }

        args.push("--sys-inputs".into());
        args.push(Value::Object(request.sys_inputs.clone()).to_string().into());

        args
    }
}

impl Default for CommandExporter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Exporter for CommandExporter {
    fn to_html(&self, request: &ExportRequest) -> Result<(), ConversionError> {
        let args = self.command_args(request);
        info!("Running {} with {} arguments", self.program, args.len());
        debug!("Exporter arguments: {:?}", args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| classify_spawn_error(&self.program, e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.status.success() {
            if !stderr.trim().is_empty() {
                warn!("{}: {}", self.program, stderr.trim());
            }
            return Ok(());
        }

        Err(classify_failure(&stderr, output.status))
    }
}

fn classify_spawn_error(program: &str, err: io::Error) -> ConversionError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => ConversionError::PermissionDenied(err.to_string()),
        io::ErrorKind::NotFound => ConversionError::Failed(format!(
            "Exporter program not found: {} (is the touying package installed?)",
            program
        )),
        _ => ConversionError::Failed(format!("Failed to run {}: {}", program, err)),
    }
}

const PERMISSION_MARKERS: [&str; 3] = ["PermissionError", "Permission denied", "Access is denied"];

/// Map a failed exporter run onto a conversion error
pub fn classify_failure(stderr: &str, status: ExitStatus) -> ConversionError {
    let message = stderr.trim();
    if PERMISSION_MARKERS.iter().any(|m| message.contains(m)) {
        return ConversionError::PermissionDenied(message.to_string());
    }
    if message.is_empty() {
        ConversionError::Failed(format!("Exporter exited with {}", status))
    } else {
        ConversionError::Failed(message.to_string())
    }
}
