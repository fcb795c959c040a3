//! Command handlers for the `switcher-utils` binary.

use crate::config::cli::Command;
use crate::config::settings::SwitcherConfig;
use crate::utils::error::{Result, UtilsError};
use crate::utils::report::PlatformReport;
use crate::utils::resources::{builtin_resources, DEFAULT_SETTINGS_RESOURCE};
use crate::utils::text::{read_file_as_text, resolve_encoding};
use crate::utils::validation::validate_namespace;
use std::fs;
use std::path::Path;

/// Runs `command` and returns what should be printed to stdout.
pub fn execute(command: &Command, settings: &SwitcherConfig) -> Result<String> {
    match command {
        Command::Platform { json } => platform(*json),
        Command::ReadFile { path, encoding } => read_file(path, encoding.as_deref(), settings),
        Command::Resource { name, namespace } => {
            resource(name, namespace.as_deref(), settings)
        }
        Command::Resources => Ok(builtin_resources().names().collect::<Vec<_>>().join("\n")),
        Command::Init { output, force } => init(output, *force),
    }
}

fn platform(json: bool) -> Result<String> {
    let report = PlatformReport::collect();
    tracing::debug!("Collected platform report: {:?}", report);

    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}

fn read_file(path: &Path, label: Option<&str>, settings: &SwitcherConfig) -> Result<String> {
    // 命令列參數優先於設定檔
    let encoding = match label {
        Some(label) => resolve_encoding(label)?,
        None => settings.encoding()?,
    };
    tracing::debug!("Reading {} as {}", path.display(), encoding.name());

    read_file_as_text(path, Some(encoding))
}

fn resource(name: &str, namespace: Option<&str>, settings: &SwitcherConfig) -> Result<String> {
    let namespace = namespace.unwrap_or_else(|| settings.namespace());
    validate_namespace("namespace", namespace)?;

    let scope = builtin_resources().scoped(namespace);
    tracing::debug!("Resolving resource {} as {}", name, scope.qualify(name));

    scope.read_as_text(name)
}

fn init(output: &Path, force: bool) -> Result<String> {
    if output.exists() && !force {
        return Err(UtilsError::InvalidArgument {
            argument: "output".to_string(),
            reason: format!("{} already exists, pass --force to overwrite", output.display()),
        });
    }

    let template = builtin_resources().read_as_text(DEFAULT_SETTINGS_RESOURCE)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, template)?;
    tracing::info!("Wrote default settings to {}", output.display());

    Ok(format!("Settings written to {}", output.display()))
}
