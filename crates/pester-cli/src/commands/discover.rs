//! Test script discovery command

use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use pester_core::ScriptLister;
use serde::Serialize;

/// Output format for discovered scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One raw path per line, byte-exact
    Text,
    /// JSON document for host adapters; non-UTF-8 paths are converted lossily
    Json,
}

/// JSON report emitted with `--format json`
#[derive(Debug, Serialize)]
struct DiscoveryReport<'a> {
    project_directory: Cow<'a, str>,
    scripts: Vec<Cow<'a, str>>,
}

/// Run the discover command
pub fn run(project_dir: Option<&Path>, format: OutputFormat, sorted: bool) -> Result<()> {
    let lister = ScriptLister::new(project_dir).context("Failed to discover test scripts")?;
    let mut scripts = lister
        .collect()
        .context("Failed to discover test scripts")?;

    if sorted {
        scripts.sort();
    }

    tracing::info!("Discovered {} test script(s)", scripts.len());

    let rendered = render(lister.root(), &scripts, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&rendered)?;
    stdout.flush()?;
    Ok(())
}

fn render(project_directory: &Path, scripts: &[PathBuf], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => {
            let mut out = Vec::new();
            for script in scripts {
                // Raw OS bytes on Unix so hosts get a path that exists
                out.extend_from_slice(script.as_os_str().as_encoded_bytes());
                out.push(b'\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let report = DiscoveryReport {
                project_directory: json_path(project_directory),
                scripts: scripts.iter().map(|script| json_path(script)).collect(),
            };
            let mut json = serde_json::to_vec_pretty(&report)
                .context("Failed to serialize discovery report")?;
            json.push(b'\n');
            Ok(json)
        }
    }
}

/// JSON strings must be UTF-8; invalid sequences become U+FFFD.
fn json_path(path: &Path) -> Cow<'_, str> {
    let text = path.to_string_lossy();
    if let Cow::Owned(_) = text {
        tracing::warn!(
            "Path is not valid UTF-8, reported lossily in JSON: {}",
            path.display()
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let scripts = vec![
            PathBuf::from("proj/A.Tests.ps1"),
            PathBuf::from("proj/sub/B.Tests.ps1"),
        ];
        let out = render(Path::new("proj"), &scripts, OutputFormat::Text).unwrap();
        assert_eq!(out, b"proj/A.Tests.ps1\nproj/sub/B.Tests.ps1\n");
    }

    #[test]
    fn test_render_text_empty() {
        let out = render(Path::new("proj"), &[], OutputFormat::Text).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_json() {
        let scripts = vec![PathBuf::from("proj/A.Tests.ps1")];
        let out = render(Path::new("proj"), &scripts, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["project_directory"], "proj");
        assert_eq!(value["scripts"][0], "proj/A.Tests.ps1");
        assert_eq!(value["scripts"].as_array().unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_render_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let scripts = vec![Path::new("proj").join(OsStr::from_bytes(b"Caf\xe9.Tests.ps1"))];

        let text = render(Path::new("proj"), &scripts, OutputFormat::Text).unwrap();
        assert_eq!(text, b"proj/Caf\xe9.Tests.ps1\n");

        let json = render(Path::new("proj"), &scripts, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["scripts"][0], "proj/Caf\u{FFFD}.Tests.ps1");
    }
}
