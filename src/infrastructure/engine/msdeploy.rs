//! MSDeploy CLI Engine
//!
//! Default `SyncEngine` backed by the Web Deploy command-line client. The
//! engine shells out once per operation: `-verb:getParameters` to read the
//! parameters a package declares, `-verb:sync` for the transfer itself.
//! Stdout is streamed line by line into the registered trace callback while
//! the transfer runs.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use roxmltree::Document;

use crate::domain::entities::ChangeSummary;
use crate::domain::ports::{
    DestinationOptions, ProviderKind, SourceOptions, SourceSession, SyncEngine, SyncError,
    SyncOptions, SyncParameter, TraceLevel,
};

/// Sync engine driving the `msdeploy` executable
pub struct MsDeployEngine {
    program: PathBuf,
}

impl MsDeployEngine {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("msdeploy"),
        }
    }

    /// Use a specific executable instead of whatever is on PATH
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if the client is installed and runnable
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-help")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Enumerate the parameters a package declares
    ///
    /// Content paths declare no parameters, so only package sources are
    /// asked.
    fn declared_parameters(&self, source_path: &Path) -> Result<Vec<SyncParameter>, SyncError> {
        let output = Command::new(&self.program)
            .arg("-verb:getParameters")
            .arg(format!("-source:package='{}'", source_path.display()))
            .arg("-xml")
            .output()
            .map_err(|e| SyncError::NotAvailable(e.to_string()))?;

        if !output.status.success() {
            return Err(SyncError::SessionFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        parse_parameter_manifest(&text)
    }
}

impl Default for MsDeployEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncEngine for MsDeployEngine {
    fn open_session(
        &self,
        provider: ProviderKind,
        source_path: &Path,
        _options: &SourceOptions,
    ) -> Result<Box<dyn SourceSession>, SyncError> {
        let parameters = match provider {
            ProviderKind::Package => self.declared_parameters(source_path)?,
            ProviderKind::ContentPath | ProviderKind::Auto => Vec::new(),
        };

        Ok(Box::new(MsDeploySession {
            program: self.program.clone(),
            provider,
            source_path: source_path.to_path_buf(),
            parameters,
            overrides: Vec::new(),
        }))
    }
}

/// One open source session against the CLI client
///
/// The CLI holds no remote state between invocations, so releasing the
/// session is just dropping it.
struct MsDeploySession {
    program: PathBuf,
    provider: ProviderKind,
    source_path: PathBuf,
    parameters: Vec<SyncParameter>,
    overrides: Vec<(String, String)>,
}

impl SourceSession for MsDeploySession {
    fn parameters(&self) -> &[SyncParameter] {
        &self.parameters
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), SyncError> {
        if !self.parameters.iter().any(|p| p.name == name) {
            return Err(SyncError::SessionFailed(format!(
                "parameter not declared by source: {}",
                name
            )));
        }
        self.overrides.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn sync_to(
        &mut self,
        destination_provider: ProviderKind,
        destination_path: &str,
        destination: &DestinationOptions,
        options: &SyncOptions,
    ) -> Result<ChangeSummary, SyncError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-verb:sync")
            .arg(format!(
                "-source:{}='{}'",
                self.provider.as_str(),
                self.source_path.display()
            ))
            .arg(dest_setting(destination_provider, destination_path, destination));

        if options.do_not_delete {
            cmd.arg("-enableRule:DoNotDeleteRule");
        }
        if destination.trace_level == TraceLevel::Verbose {
            cmd.arg("-verbose");
        }
        for (name, value) in &self.overrides {
            cmd.arg(format!("-setParam:name='{}',value='{}'", name, value));
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| SyncError::NotAvailable(e.to_string()))?;

        // Drain stderr on its own thread so a chatty client cannot deadlock
        // the stdout loop.
        let stderr = child.stderr.take();
        let stderr_handle = std::thread::spawn(move || {
            let mut collected = String::new();
            if let Some(stderr) = stderr {
                for line in BufReader::new(stderr).lines().map_while(Result::ok) {
                    collected.push_str(&line);
                    collected.push('\n');
                }
            }
            collected
        });

        let mut lines = Vec::new();
        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if let Some(trace) = &destination.trace {
                    trace(&line);
                }
                lines.push(line);
            }
        }

        let status = child.wait().map_err(|e| SyncError::SyncFailed(e.to_string()))?;
        let stderr_text = stderr_handle.join().unwrap_or_default();

        if !status.success() {
            let message = if stderr_text.trim().is_empty() {
                format!("client exited with {:?}", status.code())
            } else {
                stderr_text.trim().to_string()
            };
            return Err(SyncError::SyncFailed(message));
        }

        Ok(summarize_output(&lines))
    }
}

fn dest_setting(
    provider: ProviderKind,
    destination_path: &str,
    destination: &DestinationOptions,
) -> String {
    let mut setting = format!(
        "-dest:{}='{}',computerName='{}',userName='{}',password='{}',authType='Basic'",
        provider.as_str(),
        destination_path,
        destination.computer_name,
        destination.user_name,
        destination.password,
    );
    if destination.include_acls {
        setting.push_str(",includeAcls='True'");
    }
    setting
}

/// Parse the `getParameters` manifest output
fn parse_parameter_manifest(text: &str) -> Result<Vec<SyncParameter>, SyncError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document = Document::parse(text)
        .map_err(|e| SyncError::SessionFailed(format!("bad parameter manifest: {}", e)))?;

    Ok(document
        .descendants()
        .filter(|n| n.has_tag_name("parameter"))
        .filter_map(|n| {
            n.attribute("name").map(|name| SyncParameter {
                name: name.to_string(),
                default_value: n.attribute("defaultValue").map(str::to_string),
            })
        })
        .collect())
}

/// Build a change summary from the client's output lines
///
/// The client closes a successful sync with a line of the form
/// `Total changes: 10 (5 added, 3 updated, 2 deleted, 0 parameters changed,
/// 1234 bytes copied)`. Per-item failures are reported as `Error:` lines and
/// do not fail the process.
fn summarize_output(lines: &[String]) -> ChangeSummary {
    let mut summary = lines
        .iter()
        .rev()
        .find_map(|line| parse_summary_line(line))
        .unwrap_or_default();

    summary.errors = lines
        .iter()
        .filter(|line| line.trim_start().starts_with("Error"))
        .count() as u64;

    summary
}

fn parse_summary_line(line: &str) -> Option<ChangeSummary> {
    let rest = line.trim().strip_prefix("Total changes:")?;
    let (total, detail) = match rest.split_once('(') {
        Some((total, detail)) => (total, detail.trim_end_matches(')')),
        None => (rest, ""),
    };

    let mut summary = ChangeSummary {
        total_changes: total.trim().parse().ok()?,
        ..Default::default()
    };

    for segment in detail.split(',') {
        let mut parts = segment.split_whitespace();
        let (Some(count), Some(label)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(count) = count.parse::<u64>() else {
            continue;
        };
        match label {
            "added" => summary.added = count,
            "updated" => summary.updated = count,
            "deleted" => summary.deleted = count,
            _ => {}
        }
    }

    Some(summary)
}
