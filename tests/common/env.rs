//! Test environment for running the sitepush binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a sitepush CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp working directory
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sitepush")),
        }
    }

    /// Get a path relative to the environment root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file under the environment root, creating parents
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Create a directory under the environment root
    pub fn make_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    /// Run sitepush with the given arguments, from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .args(args)
            .output()
            .expect("Failed to execute sitepush");

        Self::output_to_result(output)
    }

    /// Run sitepush with path arguments
    pub fn run_paths(&self, paths: &[&Path], flags: &[&str]) -> TestResult {
        let mut args: Vec<String> = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        args.extend(flags.iter().map(|f| f.to_string()));

        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .args(&args)
            .output()
            .expect("Failed to execute sitepush");

        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
