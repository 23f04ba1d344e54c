//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Publishing backend exports (sessions, activity) into it
//! - Executing CLI commands against it

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use agdeck_types::{ActivitySample, SessionRecord};

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use agdeck_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_sessions(&fixtures::sample_sessions());
///
/// let result = world.run(&["sessions", "--sort", "cost"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".agdeck");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `sessions.json` into the data directory.
    pub fn with_sessions(self, sessions: &[SessionRecord]) -> Self {
        let json = serde_json::to_string_pretty(sessions).expect("Failed to encode sessions");
        self.write_file("sessions.json", &json)
    }

    /// Write `activity.json` into the data directory.
    pub fn with_activity(self, samples: &[ActivitySample]) -> Self {
        let json = serde_json::to_string_pretty(samples).expect("Failed to encode activity");
        self.write_file("activity.json", &json)
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        self.write_file("config.toml", toml)
    }

    /// Write an arbitrary file relative to the data directory.
    pub fn write_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.data_dir.join(name), content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", name, e));
        self
    }

    /// Point a command at this world's data directory, isolated from the host.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .env_remove("AGDECK_PATH")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .current_dir(self.temp_dir.path())
    }

    /// Run the agdeck binary with `args`.
    ///
    /// Requires the binary to be built by cargo for the calling test.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("agdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find agdeck binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full_args = vec!["--format", "json"];
        full_args.extend_from_slice(args);

        let result = self.run(&full_args)?;
        if !result.success() {
            anyhow::bail!("agdeck {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI invocation.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON:\n{}", self.stdout))
    }
}
