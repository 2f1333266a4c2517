//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Writing a config file into it
//! - Executing CLI commands with that context

use anyhow::Result;
use assert_cmd::Command;
use goplanify_runtime::Config;
use std::path::PathBuf;
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use goplanify_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["trips", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    /// Owns the directory tree; removed on drop
    _temp_dir: TempDir,
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
        let data_dir = temp_dir.path().join(".goplanify");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// Write `config` as the world's config file.
    pub fn with_config(self, config: &Config) -> Self {
        config
            .save_to(&self.config_path())
            .expect("Failed to write config");
        self
    }

    /// Point a command at this world's data directory, ignoring the caller's
    /// `RUST_LOG` and `GOPLANIFY_PATH`.
    fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("GOPLANIFY_PATH");
        cmd
    }

    /// Run the goplanify binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("goplanify")
            .map_err(|e| anyhow::anyhow!("Failed to find goplanify binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
