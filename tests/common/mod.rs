//! Shared testing utilities for coachbot CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `coachbot` binary.
    ///
    /// The credential and settings-file variables are cleared so tests never
    /// reach the real API.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("coachbot").expect("Failed to locate coachbot binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("GEMINI_API_KEY")
            .env_remove("COACHBOT_CONFIG");
        cmd
    }

    /// Write `coachbot.toml` into the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("coachbot.toml");
        fs::write(&path, content).expect("Failed to write coachbot.toml");
        path
    }
}
