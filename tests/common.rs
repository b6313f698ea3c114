#![allow(dead_code)]
use std::{
    path::PathBuf,
    process::{Child, Stdio},
};

use assert_cmd::{cargo::cargo_bin, Command};
use tempfile::TempDir;

pub struct HeartbeatTestConfig {
    dir: TempDir,
    config_file: Option<PathBuf>,
}

impl Default for HeartbeatTestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartbeatTestConfig {
    pub fn new() -> Self {
        let dir = TempDir::with_prefix("heartbeat").unwrap();

        HeartbeatTestConfig {
            dir,
            config_file: None,
        }
    }

    /// Write a `heartbeat.toml` into the temp dir and pass it with `--config` on every run
    pub fn with_config(mut self, contents: &str) -> Self {
        let path = self.dir.path().join("heartbeat.toml");
        std::fs::write(&path, contents).unwrap();
        self.config_file = Some(path);
        self
    }

    fn args(&self, path: Option<&str>, args: &[&str]) -> Vec<String> {
        let mut all = Vec::new();
        if let Some(ref config) = self.config_file {
            all.push("--config".to_string());
            all.push(config.to_string_lossy().to_string());
        }
        all.extend(args.iter().map(|a| a.to_string()));
        all.extend(path.map(str::to_string));
        all
    }

    pub fn run(&self, path: Option<&str>, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("heartbeat").unwrap();
        cmd.current_dir(&self.dir).args(self.args(path, args));
        cmd
    }

    /// Start the binary in the background with piped output, for tests that signal it
    pub fn spawn(&self, path: Option<&str>, args: &[&str]) -> Child {
        std::process::Command::new(cargo_bin("heartbeat"))
            .current_dir(&self.dir)
            .args(self.args(path, args))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null())
            .spawn()
            .unwrap()
    }
}

pub fn greetings(stdout: &[u8]) -> Vec<String> {
    std::str::from_utf8(stdout)
        .unwrap()
        .lines()
        .filter(|l| l.starts_with("Hello, World! from "))
        .map(str::to_string)
        .collect()
}
