//! Shared testing utilities for run-ecs CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ISOLATED_VARS: &[&str] =
    &["RUN_ECS_REGION", "RUN_ECS_ENDPOINT_URL", "RUN_ECS_LOG", "RUN_ECS_LOG_FORMAT"];

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

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `run-ecs` binary within the work directory.
    ///
    /// AWS credentials are dummies so a stray launch can never reach a real account.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("run-ecs").expect("Failed to locate run-ecs binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.root.path());
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("AWS_ACCESS_KEY_ID", "test")
            .env("AWS_SECRET_ACCESS_KEY", "test")
            .env("AWS_REGION", "eu-west-1")
            .env("AWS_EC2_METADATA_DISABLED", "true");
        cmd
    }

    /// Write a configuration file into the work directory.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// A complete configuration document with `replace` applied to it.
    pub fn config_json(replace: &[(&str, &str)]) -> String {
        let mut content = r#"{
  "clusterName": "my-eg",
  "taskName": "my-task",
  "imageName": "my-eg/primes",
  "bucketName": "primes-bucket",
  "outputFilename": "primes-output.txt",
  "cpuPercentage": 50,
  "memoryUsage": 128,
  "runEnvironment": { "takeN": 100, "takeEveryN": 10, "ignoreFirstN": 5 }
}"#
        .to_string();
        for (from, to) in replace {
            content = content.replace(from, to);
        }
        content
    }
}
