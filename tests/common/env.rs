//! Test environment for isolated QuickBite runs.
//!
//! Every `TestEnv` owns a temp directory used as working directory, data
//! directory and config home, so no user config or `QUICKBITE_*` variable
//! leaks into a test.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

use super::fixtures::{COLLECTION_REPORT, MENU_ITEMS, ORDER_DETAILS};

/// Result of running the QuickBite binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Empty data directory
    pub fn empty() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Data directory holding the standard fixtures
    pub fn with_fixtures() -> Self {
        let env = Self::empty();
        env.write("menu_items.csv", MENU_ITEMS);
        env.write("order_details.csv", ORDER_DETAILS);
        env.write("collection_report.csv", COLLECTION_REPORT);
        env
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, content).expect("write fixture");
    }

    /// Run the binary in this environment, feeding `stdin`
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, &[], stdin)
    }

    /// Like [`TestEnv::run`], with extra environment variables set
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)], stdin: &str) -> TestResult {
        let mut command = Command::new(env!("CARGO_BIN_EXE_quickbite"));
        command
            .args(args)
            .current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.join(".config"))
            .env("HOME", self.path())
            .env_remove("QUICKBITE_DATA_DIR")
            .env_remove("QUICKBITE_LOG")
            .env_remove("RUST_LOG");
        for (name, value) in vars {
            command.env(name, value);
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn quickbite");

        child
            .stdin
            .take()
            .expect("stdin handle")
            .write_all(stdin.as_bytes())
            .expect("write stdin");

        let output = child.wait_with_output().expect("wait for quickbite");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
