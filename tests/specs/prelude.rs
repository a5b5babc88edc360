//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Manifest with one `log` instrumentation and nothing else
pub const MINIMAL_MANIFEST: &str = r#"
[[instrumentation]]
name = "process_action.controller"
action = "log"
"#;

/// Temporary project directory holding manifests and log files
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parents
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Read a file relative to the project root
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn hk(&self) -> CliBuilder {
        CliBuilder {
            dir: self.dir.path().to_path_buf(),
            args: Vec::new(),
        }
    }
}

/// The `hk` binary in the target directory this test binary was built into.
///
/// `hk` belongs to another workspace package, so Cargo does not export
/// `CARGO_BIN_EXE_hk` here.
pub fn hk_bin() -> PathBuf {
    let mut dir = std::env::current_exe().unwrap();
    dir.pop();
    if dir.ends_with("deps") {
        dir.pop();
    }
    let bin = dir.join(format!("hk{}", std::env::consts::EXE_SUFFIX));
    assert!(
        bin.is_file(),
        "hk binary not found at {}; build it with `cargo build -p hk`",
        bin.display()
    );
    bin
}

pub struct CliBuilder {
    dir: std::path::PathBuf,
    args: Vec<String>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    fn run(self) -> RunAssert {
        let output = Command::new(hk_bin())
            .current_dir(&self.dir)
            .env("RUST_LOG", "info")
            .env_remove("NO_COLOR")
            .args(&self.args)
            .output()
            .unwrap();
        RunAssert {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            args: self.args,
        }
    }

    /// Run and assert exit code 0
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(
            run.success,
            "expected `hk {}` to pass\nstdout:\n{}\nstderr:\n{}",
            run.args.join(" "),
            run.stdout,
            run.stderr
        );
        run
    }

    /// Run and assert a non-zero exit code
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(
            !run.success,
            "expected `hk {}` to fail\nstdout:\n{}\nstderr:\n{}",
            run.args.join(" "),
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    stdout: String,
    stderr: String,
    success: bool,
    args: Vec<String>,
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stderr.contains(needle),
            "stderr unexpectedly has {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
