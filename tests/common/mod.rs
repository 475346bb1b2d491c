#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the stng-guard binary.
#[macro_export]
macro_rules! stng_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("stng-guard"))
    };
}

pub const COMPLIANT_COMPONENT: &str = r#"import { Button, Card } from 'stng-react';

export function Panel() {
  return (
    <Card>
      <Button variant="primary">Save</Button>
    </Card>
  );
}
"#;

pub const RAW_BUTTON_COMPONENT: &str = r#"export function Legacy() {
  return <button onClick={save}>Save</button>;
}
"#;

pub const UNIMPORTED_COMPONENT: &str = r#"export function Form() {
  return <Input name="email" />;
}
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.stng-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".stng-guard.toml", content);
    }

    /// Creates `src/<name>` with the given component source.
    pub fn create_component(&self, name: &str, content: &str) {
        self.create_file(&format!("src/{name}"), content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
