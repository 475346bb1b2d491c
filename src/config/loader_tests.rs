use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MemorySource {
    files: HashMap<PathBuf, String>,
    working_dir: PathBuf,
    denied: Option<PathBuf>,
}

impl MemorySource {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            working_dir: PathBuf::from("/project"),
            denied: None,
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn denying(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied = Some(path.into());
        self
    }
}

impl ConfigSource for MemorySource {
    fn read(&self, path: &Path) -> std::io::Result<Option<String>> {
        if self.denied.as_deref() == Some(path) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        Ok(self.files.get(path).cloned())
    }

    fn working_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.working_dir.clone())
    }
}

#[test]
fn load_without_config_file_returns_defaults() {
    let loader = FileConfigLoader::with_source(MemorySource::new());
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn load_reads_local_config() {
    let fs = MemorySource::new().with_file(
        "/project/.stng-guard.toml",
        "[scanner]\nroot = \"app\"\ngitignore = true\n",
    );
    let config = FileConfigLoader::with_source(fs).load().unwrap();

    assert_eq!(config.scanner.root, "app");
    assert!(config.scanner.gitignore);
}

#[test]
fn load_reports_syntax_errors() {
    let fs = MemorySource::new().with_file("/project/.stng-guard.toml", "[scanner\n");
    let err = FileConfigLoader::with_source(fs).load().unwrap_err();
    assert!(matches!(err, StngGuardError::TomlParse(_)));
}

#[test]
fn load_validates_semantics() {
    let fs = MemorySource::new().with_file(
        "/project/.stng-guard.toml",
        "[scanner]\nextensions = []\n",
    );
    let err = FileConfigLoader::with_source(fs).load().unwrap_err();
    assert!(matches!(err, StngGuardError::Config(_)));
}

#[test]
fn load_from_explicit_path() {
    let fs = MemorySource::new().with_file(
        "/etc/stng.toml",
        "[check]\nfail_on_unreadable = true\n",
    );
    let config = FileConfigLoader::with_source(fs)
        .load_from_path(Path::new("/etc/stng.toml"))
        .unwrap();
    assert!(config.check.fail_on_unreadable);
}

#[test]
fn load_from_missing_explicit_path_is_error() {
    let loader = FileConfigLoader::with_source(MemorySource::new());
    let err = loader
        .load_from_path(Path::new("/nowhere/.stng-guard.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn load_reports_unreadable_local_config() {
    let source = MemorySource::new().denying("/project/.stng-guard.toml");
    let err = FileConfigLoader::with_source(source).load().unwrap_err();
    assert!(matches!(err, StngGuardError::FileRead { .. }));
}

#[test]
fn disk_source_treats_missing_file_as_absent() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join(LOCAL_CONFIG_NAME);
    assert!(DiskSource.read(&missing).unwrap().is_none());

    std::fs::write(&missing, "[check]\n").unwrap();
    assert_eq!(DiskSource.read(&missing).unwrap().as_deref(), Some("[check]\n"));
}
