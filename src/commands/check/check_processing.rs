use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{Checker, FileResult};

/// Read and evaluate one file. Read failures become an unreadable result
/// instead of an error so the rest of the run continues.
pub fn check_file<C: Checker>(path: &Path, checker: &C) -> FileResult {
    match fs::read_to_string(path) {
        Ok(content) => checker.check(path, &content),
        Err(e) => FileResult::unreadable(path.to_path_buf(), e.to_string()),
    }
}

/// Evaluate files in parallel; results keep the order of `files`.
pub fn check_files<C: Checker + Sync>(files: &[PathBuf], checker: &C) -> Vec<FileResult> {
    files
        .par_iter()
        .map(|path| check_file(path, checker))
        .collect()
}
