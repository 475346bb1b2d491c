mod check_exit;
mod check_processing;
mod runner;

pub use check_exit::determine_exit_code;
pub use check_processing::{check_file, check_files};
pub use runner::{CheckOptions, run_check, run_check_with_options};

#[cfg(test)]
pub(crate) use runner::run_check_impl;

#[cfg(test)]
mod check_processing_tests;
