pub mod check;
pub(crate) mod context;
pub mod init;
pub mod rules;

pub use check::{CheckOptions, run_check, run_check_with_options};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules, run_rules};
