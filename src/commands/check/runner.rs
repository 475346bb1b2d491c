use std::path::{Path, PathBuf};

use crate::checker::{ComplianceSummary, FileResult, RuleEvaluator};
use crate::cli::{CheckArgs, Cli};
use crate::commands::context::{load_config, write_output};
use crate::config::{Config, validate_config};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, Report, TextFormatter,
};
use crate::scanner::{DirectoryScanner, FileScanner, MarkupFilter, ScanResult, SkippedEntry};
use crate::{EXIT_CONFIG_ERROR, EXIT_VIOLATIONS, StngGuardError};

use super::check_exit::determine_exit_code;
use super::check_processing::check_files;

/// Effective settings for one check run, after merging config and CLI.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub gitignore: bool,
    pub fail_on_unreadable: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
    pub color: ColorMode,
    pub quiet: bool,
    pub verbose: u8,
}

impl CheckOptions {
    /// Build options from a validated config; paths and output come from the CLI.
    #[must_use]
    pub fn from_config(config: Config, args: &CheckArgs, cli: &Cli) -> Self {
        let scanner = config.scanner;
        Self {
            root: args
                .root
                .clone()
                .unwrap_or_else(|| PathBuf::from(scanner.root)),
            extensions: scanner.extensions,
            exclude: scanner.exclude,
            gitignore: scanner.gitignore,
            fail_on_unreadable: config.check.fail_on_unreadable,
            format: args.format,
            output: args.output.clone(),
            project_root: std::env::current_dir().ok(),
            color: cli.color.into(),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// CLI flags take precedence over config values; excludes accumulate.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    config.scanner.gitignore |= args.gitignore;
    config.check.fail_on_unreadable |= args.fail_on_unreadable;
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(
                e.error_type(),
                &e.to_string(),
                None,
                e.suggestion(),
            );
            match e {
                StngGuardError::RootNotFound { .. } => EXIT_VIOLATIONS,
                _ => EXIT_CONFIG_ERROR,
            }
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    let options = CheckOptions::from_config(config, args, cli);
    run_check_with_options(&options)
}

/// Scan, evaluate, report, and return the process exit code.
///
/// # Errors
/// Returns `RootNotFound` before any file is processed when the root is not a
/// directory, or an error when patterns are invalid or output cannot be written.
pub fn run_check_with_options(options: &CheckOptions) -> crate::Result<i32> {
    let filter = MarkupFilter::new(options.extensions.clone(), &options.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, options.gitignore);
    let ScanResult { files, skipped } = scanner.scan(&options.root)?;

    let diagnostics = ErrorOutput::new(options.color);
    if options.verbose > 0 {
        report_skipped(&diagnostics, &skipped);
        eprintln!(
            "scanned {} files under {}",
            files.len(),
            options.root.display()
        );
    }

    let results = check_files(&files, &RuleEvaluator::new());
    if options.verbose > 1 {
        log_results(&results);
    }

    let summary = ComplianceSummary::from_results(&results);
    let report = Report {
        root: &options.root,
        project_root: options.project_root.as_deref(),
        results: &results,
        summary: &summary,
        fail_on_unreadable: options.fail_on_unreadable,
    };

    let rendered = format_output(options, &report)?;
    write_output(options.output.as_deref(), &rendered, options.quiet)?;

    Ok(determine_exit_code(&report))
}

fn format_output(options: &CheckOptions, report: &Report<'_>) -> crate::Result<String> {
    match options.format {
        OutputFormat::Text => {
            // Colors only make sense on a terminal, never in a report file.
            let color = if options.output.is_some() {
                ColorMode::Never
            } else {
                options.color
            };
            TextFormatter::with_verbose(color, options.verbose).format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn report_skipped(diagnostics: &ErrorOutput, skipped: &[SkippedEntry]) {
    for entry in skipped {
        let message = entry.path.as_deref().map_or_else(
            || "Skipped an entry during directory walk".to_string(),
            |p: &Path| format!("Skipped {}", p.display()),
        );
        diagnostics.print_warning(&message, Some(&entry.reason), None);
    }
}

fn log_results(results: &[FileResult]) {
    for result in results {
        eprintln!(
            "checked {} ({} findings)",
            result.path().display(),
            result.findings().len()
        );
    }
}
