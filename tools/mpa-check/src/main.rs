use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mpa_checker::{Checker, Report, Rule};
use mpa_vocab::Vocabulary;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Checks CDLI CoNLL morphology files for format errors")]
struct Cli {
    /// Annotation files, or directories whose *.conll files are checked
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Print progress notes
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON vocabulary replacing the built-in CDLI tag set
    #[arg(long, value_name = "FILE")]
    vocab: Option<PathBuf>,

    /// Log filter directive, e.g. "mpa_checker=debug"
    #[arg(long, env = "MPA_LOG", value_name = "FILTER")]
    log: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let custom;
    let vocab = match &cli.vocab {
        Some(path) => {
            custom = Vocabulary::from_path(path)
                .with_context(|| format!("loading vocabulary {}", path.display()))?;
            &custom
        }
        None => Vocabulary::builtin(),
    };

    let checker = Checker::new(vocab);
    let files = expand_paths(&cli.paths)?;
    let stdout = io::stdout();
    let reports = run(&checker, &files, cli.format, cli.verbose, &mut stdout.lock())?;

    let failed = reports.iter().filter(|r| !r.is_correct()).count();
    info!(files = reports.len(), failed, "done");
    Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Checks each file in turn. Text output is written as soon as a file is
/// checked; JSON output is written once, including when a later file cannot
/// be read.
fn run<W: Write>(
    checker: &Checker<'_>,
    files: &[PathBuf],
    format: OutputFormat,
    verbose: bool,
    out: &mut W,
) -> Result<Vec<Report>> {
    let mut reports = Vec::new();
    let mut failure = None;

    for path in files {
        match checker.check_file(path) {
            Ok(report) => {
                if format == OutputFormat::Text {
                    write_text(&report, verbose, out)?;
                    out.flush()?;
                }
                reports.push(report);
            }
            Err(err) => {
                let context = format!("checking {}", path.display());
                failure = Some(anyhow::Error::new(err).context(context));
                break;
            }
        }
    }

    match format {
        OutputFormat::Text => {
            if verbose && failure.is_none() && reports.len() > 1 {
                let failed = reports.iter().filter(|r| !r.is_correct()).count();
                writeln!(out, "Info: Checked {} files, {failed} with errors.", reports.len())?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?,
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(reports),
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let directive = match (&cli.log, cli.verbose) {
        (Some(directive), _) => directive.as_str(),
        (None, true) => "info",
        (None, false) => "warn",
    };
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter {directive:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Replaces each directory with its `*.conll` files, sorted by name.
fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let dir = path
            .to_str()
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        let pattern = format!("{}/*.conll", glob::Pattern::escape(dir));
        let mut found = glob::glob(&pattern)
            .with_context(|| format!("bad directory pattern {pattern}"))?
            .collect::<Result<Vec<_>, _>>()?;
        found.sort();

        if found.is_empty() {
            warn!(dir = %path.display(), "no .conll files found");
        }
        files.extend(found);
    }
    Ok(files)
}

fn write_text<W: Write>(report: &Report, verbose: bool, out: &mut W) -> io::Result<()> {
    for message in report.messages(verbose) {
        writeln!(out, "{message}")?;
    }

    let violated = report.violated_rules();
    if verbose && !violated.is_empty() {
        let rules: Vec<String> = Rule::ALL
            .into_iter()
            .filter(|rule| violated.contains(rule.flag()))
            .map(|rule| format!("{} ({})", rule.name(), rule.summary()))
            .collect();
        writeln!(out, "Info: Violated rules: {}.", rules.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    const GOOD: &str = "#new_text=P1\n# ID FORM SEGM XPOSTAG HEAD DEPREL MISC\no.1.1\tlu\tlu[person]\tN\n";

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["mpa-check", "-v", "--format", "json", "a.conll", "b.conll"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.paths.len(), 2);

        assert!(Cli::try_parse_from(["mpa-check"]).is_err());
    }

    #[test]
    fn test_expand_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.conll"), GOOD).unwrap();
        fs::write(dir.path().join("a.conll"), GOOD).unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let single = dir.path().join("notes.txt");

        let files = expand_paths(&[dir.path().to_path_buf(), single.clone()]).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.conll"), dir.path().join("b.conll"), single]
        );
    }

    fn output(
        checker: &Checker<'_>,
        files: &[PathBuf],
        format: OutputFormat,
        verbose: bool,
    ) -> (Result<Vec<Report>>, String) {
        let mut buf = Vec::new();
        let result = run(checker, files, format, verbose, &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_text_output() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.conll");
        let bad = dir.path().join("bad.conll");
        fs::write(&good, GOOD).unwrap();
        fs::write(&bad, "#new_text=P1\n").unwrap();
        let checker = Checker::default();

        let (result, quiet) = output(&checker, &[good.clone()], OutputFormat::Text, false);
        assert!(result.unwrap()[0].is_correct());
        assert_eq!(quiet, format!("Info: The file {} has correct format.\n", good.display()));

        let (result, loud) = output(&checker, &[good.clone(), bad.clone()], OutputFormat::Text, true);
        assert_eq!(result.unwrap().len(), 2);
        let lines: Vec<&str> = loud.lines().collect();
        assert_eq!(lines[0], format!("Info: Checking file {}.", good.display()));
        assert_eq!(lines[2], format!("Info: Checking file {}.", bad.display()));
        assert!(lines[3].starts_with("Error: The first 2 lines"));
        assert_eq!(
            lines[4],
            "Info: Violated rules: missing_header_lines (file has both header lines)."
        );
        assert_eq!(lines[5], "Info: Checked 2 files, 1 with errors.");
    }

    #[test]
    fn test_earlier_output_survives_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.conll");
        fs::write(&good, GOOD).unwrap();
        let missing = dir.path().join("missing.conll");
        let checker = Checker::default();

        let (result, text) = output(&checker, &[good.clone(), missing.clone()], OutputFormat::Text, false);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing.conll"));
        assert_eq!(text, format!("Info: The file {} has correct format.\n", good.display()));

        let (result, json) = output(&checker, &[good, missing], OutputFormat::Json, false);
        assert!(result.is_err());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
        assert_eq!(parsed[0]["correct"], true);
    }

    #[test]
    fn test_json_output() {
        let report = Checker::default().check_str("bad.conll", "#new_text=P1\n");
        let json: serde_json::Value = serde_json::to_value(&[report]).unwrap();
        assert_eq!(json[0]["correct"], false);
        assert_eq!(json[0]["diagnostics"][0]["rule"], "missing_header_lines");
        assert_eq!(json[0]["diagnostics"][0]["severity"], "error");
    }
}
