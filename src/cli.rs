// src/cli.rs
use std::path::PathBuf;

use crate::config::consts::TOP_REGIONS;
use crate::config::options::{AppOptions, ExportFormat, PageSource};
use crate::error::CliError;
use crate::progress::ConsoleProgress;
use crate::runner::RunSummary;

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug)]
pub enum Command {
    Run(Box<AppOptions>),
    Help,
}

/// Entry point for the `cli` binary.
pub fn run() -> Result<(), CliError> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Run(opts) => {
            let mut progress = ConsoleProgress::default();
            let summary = crate::runner::run(&opts, Some(&mut progress))?;
            print_summary(&summary);
            Ok(())
        }
    }
}

/// Parse arguments (program name excluded). No arguments → defaults.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--input" => {
                let v = value(&mut args, "--input")?;
                opts.fetch.source = PageSource::File(PathBuf::from(v));
            }
            "-o" | "--out" => {
                let v = value(&mut args, "--out")?;
                opts.export.set_path(&v);
            }
            "--format" => {
                let v = value(&mut args, "--format")?;
                opts.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| CliError::Usage(format!("Unknown format: {v}")))?;
            }
            "--no-headers" => opts.export.include_headers = false,
            "--no-open" => opts.export.open_browser = false,
            "--all-markers" => opts.map.france_only = false,
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(CliError::Usage(format!("Unknown arg: {other}"))),
        }
    }

    Ok(Command::Run(Box::new(opts)))
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, CliError> {
    args.next()
        .filter(|v| !v.starts_with("--"))
        .ok_or_else(|| CliError::Usage(format!("Missing value for {flag}")))
}

fn print_summary(summary: &RunSummary) {
    print!("{}", crate::stats::render_report(&summary.dataset, TOP_REGIONS));

    let art = &summary.artifact;
    println!("Wrote {}", art.path.display());
    if let Some(m) = art.markers {
        println!("Map markers: {} placed, {} outside French territories", m.placed, m.skipped);
    }
    if let Some(url) = &summary.opened {
        println!("Opened {url}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    fn opts(v: &[&str]) -> AppOptions {
        match parse_args(args(v)).unwrap() {
            Command::Run(o) => *o,
            Command::Help => panic!("expected run"),
        }
    }

    #[test]
    fn no_args_is_the_default_run() {
        assert_eq!(opts(&[]), AppOptions::default());
    }

    #[test]
    fn flags_override_defaults() {
        let o = opts(&["--input", "page.html", "--format", "csv", "-o", "out/", "--no-headers", "--no-open", "--all-markers"]);
        assert_eq!(o.fetch.source, PageSource::File(PathBuf::from("page.html")));
        assert_eq!(o.export.format, ExportFormat::Csv);
        assert!(o.export.out_path().ends_with("sites_unesco_france.csv"));
        assert!(!o.export.include_headers);
        assert!(!o.export.open_browser);
        assert!(!o.map.france_only);
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(parse_args(args(&["--format", "pdf"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(args(&["--out"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(args(&["--input", "--no-open"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(args(&["--bogus"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(args(&["-h"])), Ok(Command::Help)));
    }
}
