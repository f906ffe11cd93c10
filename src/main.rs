//! goo-getf CLI - Print download links for Google-hosted files referenced by HTML pages.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use goo_getf::inputs::{expand_patterns, read_path_list};
use goo_getf::logging::init_logging;
use goo_getf::{CategorySet, LinkScanner, PatternRegistry, ResolvedLink};

const ABOUT_TEXT: &str = "Google files parser. Use 'goo-getf -h' for help.";

/// One or more input files could not be read.
const EXIT_IO: u8 = 2;
/// Malformed command line, or no input files named.
const EXIT_USAGE: u8 = 3;
const EXIT_UNEXPECTED: u8 = 4;

/// Search HTML files for links to Google-hosted files and print direct links
/// suitable for downloading with external programs (like wget or curl).
///
/// Folder links cannot be downloaded directly; with --folders they are
/// printed unchanged for use in a browser.
#[derive(Parser)]
#[command(name = "goo-getf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// HTML files to scan (supports glob patterns like *.html, page_{1,2}.html).
    /// Paths are read from stdin, one per line, when none are given.
    files: Vec<String>,

    /// Also print Drive folder links.
    #[arg(short = 'f', long)]
    folders: bool,

    /// Print Drive folder links only.
    #[arg(long = "folders-only", visible_alias = "fo")]
    folders_only: bool,

    /// Print one JSON object per link instead of bare URLs.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn has_options(&self) -> bool {
        self.folders || self.folders_only || self.json || self.verbose > 0
    }
}

/// JSON output record.
#[derive(Serialize)]
struct LinkRecord<'a> {
    file: &'a Path,
    #[serde(flatten)]
    link: &'a ResolvedLink,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("Bad command-line arguments: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(Outcome::Done { failed: 0 }) => ExitCode::SUCCESS,
        Ok(Outcome::Done { failed }) => {
            warn!(failed, "some files could not be read");
            ExitCode::from(EXIT_IO)
        }
        Ok(Outcome::NoFiles) => {
            eprintln!("No files to parse specified.");
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Unexpected error: {:#}", e);
            ExitCode::from(EXIT_UNEXPECTED)
        }
    }
}

enum Outcome {
    /// Every input was visited; `failed` of them could not be read.
    Done { failed: usize },
    /// Options were given, or a path list was piped, but it named no file.
    NoFiles,
}

fn run(cli: &Cli) -> Result<Outcome> {
    let paths = match input_paths(cli)? {
        Some(paths) => paths,
        None => {
            println!("{}", ABOUT_TEXT);
            return Ok(Outcome::Done { failed: 0 });
        }
    };

    if paths.is_empty() {
        return Ok(Outcome::NoFiles);
    }

    let active = CategorySet::from_flags(cli.folders, cli.folders_only);
    let scanner = LinkScanner::new(&PatternRegistry::builtin(), &active);
    info!(
        files = paths.len(),
        rules = scanner.rules().len(),
        "scanning documents"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;

    for path in &paths {
        match scanner.scan_file(path) {
            Ok(links) => {
                for link in &links {
                    write_link(&mut out, path, link, cli.json)?;
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    out.flush().context("Failed to flush output")?;
    Ok(Outcome::Done { failed })
}

/// Paths from the command line or stdin.
///
/// `None` asks for the about text: no arguments at all on an interactive terminal.
fn input_paths(cli: &Cli) -> Result<Option<Vec<PathBuf>>> {
    if !cli.files.is_empty() {
        return Ok(Some(expand_patterns(&cli.files)));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(if cli.has_options() { Some(Vec::new()) } else { None });
    }

    let paths = read_path_list(stdin.lock()).context("Failed to read file list from stdin")?;
    Ok(Some(paths))
}

fn write_link(out: &mut impl Write, path: &Path, link: &ResolvedLink, json: bool) -> Result<()> {
    if json {
        let record = serde_json::to_string(&LinkRecord { file: path, link })
            .with_context(|| format!("Failed to serialize link: {}", link.url))?;
        writeln!(out, "{}", record).context("Failed to write output")?;
    } else {
        writeln!(out, "{}", link).context("Failed to write output")?;
    }
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}
