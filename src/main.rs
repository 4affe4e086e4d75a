use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use jlogfmt::cli::{Cli, ColorMode};
use jlogfmt::config::Config;
use jlogfmt::error::JlogfmtError;
use jlogfmt::pipeline::{self, Summary};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when jlogfmt exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "jlogfmt", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("jlogfmt: {e}");
            return ExitCode::from(1);
        }
    };

    let use_color = resolve_color_mode(config.color_mode);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let result = if cli.files.is_empty() {
        let stdin = io::stdin();
        pipeline::run(stdin.lock(), &mut writer, &config, use_color)
    } else {
        run_files(&cli.files, &mut writer, &config, use_color)
    };

    let summary = match result {
        Ok(summary) => summary,
        Err(e) if e.is_broken_pipe() => return ExitCode::SUCCESS,
        Err(e @ JlogfmtError::Config(_)) => {
            eprintln!("jlogfmt: {e}");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("jlogfmt: {e}");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = writer.flush() {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("jlogfmt: flush error: {e}");
        return ExitCode::from(2);
    }

    if cli.summary {
        eprintln!(
            "jlogfmt: {} lines processed, {} malformed",
            summary.lines, summary.malformed
        );
    }

    ExitCode::SUCCESS
}

/// Process each file in order, accumulating one summary across all of them.
fn run_files<W: Write>(
    files: &[std::path::PathBuf],
    writer: &mut W,
    config: &Config,
    use_color: bool,
) -> Result<Summary, JlogfmtError> {
    let mut total = Summary::default();
    for path in files {
        let file = File::open(path).map_err(|e| {
            JlogfmtError::Config(format!("cannot open {}: {e}", path.display()))
        })?;
        let summary = pipeline::run(BufReader::new(file), writer, config, use_color)?;
        total.merge(summary);
    }
    Ok(total)
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            let stdout = io::stdout();
            if !stdout.is_terminal() {
                return false;
            }
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            true
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `jlogfmt`, this causes the *upstream* writer
/// (e.g. a Python process) to receive a `BrokenPipeError` when `jlogfmt`
/// exits. Restoring `SIG_DFL` lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
