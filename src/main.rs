use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use jsondiff::{
    Charset, DiffAction, DiffRequest, FileReference, JsonDiffAction, JsonDiffConfig, LocalFile,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Compare JSON files while ignoring the order of object keys.
///
/// Exits with 0 when the documents are equivalent, 1 when they differ and 2
/// on any error.
#[derive(Parser)]
#[command(name = "jsondiff", version)]
struct Cli {
    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Charset for files without a byte order mark (utf-8, utf-16le, utf-16be, latin1)
    #[arg(long, value_name = "LABEL")]
    charset: Option<Charset>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// One or two JSON files. With one file the second path is read from
    /// stdin, relative to the first file's directory.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("jsondiff: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => JsonDiffConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => JsonDiffConfig::default(),
    };
    let charset = cli.charset.unwrap_or(config.canonical.charset);
    let action = JsonDiffAction::from_config(&config);

    let files: Vec<LocalFile> = cli
        .files
        .iter()
        .map(|path| LocalFile::new(path).with_charset(charset))
        .collect();

    if !action.is_applicable(&files[..]) {
        bail!(
            "expected one or two .{} files, got {}",
            action.selection_config().extension,
            files.len()
        );
    }
    debug!(label = action.label(&files[..]), "action_selected");

    let chooser = |known: &LocalFile| prompt_second_file(known, charset);
    let request = action.build_result(&files[..], &chooser);
    print_request(&request, cli.format)?;

    Ok(match &request {
        DiffRequest::Simple(simple) if simple.is_identical() => ExitCode::SUCCESS,
        DiffRequest::Simple(_) => ExitCode::from(1),
        DiffRequest::Error(_) => ExitCode::from(2),
    })
}

/// Stdin stand-in for a file chooser dialog. An empty line or EOF cancels.
fn prompt_second_file(known: &LocalFile, charset: Charset) -> Option<LocalFile> {
    eprint!("Compare {} with: ", known.path().display());
    io::stderr().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }

    let answer = line.trim();
    if answer.is_empty() {
        return None;
    }

    let picked = PathBuf::from(answer);
    let path = match known.path().parent() {
        Some(dir) if picked.is_relative() => dir.join(picked),
        _ => picked,
    };
    Some(LocalFile::new(path).with_charset(charset))
}

fn print_request(request: &DiffRequest, format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, request)?;
            writeln!(out)?;
        }
        OutputFormat::Text => match request {
            DiffRequest::Simple(simple) => {
                writeln!(out, "=== {} ===", simple.main_title)?;
                writeln!(out, "--- {}", simple.left_title)?;
                writeln!(out, "{}", simple.left_content)?;
                writeln!(out, "+++ {}", simple.right_title)?;
                writeln!(out, "{}", simple.right_content)?;
                let verdict = if simple.is_identical() {
                    "documents are equivalent"
                } else {
                    "documents differ"
                };
                writeln!(out, "{verdict}")?;
            }
            DiffRequest::Error(error) => writeln!(out, "error: {}", error.message)?,
        },
    }
    Ok(())
}
