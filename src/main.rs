//! `plainly` command line host: reads a document, runs the pipeline, writes
//! the result.
use clap::{ArgAction, Parser, ValueEnum};
use plainly::{
    ConfigError, Humanizer,
    context::{DEFAULT_MAX_PIECE_LEN, DEFAULT_MAX_PIECES, DEFAULT_MAX_SENTENCE_LEN},
};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Normalize and rewrite sentence by sentence
    Humanize,
    /// Normalize only
    Clean,
}

#[derive(Debug, Parser)]
#[command(name = "plainly", version)]
#[command(about = "Offline, rule-based clean-up and plain-language rewriting of prose")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::Humanize)]
    mode: Mode,

    /// In clean mode, also replace verbose phrases from the built-in lexicon
    #[arg(long)]
    lexicon: bool,

    /// Sentences longer than this many characters are split
    #[arg(long, default_value_t = DEFAULT_MAX_SENTENCE_LEN)]
    max_sentence_len: usize,

    /// Longest piece a punctuation split may produce
    #[arg(long, default_value_t = DEFAULT_MAX_PIECE_LEN)]
    max_piece_len: usize,

    /// Most pieces a punctuation split may produce
    #[arg(long, default_value_t = DEFAULT_MAX_PIECES)]
    max_pieces: usize,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input document; stdin when omitted
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("plainly: {e}");
            ExitCode::FAILURE
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("tracing subscriber already set; skipping re-initialization");
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let humanizer = Humanizer::builder()
        .max_sentence_len(cli.max_sentence_len)
        .max_piece_len(cli.max_piece_len)
        .max_pieces(cli.max_pieces)
        .substitute_on_clean(cli.lexicon)
        .build()?;

    let input = read_input(cli.file.as_deref())?;
    info!(bytes = input.len(), mode = ?cli.mode, "processing input");

    let output = match cli.mode {
        Mode::Humanize => humanizer.humanize(&input),
        Mode::Clean => humanizer.clean_only(&input).into_owned(),
    };
    info!(bytes = output.len(), "writing output");

    write_output(cli.output.as_deref(), &output)
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_owned(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn write_output(file: Option<&Path>, text: &str) -> Result<(), CliError> {
    match file {
        Some(path) => fs::write(path, format!("{text}\n")).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Io {
                    path: "<stdout>".to_owned(),
                    source,
                })
        }
    }
}
