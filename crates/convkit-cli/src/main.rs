//! The convkit command-line front end

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use convkit_cli::args::{Args, Command};
use convkit_cli::input::resolve_input;
use convkit_cli::render::{exit_code, render_list, render_output};
use convkit_cli::{EXIT_ERROR, EXIT_OK};
use convkit_engine::identifiers::uuid::generate_uuid;
use convkit_engine::{Category, Operation, RandomSource, Registry};
use tracing::{debug, error, info};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Engine(#[from] convkit_engine::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();

    enable_logging(&args);
    debug!("command line: {:?}", args);

    let status = match &args.command {
        Command::List {
            category,
            search,
            json,
        } => list(*category, search.as_deref(), *json),
        Command::Run {
            converter,
            operation,
            input,
            json,
        } => run(converter, *operation, input.as_deref(), *json),
        Command::Uuid { count, seed } => uuid(*count, *seed),
    };

    match status {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn list(category: Option<Category>, search: Option<&str>, json: bool) -> Result<u8, CliError> {
    let registry = Registry::global();
    let found = registry.filter(search.unwrap_or_default(), category);
    info!("{} of {} converters match", found.len(), registry.len());

    let text = render_list(&found, &registry.category_counts(), json)?;
    print_line(&text)?;
    Ok(EXIT_OK)
}

fn run(converter: &str, operation: Operation, input: Option<&str>, json: bool) -> Result<u8, CliError> {
    let input = resolve_input(input, std::io::stdin().lock())?;
    let result = Registry::global().invoke(converter, operation, &input);
    let code = exit_code(&result);

    let output = result?;
    let text = render_output(&output, json)?;
    print_line(&text)?;

    Ok(code)
}

fn uuid(count: usize, seed: Option<u64>) -> Result<u8, CliError> {
    let mut source = match seed {
        Some(seed) => RandomSource::new_seeded(seed),
        None => RandomSource::System,
    };

    let mut stdout = std::io::stdout().lock();
    for _ in 0..count {
        writeln!(stdout, "{}", generate_uuid(&mut source))?;
    }
    Ok(EXIT_OK)
}

/// Writes `text` to stdout, adding a final newline unless it already ends with one.
fn print_line(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

fn enable_logging(args: &Args) {
    let mut builder = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr);

    if args.quiet {
        builder = builder.with_max_level(tracing::Level::ERROR);
    } else {
        match args.verbose {
            3.. => builder = builder.with_max_level(tracing::Level::TRACE),
            2 => builder = builder.with_max_level(tracing::Level::DEBUG),
            1 => builder = builder.with_max_level(tracing::Level::INFO),
            _ => builder = builder.with_max_level(tracing::Level::WARN),
        }
    }

    builder.init();
}
