use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use menagerie::announce::announce_stdout;
use menagerie::{zoo, Mode};

/// Fill a small zoo with cats and dogs and let them speak.
#[derive(Parser, Debug)]
#[command(name = "menagerie")]
#[command(about = "Animals announcing themselves in order or all at once", long_about = None)]
struct Cli {
    /// Let every animal speak at once
    #[arg(short = 'a', long = "async")]
    concurrent: bool,

    /// Number of animals in the zoo
    #[arg(short = 'n', long, default_value_t = zoo::DEFAULT_COUNT)]
    count: u32,

    /// Seed for cat/dog assignment (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn print_error_chain(err: &anyhow::Error) {
    eprintln!("Error: {err}");

    let mut n = 0;
    let mut cur = err.source();
    while let Some(cause) = cur {
        eprintln!("  {n}: {cause}");
        n += 1;
        cur = cause.source();
    }
}

fn main() {
    let cli = Cli::parse();

    // Tracing goes to stderr; stdout carries only the announcements.
    let filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(err) = real_main(cli) {
        print_error_chain(&err);
        std::process::exit(1);
    }
}

fn real_main(cli: Cli) -> Result<()> {
    let (mut rng, seed) = zoo::seeded_rng(cli.seed);
    let animals = zoo::populate(cli.count, &mut rng);

    let mode = if cli.concurrent {
        Mode::Concurrent
    } else {
        Mode::Sequential
    };
    debug!(seed, count = animals.len(), ?mode, "zoo populated");

    match announce_stdout(&animals, mode) {
        Ok(written) => debug!(written, "announcements complete"),
        // A closed stdout (e.g. piped into `head`) ends the output, not the run.
        Err(err) if err.is_broken_pipe() => debug!(error = %err, "stdout closed early"),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to announce {} animal(s)", animals.len()))
        }
    }
    Ok(())
}
