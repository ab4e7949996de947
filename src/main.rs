use clap::{Parser, Subcommand};
use exercises::Exercise;
use input::{Console, ConsoleConfig};
use std::io;
use std::process;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "ejercicios", version, about = "Ejercicios de consola: paridad, extremos, vocales y polinomios")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Rejected lines allowed before a numeric read gives up
    #[arg(long, global = true, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: u32,

    /// Disable colors in error reports
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Read one integer and tell whether it is even or odd
    #[command(alias = "paridad")]
    Parity,
    /// Read ten integers and print the largest and smallest
    #[command(alias = "extremos")]
    Extremes,
    /// Read a phrase and count its vowels (default)
    #[command(alias = "vocales")]
    Vowels,
    /// Read a polynomial (not evaluated yet)
    #[command(alias = "polinomio")]
    Polynomial,
}

impl From<Commands> for Exercise {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Parity => Exercise::Parity,
            Commands::Extremes => Exercise::Extremes,
            Commands::Vowels => Exercise::Vowels,
            Commands::Polynomial => Exercise::Polynomial,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // stdout carries the dialogue, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level)
        .init();

    let exercise = cli.command.map(Exercise::from).unwrap_or_default();
    let config = ConsoleConfig {
        max_attempts: cli.max_attempts,
        color: !cli.no_color,
        ..ConsoleConfig::default()
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), io::stderr(), config);

    if let Err(err) = exercise.run(&mut console) {
        error!(%exercise, "{}", err);
        // Invalid lines were already reported while retrying
        if console.report(&err).is_err() {
            eprintln!("error: {}", err);
        }
        process::exit(err.exit_code());
    }

    info!(%exercise, "done");
}
