//! `duratypes` — parse and format duration expressions from the command line.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Parser)]
#[command(
    name = "duratypes",
    version,
    about = "Convert duration expressions (\"1h30m\", \"PT1H30M\") to seconds and back"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as a JSON array instead of one value per line.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse duration expressions into seconds.
    ///
    /// Inputs may start with `-`, so options must come before them
    /// (`duratypes parse -v -- -1h`).
    Parse {
        /// Treat each input as a JSON literal (`30`, `30.5`, `"1h"`, `null`).
        #[arg(long)]
        json_input: bool,

        /// Expressions such as `1h30m`, `PT90M`, `-2 hours`.
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
    /// Format integer seconds as a compact duration string.
    Format {
        /// Whole numbers of seconds, optionally negative.
        #[arg(required = true, allow_negative_numbers = true)]
        seconds: Vec<String>,
    },
    /// Parse expressions and print them in canonical compact form.
    ///
    /// Inputs may start with `-`, so options must come before them.
    Normalize {
        /// Expressions such as `1h30m`, `PT90M`, `-2 hours`.
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
}

fn init_tracing(verbose: u8) {
    let max_level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(move |metadata| *metadata.level() <= max_level));

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let records = match &cli.command {
        Command::Parse { json_input, inputs } => commands::parse(inputs, *json_input)?,
        Command::Format { seconds } => commands::format(seconds)?,
        Command::Normalize { inputs } => commands::parse(inputs, false)?,
    };

    let output = match (&cli.command, cli.json) {
        (_, true) => commands::render_json(&records)?,
        (Command::Parse { .. }, false) => commands::render_seconds(&records),
        (_, false) => commands::render_formatted(&records),
    };
    println!("{output}");
    Ok(())
}
