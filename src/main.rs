use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use histlog::LogContext;
use histlog::areas::session::Session;
use histlog::artifacts::core::clock;
use histlog::artifacts::core::id_generator::IdGenerator;
use histlog::commands::replay::DEMO_SCRIPT;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "histlog",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Replay scripts against in-memory commit histories",
    long_about = "This tool drives in-memory commit logs from a small line-based script. \
    Logs live only for the duration of a run; nothing is written to disk. \
    Set HISTLOG_DATE (and optionally HISTLOG_STEP_SECS) to get deterministic timestamps.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "run",
        about = "Replay a script",
        long_about = "This command replays a script one operation per line and prints the output of each operation. \
        The script is read from standard input when no path is given."
    )]
    Run {
        #[arg(index = 1, help = "The path to the script")]
        script: Option<PathBuf>,
    },
    #[command(
        name = "demo",
        about = "Replay the built-in demo script",
        long_about = "This command creates two logs, commits to them in alternation and synchronizes them."
    )]
    Demo,
}

fn run(cli: Cli) -> Result<()> {
    let context = LogContext::new(IdGenerator::global(), clock::load_from_env()?);
    let mut session = Session::new(context, Box::new(std::io::stdout()));

    match cli.command {
        Commands::Run { script } => {
            let script = match script {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Cannot read script {}", path.display()))?,
                None => {
                    let mut script = String::new();
                    std::io::stdin()
                        .read_to_string(&mut script)
                        .context("Cannot read script from stdin")?;
                    script
                }
            };
            session.run(&script)
        }
        Commands::Demo => session.run(DEMO_SCRIPT),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
