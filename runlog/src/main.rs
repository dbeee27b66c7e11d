use clap::{Parser, Subcommand};
use runlog_core::cli;
use runlog_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "runlog",
    version,
    about = "Runlog: run logger and log-metrics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a previously written run log
    Analyze(cli::analyze::AnalyzeArgs),

    /// Write a demonstration run log, flushing on interrupt
    Demo(cli::demo::DemoArgs),
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => {
            if let Err(e) = cli::analyze::run(args) {
                eprintln!("analyze error: {e:#}");
                std::process::exit(1);
            }
        }

        Command::Demo(args) => {
            if let Err(e) = cli::demo::run(args) {
                eprintln!("demo error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
