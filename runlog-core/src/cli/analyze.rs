use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::analyzer::{Analyzer, Tracking};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Directory containing the log file
    #[arg(long, default_value = "./logs")]
    pub path: PathBuf,

    /// Log file name
    #[arg(long, default_value = "runtime.log")]
    pub name: String,

    /// Count ACTION entries as well
    #[arg(long)]
    pub actions: bool,

    /// Leave WARN entries out of the tally
    #[arg(long)]
    pub no_warnings: bool,

    /// Leave ERROR entries out of the tally
    #[arg(long)]
    pub no_errors: bool,

    /// Leave CRITICAL entries out of the tally
    #[arg(long)]
    pub no_criticals: bool,

    /// Write the summary to <OUT>/outfile.log instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let tracking = Tracking {
        actions: args.actions,
        warnings: !args.no_warnings,
        errors: !args.no_errors,
        criticals: !args.no_criticals,
    };

    let mut analyzer = Analyzer::new();

    analyzer
        .read_log(&args.path, &args.name)
        .with_context(|| format!("failed to load {}/{}", args.path.display(), args.name))?;

    let metrics = analyzer.calculate_metrics(tracking)?;
    tracing::debug!(total = metrics.total(), "metrics calculated");

    analyzer
        .print_summary(args.out.as_deref())
        .context("failed to emit summary")?;

    Ok(())
}
