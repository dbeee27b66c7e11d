use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Args;

use crate::recorder::Recorder;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Directory to write the log into (created if missing)
    #[arg(long, default_value = "./logs")]
    pub path: PathBuf,

    /// Log file name
    #[arg(long, default_value = "runtime.log")]
    pub name: String,

    /// Project name written into the log header
    #[arg(long, default_value = "Runlog Demo")]
    pub project: String,
}

/// Drives a recorder through a full run: create, a few records, flush.
///
/// The recorder instance is shared explicitly with the interrupt handler
/// (no global state): ctrl-c records a CRITICAL entry and flushes before
/// exiting, so an interrupted run still leaves a readable log.
pub fn run(args: DemoArgs) -> Result<()> {
    if !args.path.exists() {
        fs::create_dir_all(&args.path)
            .with_context(|| format!("failed to create {}", args.path.display()))?;
    }

    let recorder = Recorder::new(&args.path, &args.name, &args.project)?;
    recorder.create().context("failed to create log file")?;

    let recorder = Arc::new(Mutex::new(recorder));

    {
        let recorder = Arc::clone(&recorder);
        ctrlc::set_handler(move || {
            tracing::info!("interrupt received, flushing log");

            let mut rec = recorder.lock().expect("recorder lock poisoned");
            rec.critical("Run interrupted by signal.");
            if let Err(e) = rec.flush() {
                tracing::error!("failed to flush log: {e}");
            }
            std::process::exit(1);
        })
        .context("failed to install interrupt handler")?;
    }

    let mut rec = recorder.lock().expect("recorder lock poisoned");

    rec.action("Demo run started.");
    rec.warning("This run exists only to produce a sample log.");
    rec.error("Demonstrating a value mismatch", "int", "str");
    rec.action("Demo run complete.");

    rec.flush().context("failed to flush log")?;

    println!("Wrote {}", rec.path().display());
    println!("Summarize it with: runlog analyze --path {}", args.path.display());

    Ok(())
}
