use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use shamir_solver::solve_file;

/// Reconstruct polynomial secrets from base-encoded share files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON input files, one reconstruction request per file
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Show per-step diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut failures = 0usize;

    // Each input is an independent request; one bad file must not abort
    // the rest.
    for path in &args.inputs {
        match solve_file(path) {
            Ok(secret) => {
                info!("✅ Reconstructed secret from {}", path.display());
                println!("{}", secret);
            }
            Err(e) => {
                error!("❌ Error solving {}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
