use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pairfix_converters_json::{Options, Processor};
use pairfix_vectors::FixtureKind;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Converts precompile test vectors from CSV into JSON fixtures
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the five vector CSV files
    #[arg(long, default_value = ".")]
    vectors_dir: PathBuf,

    /// Directory the JSON fixture files are written to
    #[arg(long, default_value = "../fixtures")]
    fixtures_dir: PathBuf,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let args = Args::parse();
    tracing::debug!(
        vectors_dir = %args.vectors_dir.display(),
        fixtures_dir = %args.fixtures_dir.display(),
        "starting conversion run",
    );

    let options = Options::builder()
        .vectors_dir(args.vectors_dir)
        .fixtures_dir(args.fixtures_dir)
        .build();
    let processor = Processor::new(options);

    // The first failing family aborts the run; later families are skipped.
    for kind in FixtureKind::ALL {
        processor
            .convert(kind)
            .with_context(|| format!("converting {kind} vectors"))?;
    }

    Ok(())
}
