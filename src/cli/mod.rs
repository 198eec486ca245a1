// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
// This is the only layer that prints to stdout.
//
//   1. `prepare` — builds vocabulary + windowed loaders per split
//   2. `inspect` — decodes a few windows back into words
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

use crate::application::{
    inspect_use_case::InspectUseCase,
    prepare_use_case::PrepareUseCase,
};
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "window-lm-data",
    version,
    about = "Build a pruned vocabulary and offset-by-one training windows from text corpora."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    let mut cfg = args.data.resolve()?;
    if args.shuffle {
        cfg.shuffle = true;
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(path) = &args.save_config {
        ConfigStore::save(path, &cfg)?;
        tracing::info!("Saved resolved config to '{}'", path);
    }

    tracing::info!("Preparing splits {:?} from '{}'", cfg.splits, cfg.data_dir);
    let report = PrepareUseCase::new(cfg).execute()?;

    println!("vocabulary size (ntoken): {}", report.vocab.size());
    for split in &report.splits {
        println!(
            "{:<8} tokens={:<10} batches={:<8} windows={:<10} dropped_tail={}",
            split.split,
            split.stats.stream_tokens,
            split.batches_seen,
            split.rows_seen,
            split.stats.discarded_tokens,
        );
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let cfg     = args.data.resolve()?;
    let windows = InspectUseCase::new(cfg).execute(&args.split, args.count)?;

    if windows.is_empty() {
        println!("split '{}' has no windows", args.split);
    }
    for w in windows {
        println!("[{}] src: {}", w.index, w.src);
        println!("{:width$} tgt: {}", "", w.tgt, width = w.index.to_string().len() + 2);
    }
    Ok(())
}
