// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `prepare` and `inspect`, and the
// data flags they share.
//
// Precedence for every setting:
//   command-line flag  >  --config file  >  built-in default
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::prepare_use_case::DataLoaderConfig;
use crate::infra::config_store::ConfigStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary and windowed datasets for every split
    Prepare(PrepareArgs),

    /// Decode the first few windows of a split back into words
    Inspect(InspectArgs),
}

/// Flags shared by every subcommand. Unset flags fall back to the
/// config file, then to the defaults.
#[derive(Args, Debug, Default)]
pub struct DataArgs {
    /// JSON config file with a `data_loader` section
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Directory holding <split>.txt files
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Tokens per training window [default: 20]
    #[arg(long, alias = "seq-len")]
    pub window_length: Option<usize>,

    /// Windows per batch; also decides how much tail is dropped [default: 32]
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Minimum corpus frequency for a token to get its own ID [default: 5]
    #[arg(long)]
    pub min_word_count: Option<usize>,

    /// Comma-separated split names; the first builds the vocabulary
    #[arg(long, value_delimiter = ',')]
    pub splits: Option<Vec<String>>,
}

impl DataArgs {
    /// Resolve flags, config file and defaults into one config.
    pub fn resolve(self) -> Result<DataLoaderConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::load(path)?,
            None => DataLoaderConfig::default(),
        };

        if let Some(dir) = self.data_dir {
            cfg.data_dir = dir;
        }
        if let Some(l) = self.window_length {
            cfg.window_length = l;
        }
        if let Some(b) = self.batch_size {
            cfg.batch_size = b;
        }
        if let Some(m) = self.min_word_count {
            cfg.min_word_count = m;
        }
        if let Some(splits) = self.splits {
            cfg.splits = splits;
        }

        Ok(cfg)
    }
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Shuffle window order inside each loader
    #[arg(long)]
    pub shuffle: bool,

    /// Shuffle seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the resolved configuration to this JSON file
    #[arg(long)]
    pub save_config: Option<String>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Split to decode
    #[arg(long, default_value = "train")]
    pub split: String,

    /// Number of windows to print
    #[arg(long, default_value_t = 5)]
    pub count: usize,
}
