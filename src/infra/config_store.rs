// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes the data loader settings as JSON.
//
// The file is shared with the (external) model and trainer, so
// only the `data_loader` section is ours; every other top-level
// key is ignored on load:
//
//   {
//     "name": "word_lm",
//     "data_loader": {
//       "data_dir": "data/ptb",
//       "seq_len": 20,
//       "batch_size": 32,
//       "min_word_count": 5
//     },
//     "model": { ... },
//     "trainer": { ... }
//   }
//
// Missing fields inside `data_loader` take their defaults.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::application::prepare_use_case::DataLoaderConfig;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    data_loader: DataLoaderConfig,
}

pub struct ConfigStore;

impl ConfigStore {
    /// Load the `data_loader` section of a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<DataLoaderConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config '{}'", path.display()))?;
        let file: ConfigFile = serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse config '{}'", path.display()))?;

        tracing::debug!("Loaded data loader config from '{}'", path.display());
        Ok(file.data_loader)
    }

    /// Write `config` as `{ "data_loader": { ... } }`, pretty-printed.
    pub fn save(path: impl AsRef<Path>, config: &DataLoaderConfig) -> Result<()> {
        let path = path.as_ref();
        let file = ConfigFile { data_loader: config.clone() };
        fs::write(path, serde_json::to_string_pretty(&file)?)
            .with_context(|| format!("Cannot write config '{}'", path.display()))?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_other_sections() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "name": "lm",
                "data_loader": {"data_dir": "corpus", "seq_len": 35, "batch_size": 20, "min_word_count": 3},
                "model": {"nhid": 200}
            }"#,
        )
        .unwrap();

        let cfg = ConfigStore::load(&path).unwrap();
        assert_eq!(cfg.data_dir, "corpus");
        assert_eq!(cfg.window_length, 35);
        assert_eq!(cfg.batch_size, 20);
        assert_eq!(cfg.min_word_count, 3);
        assert!(!cfg.shuffle);
    }

    #[test]
    fn test_save_then_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let cfg  = DataLoaderConfig { window_length: 8, shuffle: true, ..Default::default() };

        ConfigStore::save(&path, &cfg).unwrap();
        assert_eq!(ConfigStore::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigStore::load(dir.path().join("absent.json")).is_err());
    }
}
