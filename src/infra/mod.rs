// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to a single layer.
//
//   config_store.rs — reads the `data_loader` section of a JSON
//                     config file shared with the model and
//                     trainer, and writes resolved settings back
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// JSON configuration loading and saving
pub mod config_store;
