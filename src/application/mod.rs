// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal.
//
// Rules for this layer:
//   - No windowing or padding arithmetic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and configuration
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Vocabulary + windowed loaders for every split
pub mod prepare_use_case;

// Decode windows back to words for a quick look
pub mod inspect_use_case;
