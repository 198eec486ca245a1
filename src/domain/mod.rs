// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that define what the pipeline talks about:
// tokens, IDs and training windows.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Two-phase token ↔ ID mapping
pub mod vocabulary;

// A single (src, tgt) training example
pub mod window;

// Core abstractions (traits) that other layers implement
pub mod traits;
