// THEORY:
// This file is the main entry point for the `color_sense` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (the presentation layer that
// owns cameras, uploads and rendering).
//
// The primary goal is to export the `SensePipeline` and its associated data
// structures (`ScanReport`, `SessionContext`, the simulator types) as the
// clean, high-level interface for the entire engine. The internal modules
// (`core_modules`) remain reachable for callers that want the pure functions
// directly — classification, dominant-color analysis and deficiency simulation
// are all total, synchronous computations with no hidden state.

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;
pub mod speech;
