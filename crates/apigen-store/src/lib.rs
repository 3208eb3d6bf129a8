//! Artifact persistence for apigen.
//!
//! Owns the on-disk layout shared by the pipeline stages: the selection
//! file written upstream and the Go source file emitted by generation.
//!
//! # Layout
//!
//! ```text
//! output/
//! ├── selected_apis.json      # Selection input (endpoint descriptors)
//! └── generated_client.go     # Emitted Go client source
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod store;

pub use store::{ArtifactStore, DEFAULT_OUTPUT_DIR, GENERATED_FILE, SELECTED_FILE};
