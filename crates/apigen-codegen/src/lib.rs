//! Go client-code generation for apigen.
//!
//! Transforms normalized API endpoint descriptors into a single compilable
//! Go source file, one HTTP-client function per endpoint, using Handlebars
//! skeletons with typed fragment slots.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod context;
pub mod generator;
pub mod identifier;
pub mod path_template;
pub mod signature;
pub mod template_engine;

pub use generator::{CodeGenerator, GeneratedSource, SkippedEndpoint, DEFAULT_BASE_URL};
pub use identifier::IdentifierAllocator;
pub use signature::Signature;
