//! Core types and errors for apigen.
//!
//! This crate provides the foundational types used across the apigen
//! workspace: the normalized endpoint descriptor model consumed by the
//! generator, the shared error hierarchy, and CLI value types.
//!
//! # Architecture
//!
//! The core consists of:
//! - The endpoint descriptor model (`EndpointDescriptor`, `ParameterDescriptor`)
//! - HTTP method classification (`MethodClass`)
//! - Error hierarchy with contextual information
//! - CLI value types (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod types;

pub mod cli;

pub use error::{Error, Result};
pub use types::{EndpointDescriptor, MethodClass, ParameterDescriptor, RequestBody};
