//! Render contexts for the client-function skeletons.
//!
//! Each context is a typed set of named slots; skeletons never receive raw
//! descriptors. Every fragment is fully computed before rendering so the
//! templates stay pure substitution.

use serde::Serialize;

/// One request-body entry: the literal JSON key and the Go argument
/// holding its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyPair {
    /// Raw field name, emitted as the map key
    pub key: String,
    /// Sanitized argument name, emitted as the map value
    pub value: String,
}

/// Slots for a read-style (no request body) client function.
#[derive(Debug, Clone, Serialize)]
pub struct ReadContext {
    /// Unique Go function name
    pub func_name: String,
    /// Parameter declaration list, e.g. `id string, limit string`
    pub params: String,
    /// Upper-cased HTTP method literal
    pub method: String,
    /// Go expression producing the request URL
    pub url_expr: String,
    /// Pre-built `req.Header.Set(...)` lines
    pub headers: Vec<String>,
}

/// Slots for a write-style (body-bearing) client function.
#[derive(Debug, Clone, Serialize)]
pub struct WriteContext {
    /// Unique Go function name
    pub func_name: String,
    /// Parameter declaration list
    pub params: String,
    /// Upper-cased HTTP method literal
    pub method: String,
    /// Go expression producing the request URL
    pub url_expr: String,
    /// Pre-built `req.Header.Set(...)` lines
    pub headers: Vec<String>,
    /// Payload entries in body-mapping order
    pub body_pairs: Vec<BodyPair>,
}

/// Slots for the file preamble.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderContext {
    /// Go package name for the emitted file
    pub package: String,
}
