//! Endpoint descriptor model.
//!
//! The normalized records consumed by the generator. Descriptors are
//! produced upstream (extraction and selection) and are read-only here:
//! every field is defensively optional so partial or malformed input still
//! deserializes, and the generator never mutates the collection.
//!
//! # Examples
//!
//! ```
//! use apigen_core::{EndpointDescriptor, MethodClass};
//!
//! let descriptor: EndpointDescriptor = serde_json::from_str(
//!     r#"{"name": "List Items", "method": "GET", "path": "/items"}"#,
//! ).unwrap();
//!
//! assert_eq!(descriptor.name, "List Items");
//! assert_eq!(descriptor.method_class(), MethodClass::Read);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Request body shape: field name to type-label string.
///
/// Insertion order is preserved and determines signature and payload order.
pub type RequestBody = IndexMap<String, String>;

/// One API operation as described by the extraction pipeline.
///
/// All fields default to empty when absent so the generator can treat any
/// upstream record as well-formed input.
///
/// # Examples
///
/// ```
/// use apigen_core::EndpointDescriptor;
///
/// let descriptor = EndpointDescriptor {
///     name: "Create Item".to_string(),
///     method: "POST".to_string(),
///     path: "/items".to_string(),
///     ..EndpointDescriptor::default()
/// };
///
/// assert_eq!(descriptor.method, "POST");
/// assert!(descriptor.parameters.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Human-readable name, basis for the generated identifier
    #[serde(default)]
    pub name: String,
    /// HTTP method (GET, POST, PUT, DELETE; anything else is skipped)
    #[serde(default)]
    pub method: String,
    /// Request path, possibly containing `<...>` or `{...}` placeholders
    #[serde(default)]
    pub path: String,
    /// Declared parameters in original order
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Request body fields, insertion order preserved
    #[serde(default)]
    pub request_body: RequestBody,
    /// Header names to attach to the request
    #[serde(default)]
    pub headers: Vec<String>,
}

impl EndpointDescriptor {
    /// Classifies this descriptor's HTTP method.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_core::{EndpointDescriptor, MethodClass};
    ///
    /// let descriptor = EndpointDescriptor {
    ///     method: "delete".to_string(),
    ///     ..EndpointDescriptor::default()
    /// };
    /// assert_eq!(descriptor.method_class(), MethodClass::Read);
    /// ```
    #[must_use]
    pub fn method_class(&self) -> MethodClass {
        MethodClass::classify(&self.method)
    }

    /// Returns the method in the uppercase form used in emitted code.
    #[must_use]
    pub fn method_upper(&self) -> String {
        self.method.to_uppercase()
    }
}

/// One declared parameter of an endpoint.
///
/// The `location` field is deserialized from the upstream `in` key.
/// `required` is preserved but unused downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name
    #[serde(default)]
    pub name: String,
    /// Declared location: `"query"` or other
    #[serde(default, rename = "in", alias = "location")]
    pub location: String,
    /// Whether the parameter is required (preserved, not consumed)
    #[serde(default)]
    pub required: bool,
}

impl ParameterDescriptor {
    /// Returns `true` if this parameter is declared in the query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_core::ParameterDescriptor;
    ///
    /// let param = ParameterDescriptor {
    ///     name: "limit".to_string(),
    ///     location: "query".to_string(),
    ///     required: false,
    /// };
    /// assert!(param.is_query());
    /// ```
    #[must_use]
    pub fn is_query(&self) -> bool {
        self.location == "query"
    }
}

/// Classification of HTTP methods into skeleton families.
///
/// Read-style methods carry no body; write-style methods carry a JSON
/// payload. Everything else is unsupported and skipped by the emission
/// driver.
///
/// # Examples
///
/// ```
/// use apigen_core::MethodClass;
///
/// assert_eq!(MethodClass::classify("GET"), MethodClass::Read);
/// assert_eq!(MethodClass::classify("post"), MethodClass::Write);
/// assert_eq!(MethodClass::classify("PATCH"), MethodClass::Unsupported);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodClass {
    /// Body-less query operation (GET, DELETE)
    Read,
    /// Body-bearing operation (POST, PUT)
    Write,
    /// Anything else; the descriptor is skipped
    Unsupported,
}

impl MethodClass {
    /// Classifies a method string, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_core::MethodClass;
    ///
    /// assert_eq!(MethodClass::classify("delete"), MethodClass::Read);
    /// assert_eq!(MethodClass::classify("PUT"), MethodClass::Write);
    /// assert_eq!(MethodClass::classify(""), MethodClass::Unsupported);
    /// ```
    #[must_use]
    pub fn classify(method: &str) -> Self {
        match method.to_uppercase().as_str() {
            "GET" | "DELETE" => Self::Read,
            "POST" | "PUT" => Self::Write,
            _ => Self::Unsupported,
        }
    }
}
