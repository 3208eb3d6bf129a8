//! Emission driver.
//!
//! Walks a selection of endpoint descriptors in order, renders one Go
//! client function per supported endpoint, and assembles the complete
//! source file: preamble first, then the functions separated by blank
//! lines.

use apigen_core::{EndpointDescriptor, Error, MethodClass, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::context::{HeaderContext, ReadContext, WriteContext};
use crate::identifier::IdentifierAllocator;
use crate::path_template::to_format_path;
use crate::signature::{header_lines, Signature};
use crate::template_engine::TemplateEngine;

/// Base URL prepended to every endpoint path unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Go package name for the emitted file.
const PACKAGE_NAME: &str = "main";

/// An endpoint excluded from emission because of its HTTP method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEndpoint {
    /// Raw descriptor name
    pub name: String,
    /// Upper-cased HTTP method that caused the skip
    pub method: String,
}

/// Result of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSource {
    /// The complete Go source file
    pub content: String,
    /// Descriptors in the input selection
    pub endpoints_found: usize,
    /// Client functions actually emitted
    pub functions_emitted: usize,
    /// Endpoints skipped for unsupported methods, in input order
    pub skipped: Vec<SkippedEndpoint>,
}

/// Generates a Go client source file from endpoint descriptors.
///
/// Each call to [`generate`](Self::generate) is an independent run: the
/// identifier registry starts empty, so output depends only on the input
/// selection.
#[derive(Debug)]
pub struct CodeGenerator<'a> {
    engine: TemplateEngine<'a>,
    base_url: String,
}

impl<'a> CodeGenerator<'a> {
    /// Creates a generator with [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns error if the built-in skeletons fail to register.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a generator targeting the given base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the built-in skeletons fail to register.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_codegen::CodeGenerator;
    ///
    /// let generator = CodeGenerator::with_base_url("https://api.internal").unwrap();
    /// assert_eq!(generator.base_url(), "https://api.internal");
    /// ```
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            base_url: base_url.into(),
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generates the complete Go source for a selection of endpoints.
    ///
    /// Endpoints are processed in input order. GET and DELETE render as
    /// read-style functions, POST and PUT as write-style; any other method
    /// is skipped and reported in the summary rather than failing the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySelection`] for an empty input, and
    /// [`Error::TemplateError`] if rendering fails or leaves unsubstituted
    /// skeleton markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_codegen::CodeGenerator;
    /// use apigen_core::EndpointDescriptor;
    ///
    /// let generator = CodeGenerator::new().unwrap();
    /// let endpoints = vec![EndpointDescriptor {
    ///     name: "list items".to_string(),
    ///     method: "GET".to_string(),
    ///     path: "/items".to_string(),
    ///     ..EndpointDescriptor::default()
    /// }];
    ///
    /// let source = generator.generate(&endpoints).unwrap();
    /// assert!(source.content.contains("func ListItems()"));
    /// ```
    pub fn generate(&self, endpoints: &[EndpointDescriptor]) -> Result<GeneratedSource> {
        if endpoints.is_empty() {
            return Err(Error::EmptySelection);
        }

        // Fresh registry per run
        let mut allocator = IdentifierAllocator::new();
        let mut functions = Vec::new();
        let mut skipped = Vec::new();

        for descriptor in endpoints {
            let method = descriptor.method_upper();
            let class = descriptor.method_class();

            if class == MethodClass::Unsupported {
                warn!(
                    name = %descriptor.name,
                    method = %method,
                    "skipping endpoint with unsupported method"
                );
                skipped.push(SkippedEndpoint {
                    name: descriptor.name.clone(),
                    method,
                });
                continue;
            }

            let func_name = allocator.allocate(&descriptor.name);
            debug!(name = %descriptor.name, func = %func_name, "rendering endpoint");

            let rendered = self.render_function(descriptor, class, func_name, &method)?;
            check_substitution(&rendered)?;
            functions.push(rendered);
        }

        let header = self.engine.render(
            "client/header",
            &HeaderContext {
                package: PACKAGE_NAME.to_string(),
            },
        )?;

        let mut content = header;
        for function in &functions {
            content.push('\n');
            content.push_str(function);
        }

        Ok(GeneratedSource {
            content,
            endpoints_found: endpoints.len(),
            functions_emitted: functions.len(),
            skipped,
        })
    }

    fn render_function(
        &self,
        descriptor: &EndpointDescriptor,
        class: MethodClass,
        func_name: String,
        method: &str,
    ) -> Result<String> {
        let body_bearing = class == MethodClass::Write;
        let signature = Signature::build(descriptor, body_bearing);
        let format_path = to_format_path(&descriptor.path);
        let url_expr = signature.url_expr(&self.base_url, &format_path);
        let headers = header_lines(&descriptor.headers);

        if body_bearing {
            self.engine.render(
                "client/write",
                &WriteContext {
                    func_name,
                    params: signature.param_list(),
                    method: method.to_string(),
                    url_expr,
                    headers,
                    body_pairs: signature.body_pairs,
                },
            )
        } else {
            self.engine.render(
                "client/read",
                &ReadContext {
                    func_name,
                    params: signature.param_list(),
                    method: method.to_string(),
                    url_expr,
                    headers,
                },
            )
        }
    }
}

/// Rejects output still carrying skeleton markers.
///
/// Strict mode already fails on missing slots; this guards against a slot
/// VALUE that itself contains `{{` or `}}`, which would smuggle template
/// syntax into the emitted Go source.
fn check_substitution(rendered: &str) -> Result<()> {
    if rendered.contains("{{") || rendered.contains("}}") {
        return Err(Error::TemplateError {
            message: "rendered function contains unsubstituted template markers".to_string(),
            source: None,
        });
    }
    Ok(())
}
