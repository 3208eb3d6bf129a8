//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with pre-registered skeletons for
//! the Go client file: the preamble plus the read-style and write-style
//! function bodies.
//!
//! # Examples
//!
//! ```
//! use apigen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let rendered = engine.render("client/header", &json!({"package": "main"})).unwrap();
//! assert!(rendered.contains("package main"));
//! ```

use apigen_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine for Go client-code generation.
///
/// Wraps Handlebars with strict mode enabled, so a skeleton referencing a
/// slot absent from its context fails the render instead of emitting an
/// empty string.
///
/// HTML escaping is disabled: emitted fragments are Go source, and literal
/// header placeholders like `<x-token-value>` must survive substitution
/// byte-for-byte.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in skeletons registered.
    ///
    /// # Errors
    ///
    /// Returns error if skeleton registration fails (should not happen
    /// with valid built-in skeletons).
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_codegen::template_engine::TemplateEngine;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);

        // Output is Go source, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_client_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers the built-in client skeletons.
    fn register_client_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        // Header template: package declaration and import block
        handlebars
            .register_template_string(
                "client/header",
                include_str!("../templates/header.go.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("failed to register client header template: {e}"),
                source: Some(Box::new(e)),
            })?;

        // Read template: GET/DELETE function, no request body
        handlebars
            .register_template_string("client/read", include_str!("../templates/read.go.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("failed to register client read template: {e}"),
                source: Some(Box::new(e)),
            })?;

        // Write template: POST/PUT function with a JSON payload
        handlebars
            .register_template_string("client/write", include_str!("../templates/write.go.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("failed to register client write template: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(())
    }

    /// Renders a registered skeleton with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A skeleton slot has no value in the context (strict mode)
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_codegen::template_engine::TemplateEngine;
    /// use serde_json::json;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// let result = engine.render("client/header", &json!({"package": "main"}));
    /// assert!(result.is_ok());
    /// ```
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers a custom skeleton.
    ///
    /// Allows overriding a built-in skeleton or adding new ones at runtime.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new().expect("Failed to create default TemplateEngine")
    }
}
