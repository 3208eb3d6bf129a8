//! Call-signature construction.
//!
//! Merges path parameters, query parameters, and request-body fields into
//! an ordered, string-typed call signature plus the fragments derived from
//! it: the query string, the URL interpolation expression, the payload
//! pairs, and the header-setting lines.
//!
//! Name collisions between a path parameter and a query or body field are
//! NOT de-duplicated; if both exist the signature contains two
//! identically-sanitized argument names. Known gap, preserved deliberately.
//!
//! # Examples
//!
//! ```
//! use apigen_codegen::Signature;
//! use apigen_core::{EndpointDescriptor, ParameterDescriptor};
//!
//! let descriptor = EndpointDescriptor {
//!     path: "/items/<id>".to_string(),
//!     parameters: vec![ParameterDescriptor {
//!         name: "limit".to_string(),
//!         location: "query".to_string(),
//!         required: false,
//!     }],
//!     ..EndpointDescriptor::default()
//! };
//!
//! let signature = Signature::build(&descriptor, false);
//! assert_eq!(signature.params, vec!["id", "limit"]);
//! assert_eq!(signature.query_string, "limit=%s");
//! ```

use crate::context::BodyPair;
use crate::identifier::sanitize;
use crate::path_template::extract_params;
use apigen_core::EndpointDescriptor;

/// Ordered call signature for one endpoint.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    /// Sanitized argument names in declaration order
    pub params: Vec<String>,
    /// Sanitized names feeding the URL interpolation, placeholder order
    pub format_args: Vec<String>,
    /// `name=%s` pairs joined with `&`; empty for write-style calls
    pub query_string: String,
    /// Payload pairs in body-mapping order; empty for read-style calls
    pub body_pairs: Vec<BodyPair>,
}

impl Signature {
    /// Builds the signature for a descriptor.
    ///
    /// Read-style (`body_bearing == false`): arguments are path parameters
    /// followed by query-located parameters in their original order, and the
    /// format arguments are the path names then the query names — exactly
    /// the left-to-right order of `%s` slots in the rendered URL.
    ///
    /// Write-style (`body_bearing == true`): arguments are path parameters
    /// followed by request-body keys in insertion order; only path names
    /// feed the URL interpolation.
    #[must_use]
    pub fn build(descriptor: &EndpointDescriptor, body_bearing: bool) -> Self {
        let path_params: Vec<String> = extract_params(&descriptor.path)
            .iter()
            .map(|name| sanitize(name))
            .collect();

        if body_bearing {
            let body_pairs: Vec<BodyPair> = descriptor
                .request_body
                .keys()
                .map(|key| BodyPair {
                    key: key.clone(),
                    value: sanitize(key),
                })
                .collect();

            let mut params = path_params.clone();
            params.extend(body_pairs.iter().map(|pair| pair.value.clone()));

            Self {
                params,
                format_args: path_params,
                query_string: String::new(),
                body_pairs,
            }
        } else {
            let query_names: Vec<&str> = descriptor
                .parameters
                .iter()
                .filter(|p| p.is_query())
                .map(|p| p.name.as_str())
                .collect();

            // Raw names in the query string, sanitized names as arguments.
            let query_string = query_names
                .iter()
                .map(|name| format!("{name}=%s"))
                .collect::<Vec<_>>()
                .join("&");

            let mut params = path_params.clone();
            params.extend(query_names.iter().map(|name| sanitize(name)));

            Self {
                format_args: params.clone(),
                params,
                query_string,
                body_pairs: Vec::new(),
            }
        }
    }

    /// Returns the Go parameter declaration list.
    ///
    /// All values are treated as strings; there is no type inference.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_codegen::Signature;
    ///
    /// let signature = Signature {
    ///     params: vec!["id".to_string(), "limit".to_string()],
    ///     ..Signature::default()
    /// };
    /// assert_eq!(signature.param_list(), "id string, limit string");
    /// ```
    #[must_use]
    pub fn param_list(&self) -> String {
        self.params
            .iter()
            .map(|name| format!("{name} string"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the Go expression producing the request URL.
    ///
    /// With no interpolated arguments this is a plain string literal; the
    /// query-string segment is omitted entirely (no lone `?`) when there
    /// are zero query parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_codegen::Signature;
    ///
    /// let signature = Signature::default();
    /// assert_eq!(
    ///     signature.url_expr("https://api.example.com", "/items"),
    ///     "\"https://api.example.com/items\"",
    /// );
    /// ```
    #[must_use]
    pub fn url_expr(&self, base_url: &str, format_path: &str) -> String {
        let mut target = format!("{base_url}{format_path}");
        if !self.query_string.is_empty() {
            target.push('?');
            target.push_str(&self.query_string);
        }

        if self.format_args.is_empty() {
            format!("\"{target}\"")
        } else {
            format!("fmt.Sprintf(\"{target}\", {})", self.format_args.join(", "))
        }
    }
}

/// Builds one header-setting line per declared header name.
///
/// The value is a literal placeholder tag derived from the lower-cased
/// header name; an empty list yields no lines.
///
/// # Examples
///
/// ```
/// use apigen_codegen::signature::header_lines;
///
/// let lines = header_lines(&["X-Token".to_string()]);
/// assert_eq!(lines, vec![r#"req.Header.Set("X-Token", "<x-token-value>")"#]);
/// assert!(header_lines(&[]).is_empty());
/// ```
#[must_use]
pub fn header_lines(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|name| {
            format!(
                "req.Header.Set(\"{name}\", \"<{}-value>\")",
                name.to_lowercase()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_core::ParameterDescriptor;
    use indexmap::IndexMap;

    fn query_param(name: &str) -> ParameterDescriptor {
        ParameterDescriptor {
            name: name.to_string(),
            location: "query".to_string(),
            required: false,
        }
    }

    #[test]
    fn test_read_signature_path_then_query() {
        let descriptor = EndpointDescriptor {
            path: "/users/<id>".to_string(),
            parameters: vec![query_param("a"), query_param("b")],
            ..EndpointDescriptor::default()
        };

        let signature = Signature::build(&descriptor, false);
        assert_eq!(signature.params, vec!["id", "a", "b"]);
        assert_eq!(signature.format_args, vec!["id", "a", "b"]);
        assert_eq!(signature.query_string, "a=%s&b=%s");
        assert!(signature.body_pairs.is_empty());
    }

    #[test]
    fn test_read_signature_skips_non_query_locations() {
        let descriptor = EndpointDescriptor {
            path: "/items".to_string(),
            parameters: vec![
                query_param("limit"),
                ParameterDescriptor {
                    name: "X-Trace".to_string(),
                    location: "header".to_string(),
                    required: false,
                },
            ],
            ..EndpointDescriptor::default()
        };

        let signature = Signature::build(&descriptor, false);
        assert_eq!(signature.params, vec!["limit"]);
        assert_eq!(signature.query_string, "limit=%s");
    }

    #[test]
    fn test_query_string_uses_raw_names() {
        let descriptor = EndpointDescriptor {
            parameters: vec![query_param("page-size")],
            ..EndpointDescriptor::default()
        };

        let signature = Signature::build(&descriptor, false);
        // The wire name keeps its hyphen; the argument is sanitized.
        assert_eq!(signature.query_string, "page-size=%s");
        assert_eq!(signature.params, vec!["page_size"]);
    }

    #[test]
    fn test_write_signature_path_then_body() {
        let mut request_body = IndexMap::new();
        request_body.insert("title".to_string(), "string".to_string());
        request_body.insert("body".to_string(), "string".to_string());

        let descriptor = EndpointDescriptor {
            path: "/items/{id}".to_string(),
            request_body,
            ..EndpointDescriptor::default()
        };

        let signature = Signature::build(&descriptor, true);
        assert_eq!(signature.params, vec!["id", "title", "body"]);
        assert_eq!(signature.format_args, vec!["id"]);
        assert!(signature.query_string.is_empty());
        assert_eq!(signature.body_pairs.len(), 2);
        assert_eq!(signature.body_pairs[0].key, "title");
        assert_eq!(signature.body_pairs[0].value, "title");
    }

    #[test]
    fn test_signature_order_idempotent() {
        let mut request_body = IndexMap::new();
        request_body.insert("zeta".to_string(), "string".to_string());
        request_body.insert("alpha".to_string(), "string".to_string());

        let descriptor = EndpointDescriptor {
            path: "/x/{k}".to_string(),
            request_body,
            ..EndpointDescriptor::default()
        };

        let first = Signature::build(&descriptor, true);
        let second = Signature::build(&descriptor, true);
        assert_eq!(first.params, second.params);
        // Insertion order, never re-sorted.
        assert_eq!(first.params, vec!["k", "zeta", "alpha"]);
    }

    #[test]
    fn test_path_query_collision_not_deduplicated() {
        let descriptor = EndpointDescriptor {
            path: "/users/<id>".to_string(),
            parameters: vec![query_param("id")],
            ..EndpointDescriptor::default()
        };

        let signature = Signature::build(&descriptor, false);
        assert_eq!(signature.params, vec!["id", "id"]);
    }

    #[test]
    fn test_param_list() {
        let descriptor = EndpointDescriptor {
            path: "/users/<id>".to_string(),
            parameters: vec![query_param("limit")],
            ..EndpointDescriptor::default()
        };

        let signature = Signature::build(&descriptor, false);
        assert_eq!(signature.param_list(), "id string, limit string");
    }

    #[test]
    fn test_url_expr_with_args() {
        let descriptor = EndpointDescriptor {
            path: "/users/<id>".to_string(),
            parameters: vec![query_param("limit")],
            ..EndpointDescriptor::default()
        };

        let signature = Signature::build(&descriptor, false);
        assert_eq!(
            signature.url_expr("https://api.example.com", "/users/%s"),
            "fmt.Sprintf(\"https://api.example.com/users/%s?limit=%s\", id, limit)"
        );
    }

    #[test]
    fn test_url_expr_omits_query_segment_when_empty() {
        let signature = Signature::default();
        let expr = signature.url_expr("https://api.example.com", "/items");
        assert!(!expr.contains('?'));
        assert_eq!(expr, "\"https://api.example.com/items\"");
    }

    #[test]
    fn test_header_lines() {
        let lines = header_lines(&["X-Auth".to_string(), "X-Request-Id".to_string()]);
        assert_eq!(
            lines,
            vec![
                r#"req.Header.Set("X-Auth", "<x-auth-value>")"#,
                r#"req.Header.Set("X-Request-Id", "<x-request-id-value>")"#,
            ]
        );
    }

    #[test]
    fn test_header_lines_empty() {
        assert!(header_lines(&[]).is_empty());
    }
}
