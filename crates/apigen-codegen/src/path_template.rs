//! Path template analysis.
//!
//! Parses a request path containing placeholder tokens into a
//! positional-format path and the ordered list of parameter names.
//!
//! The tokenizer implements a deliberately lenient grammar:
//!
//! ```text
//! token = ("<" | "{") NAME (">" | "}")?
//! NAME  = [A-Za-z0-9_]+
//! ```
//!
//! A single `>` or `}` closes either opener, and a missing closer (a
//! truncated `{name` at the end of the path or mid-path) still yields the
//! token. An opener not followed by a NAME character is literal text.
//!
//! # Examples
//!
//! ```
//! use apigen_codegen::path_template::{extract_params, to_format_path};
//!
//! let path = "/users/<id>/posts/{postId}";
//! assert_eq!(extract_params(path), vec!["id", "postId"]);
//! assert_eq!(to_format_path(path), "/users/%s/posts/%s");
//! ```

/// One piece of a tokenized path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal text, preserved verbatim
    Literal(String),
    /// A placeholder token's name
    Param(String),
}

/// Returns placeholder names in left-to-right order, duplicates included.
///
/// Duplicate path parameters each keep their own formatting slot, so the
/// list length always matches the number of `%s` markers produced by
/// [`to_format_path`].
///
/// # Examples
///
/// ```
/// use apigen_codegen::path_template::extract_params;
///
/// assert_eq!(extract_params("/a/{x}/b/{x}"), vec!["x", "x"]);
/// assert_eq!(extract_params("/plain/path"), Vec::<String>::new());
/// assert_eq!(extract_params(""), Vec::<String>::new());
/// ```
#[must_use]
pub fn extract_params(path: &str) -> Vec<String> {
    tokenize(path)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Param(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Replaces every placeholder token with a positional `%s` marker.
///
/// All other characters, including `/` separators and any literal
/// query-string text, pass through unchanged.
///
/// # Examples
///
/// ```
/// use apigen_codegen::path_template::to_format_path;
///
/// assert_eq!(to_format_path("/items/<id>"), "/items/%s");
/// assert_eq!(to_format_path("/items"), "/items");
/// assert_eq!(to_format_path(""), "");
/// ```
#[must_use]
pub fn to_format_path(path: &str) -> String {
    tokenize(path)
        .into_iter()
        .map(|segment| match segment {
            Segment::Param(_) => "%s".to_string(),
            Segment::Literal(text) => text,
        })
        .collect()
}

/// Splits a path into literal and placeholder segments.
fn tokenize(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '<' && c != '{' {
            literal.push(c);
            continue;
        }

        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }

        if name.is_empty() {
            // Opener without a NAME is literal text.
            literal.push(c);
            continue;
        }

        // Consume one closing delimiter of either style, if present.
        if matches!(chars.peek(), Some('>' | '}')) {
            chars.next();
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Param(name));
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_params_two_styles() {
        assert_eq!(
            extract_params("/users/<id>/posts/{postId}"),
            vec!["id", "postId"]
        );
    }

    #[test]
    fn test_format_path_two_styles() {
        assert_eq!(
            to_format_path("/users/<id>/posts/{postId}"),
            "/users/%s/posts/%s"
        );
    }

    #[test]
    fn test_duplicate_params_keep_slots() {
        let path = "/pair/{x}/{x}";
        assert_eq!(extract_params(path), vec!["x", "x"]);
        assert_eq!(to_format_path(path), "/pair/%s/%s");
    }

    #[test]
    fn test_unterminated_trailing_brace() {
        // Truncated input keeps the token.
        assert_eq!(extract_params("/users/{id"), vec!["id"]);
        assert_eq!(to_format_path("/users/{id"), "/users/%s");
    }

    #[test]
    fn test_unterminated_mid_path() {
        assert_eq!(extract_params("/a/<id/b"), vec!["id"]);
        assert_eq!(to_format_path("/a/<id/b"), "/a/%s/b");
    }

    #[test]
    fn test_mixed_closer_accepted() {
        assert_eq!(extract_params("/a/<id}"), vec!["id"]);
        assert_eq!(to_format_path("/a/{id>"), "/a/%s");
    }

    #[test]
    fn test_opener_without_name_is_literal() {
        assert_eq!(extract_params("/a/{}/b"), Vec::<String>::new());
        assert_eq!(to_format_path("/a/{}/b"), "/a/{}/b");
        assert_eq!(to_format_path("/cmp/<=/x"), "/cmp/<=/x");
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(extract_params(""), Vec::<String>::new());
        assert_eq!(to_format_path(""), "");
    }

    #[test]
    fn test_plain_path_preserved() {
        let path = "/v1/items?expand=full";
        assert_eq!(extract_params(path), Vec::<String>::new());
        assert_eq!(to_format_path(path), path);
    }

    #[test]
    fn test_deterministic() {
        let path = "/users/<id>/posts/{postId}";
        assert_eq!(extract_params(path), extract_params(path));
        assert_eq!(to_format_path(path), to_format_path(path));
    }
}
