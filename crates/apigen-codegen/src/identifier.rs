//! Identifier allocation and sanitization.
//!
//! Converts arbitrary human-readable endpoint names into valid, unique Go
//! function identifiers. The collision registry is a run-scoped value owned
//! by one [`IdentifierAllocator`]; it never persists across generation runs,
//! so concurrent runs each see deterministic, input-only naming.
//!
//! # Examples
//!
//! ```
//! use apigen_codegen::IdentifierAllocator;
//!
//! let mut allocator = IdentifierAllocator::new();
//! assert_eq!(allocator.allocate("Get User"), "GetUser");
//! assert_eq!(allocator.allocate("Get User"), "GetUser2");
//! ```

use std::collections::HashMap;

/// Base identifier used when a descriptor has no usable name.
pub const DEFAULT_BASE: &str = "CallApi";

/// Run-scoped identifier allocator.
///
/// Maps each pascal-cased base to its occurrence count. The first
/// occurrence returns the base unchanged; the n-th returns `base` + `n`,
/// so suffixes are never reused within a run.
#[derive(Debug, Default)]
pub struct IdentifierAllocator {
    registry: HashMap<String, usize>,
}

impl IdentifierAllocator {
    /// Creates an empty allocator for one generation run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a unique identifier for the given raw name.
    ///
    /// Always succeeds; an empty or all-symbol name falls back to
    /// [`DEFAULT_BASE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_codegen::IdentifierAllocator;
    ///
    /// let mut allocator = IdentifierAllocator::new();
    /// assert_eq!(allocator.allocate("list items"), "ListItems");
    /// assert_eq!(allocator.allocate(""), "CallApi");
    /// assert_eq!(allocator.allocate("!!!"), "CallApi2");
    /// ```
    pub fn allocate(&mut self, raw: &str) -> String {
        let mut base = pascal_case(raw);
        if base.is_empty() {
            base = DEFAULT_BASE.to_string();
        }

        let count = self.registry.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}{count}")
        }
    }
}

/// Converts a raw name to PascalCase.
///
/// Every run of non-alphanumeric characters acts as a word separator; each
/// word is capitalized (first character uppercase, rest lowercase) and the
/// words are concatenated.
///
/// # Examples
///
/// ```
/// use apigen_codegen::identifier::pascal_case;
///
/// assert_eq!(pascal_case("get user"), "GetUser");
/// assert_eq!(pascal_case("list-ITEMS_v2"), "ListItemsV2");
/// assert_eq!(pascal_case(""), "");
/// ```
#[must_use]
pub fn pascal_case(raw: &str) -> String {
    raw.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

/// Sanitizes a name into a valid argument identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`.
///
/// # Examples
///
/// ```
/// use apigen_codegen::identifier::sanitize;
///
/// assert_eq!(sanitize("page-size"), "page_size");
/// assert_eq!(sanitize("user.id"), "user_id");
/// assert_eq!(sanitize("limit"), "limit");
/// ```
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_basic() {
        assert_eq!(pascal_case("get user"), "GetUser");
        assert_eq!(pascal_case("Get User"), "GetUser");
        assert_eq!(pascal_case("create item"), "CreateItem");
    }

    #[test]
    fn test_pascal_case_symbol_runs() {
        // A run of non-alphanumerics is one separator.
        assert_eq!(pascal_case("get -- user"), "GetUser");
        assert_eq!(pascal_case("list/items (v2)"), "ListItemsV2");
    }

    #[test]
    fn test_pascal_case_folds_case() {
        assert_eq!(pascal_case("LIST ITEMS"), "ListItems");
        assert_eq!(pascal_case("getUser"), "Getuser");
    }

    #[test]
    fn test_pascal_case_empty_and_symbols_only() {
        assert_eq!(pascal_case(""), "");
        assert_eq!(pascal_case("!!!"), "");
    }

    #[test]
    fn test_allocate_unique_within_run() {
        let mut allocator = IdentifierAllocator::new();
        assert_eq!(allocator.allocate("Get User"), "GetUser");
        assert_eq!(allocator.allocate("Get User"), "GetUser2");
        assert_eq!(allocator.allocate("Get User"), "GetUser3");
    }

    #[test]
    fn test_allocate_suffix_never_reused() {
        let mut allocator = IdentifierAllocator::new();
        // Differently-written names that normalize to the same base share
        // one counter.
        assert_eq!(allocator.allocate("get-user"), "GetUser");
        assert_eq!(allocator.allocate("GET USER"), "GetUser2");
        assert_eq!(allocator.allocate("get_user"), "GetUser3");
    }

    #[test]
    fn test_allocate_default_base() {
        let mut allocator = IdentifierAllocator::new();
        assert_eq!(allocator.allocate(""), "CallApi");
        assert_eq!(allocator.allocate("***"), "CallApi2");
    }

    #[test]
    fn test_fresh_allocator_restarts_counts() {
        let mut first = IdentifierAllocator::new();
        assert_eq!(first.allocate("Get User"), "GetUser");

        let mut second = IdentifierAllocator::new();
        assert_eq!(second.allocate("Get User"), "GetUser");
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("page-size"), "page_size");
        assert_eq!(sanitize("a.b.c"), "a_b_c");
        assert_eq!(sanitize("already_fine"), "already_fine");
        assert_eq!(sanitize(""), "");
    }
}
