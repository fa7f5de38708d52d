//! camelCase → snake_case conversion.
//!
//! Two boundary substitutions, then a lowercase pass:
//!
//! ```text
//! XMLHttpRequest
//! ──┬───
//!   └── acronym run splits only where lowercase resumes
//! XML_Http_Request → xml_http_request
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Boundary before a capitalized word run: `XMLHttp` → `XML_Http`.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid pattern"));

/// Plain camelCase boundary: `myVar` → `my_Var`.
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid pattern"));

/// Convert an identifier to snake_case.
///
/// Already-lowercase input comes back unchanged, so the function is
/// idempotent. The empty string is a no-op.
///
/// # Example
///
/// ```rust
/// use sqlsnake::casing::camel_to_snake;
///
/// assert_eq!(camel_to_snake("userId"), "user_id");
/// assert_eq!(camel_to_snake("XMLHttpRequest"), "xml_http_request");
/// ```
pub fn camel_to_snake(name: &str) -> String {
    let spaced = WORD_BOUNDARY.replace_all(name, "${1}_${2}");
    CAMEL_BOUNDARY
        .replace_all(&spaced, "${1}_${2}")
        .to_lowercase()
}
