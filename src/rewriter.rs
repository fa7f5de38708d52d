//! Document rewriter.
//!
//! Scans a SQL dump for double-quoted spans and replaces each one with its
//! snake_case form, quotes stripped. The scan is flat text matching: string
//! literals, comments, and escaped quotes get no special treatment, and an
//! unbalanced trailing quote simply ends the matching early.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::casing::camel_to_snake;

/// A double-quoted span with at least one inner character.
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("valid pattern"));

/// Replace every double-quoted identifier in `sql` with its snake_case form.
///
/// `on_convert` is called once per identifier that actually changed, in
/// scan order, with the original and converted spellings. Identifiers that
/// are already snake_case are still unquoted but trigger no callback.
///
/// # Example
///
/// ```rust
/// use sqlsnake::rewriter::rewrite_identifiers;
///
/// let out = rewrite_identifiers(r#"SELECT "userId" FROM "users";"#, |_, _| {});
/// assert_eq!(out, "SELECT user_id FROM users;");
/// ```
pub fn rewrite_identifiers<F>(sql: &str, mut on_convert: F) -> String
where
    F: FnMut(&str, &str),
{
    QUOTED
        .replace_all(sql, |caps: &Captures| {
            let original = &caps[1];
            let converted = camel_to_snake(original);
            if converted != original {
                on_convert(original, &converted);
            }
            converted
        })
        .into_owned()
}
