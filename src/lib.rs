//! # sqlsnake — snake_case your SQL dumps
//!
//! > Stop quoting camelCase. Rename it.
//!
//! sqlsnake rewrites SQL dump files, turning every double-quoted camelCase
//! identifier into bare snake_case.
//!
//! ## Quick Example
//!
//! ```rust
//! use sqlsnake::prelude::*;
//!
//! let out = rewrite_identifiers(
//!     r#"SELECT "userId", "firstName" FROM "userTable";"#,
//!     |old, new| println!("Converted: {old} → {new}"),
//! );
//! assert_eq!(out, "SELECT user_id, first_name FROM user_table;");
//! ```
//!
//! ## What counts as an identifier
//!
//! Any double-quoted span. sqlsnake does not parse SQL: quoted text inside
//! string literals or comments is rewritten just the same, and escaped
//! quotes are not recognized. That is the right trade-off for dump files,
//! where double quotes are overwhelmingly identifier quoting.

pub mod casing;
pub mod engine;
pub mod error;
pub mod rewriter;

pub mod prelude {
    pub use crate::casing::camel_to_snake;
    pub use crate::engine::convert_file;
    pub use crate::error::{SqlSnakeError, SqlSnakeResult};
    pub use crate::rewriter::rewrite_identifiers;
}

pub use casing::camel_to_snake;
pub use engine::convert_file;
pub use error::{SqlSnakeError, SqlSnakeResult};
pub use rewriter::rewrite_identifiers;
