//! # sqltemplate
//!
//! Compile SQL templates with typed placeholders into escaped SQL strings.
//!
//! ## Placeholders
//!
//! | Tag  | Renders |
//! |------|---------|
//! | `?`  | detected from the argument: `'text'`, `42`, `1.5`, `NULL` |
//! | `?d` | integer (`NULL` for null) |
//! | `?f` | float (`NULL` for null) |
//! | `?#` | identifier `` `name` `` or identifier list `` `a`, `b` `` |
//! | `?a` | value list `1, 2, 3` or assignments `` `k` = 'v', `n` = 5 `` |
//!
//! ## Conditional blocks
//!
//! A `{ ... }` region is removed, braces included, when any placeholder inside
//! it receives [`skip()`]. Otherwise only the braces are removed. A skipped
//! placeholder that is not inside a block is written as [`SKIP_MARKER`].
//!
//! ```ignore
//! use sqltemplate::{Compiler, MysqlEscaper, args, skip};
//!
//! let compiler = Compiler::new(MysqlEscaper);
//!
//! let sql = compiler.compile(
//!     "SELECT * FROM users WHERE name = ? {AND block = ?d}",
//!     &args!["Jack", skip()],
//! )?;
//! assert_eq!(sql, "SELECT * FROM users WHERE name = 'Jack' ");
//!
//! let sql = compiler.compile("UPDATE users SET ?a WHERE id = ?d", &args![
//!     sqltemplate::Arg::map([("name", "Jack"), ("email", "j@example.com")]),
//!     7,
//! ])?;
//! assert_eq!(sql, "UPDATE users SET `name` = 'Jack', `email` = 'j@example.com' WHERE id = 7");
//! # Ok::<(), sqltemplate::TemplateError>(())
//! ```
//!
//! Escaping is delegated to an [`Escape`] implementation supplied by the caller,
//! normally a wrapper around the database driver's escaping routine.

pub mod arg;
pub mod compiler;
pub mod config;
pub mod error;
pub mod escape;
pub mod json;
pub mod prelude;
pub mod template;

mod render;

#[cfg(feature = "tracing")]
mod trace;

pub use arg::{Arg, Key, SKIP_MARKER, skip};
pub use compiler::Compiler;
pub use config::{CompilerConfig, IdentQuote};
pub use error::{TemplateError, TemplateResult};
pub use escape::{Escape, MysqlEscaper, StandardEscaper};
pub use json::args_from_json;
pub use template::{PlaceholderKind, Template};
