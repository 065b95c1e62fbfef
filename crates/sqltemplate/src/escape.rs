//! String escaping capability.
//!
//! The compiler never escapes text itself; it calls an [`Escape`] implementation
//! supplied at construction time, normally backed by the database driver.
//! Two driver-independent implementations are provided:
//!
//! - [`MysqlEscaper`]: the character set handled by `mysql_real_escape_string`
//! - [`StandardEscaper`]: ANSI SQL, doubling single quotes
//!
//! Any `Fn(&str) -> String + Send + Sync` closure is an escaper as well.

/// Turns raw text into a form safe to embed between single quotes.
pub trait Escape: Send + Sync {
    fn escape(&self, raw: &str) -> String;
}

impl<F> Escape for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn escape(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Backslash escaping compatible with MySQL's `real_escape_string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlEscaper;

impl Escape for MysqlEscaper {
    fn escape(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + raw.len() / 8);
        for ch in raw.chars() {
            match ch {
                '\0' => out.push_str("\\0"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                '"' => out.push_str("\\\""),
                '\x1a' => out.push_str("\\Z"),
                c => out.push(c),
            }
        }
        out
    }
}

/// ANSI SQL escaping: `'` becomes `''`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEscaper;

impl Escape for StandardEscaper {
    fn escape(&self, raw: &str) -> String {
        raw.replace('\'', "''")
    }
}
