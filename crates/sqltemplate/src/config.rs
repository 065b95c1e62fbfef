use serde::Deserialize;

/// Quote character wrapped around identifiers rendered by `?#` and `?a` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentQuote {
    /// `` `name` `` (MySQL).
    #[default]
    Backtick,
    /// `"name"` (ANSI / PostgreSQL).
    DoubleQuote,
}

impl IdentQuote {
    pub fn as_char(self) -> char {
        match self {
            IdentQuote::Backtick => '`',
            IdentQuote::DoubleQuote => '"',
        }
    }
}

/// Compiler configuration.
///
/// Can be built in code or deserialized as a section of an application config:
///
/// ```toml
/// [sql_template]
/// ident_quote = "double_quote"
/// max_logged_sql_length = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Identifier quote style.
    pub ident_quote: IdentQuote,
    /// Truncate compiled SQL in debug logs (in bytes, on a char boundary). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            ident_quote: IdentQuote::Backtick,
            max_logged_sql_length: Some(200),
        }
    }
}

impl CompilerConfig {
    /// Create a new configuration with defaults (backtick identifiers, 200-byte log truncation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier quote style.
    pub fn with_ident_quote(mut self, quote: IdentQuote) -> Self {
        self.ident_quote = quote;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct AppConfig {
        sql_template: CompilerConfig,
    }

    #[test]
    fn defaults() {
        let cfg = CompilerConfig::new();
        assert_eq!(cfg.ident_quote, IdentQuote::Backtick);
        assert_eq!(cfg.max_logged_sql_length, Some(200));
    }

    #[test]
    fn builder_overrides() {
        let cfg = CompilerConfig::new()
            .with_ident_quote(IdentQuote::DoubleQuote)
            .no_truncate();
        assert_eq!(cfg.ident_quote.as_char(), '"');
        assert_eq!(cfg.max_logged_sql_length, None);
    }

    #[test]
    fn deserializes_from_toml_section() {
        let raw = r#"
            [sql_template]
            ident_quote = "double_quote"
            max_logged_sql_length = 500
        "#;
        let app: AppConfig = toml::from_str(raw).unwrap();
        assert_eq!(app.sql_template.ident_quote, IdentQuote::DoubleQuote);
        assert_eq!(app.sql_template.max_logged_sql_length, Some(500));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let app: AppConfig = toml::from_str("[sql_template]\n").unwrap();
        assert_eq!(app.sql_template, CompilerConfig::default());
    }
}
