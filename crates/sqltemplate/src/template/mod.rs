//! Template tokenizer.
//!
//! A template is scanned once into a flat list of [`Token`]s. Brace handling is
//! resolved here, so the token list always holds balanced, non-nested blocks:
//!
//! - `{` opens a block, the next `}` closes it
//! - `}` outside a block is dropped
//! - `{` inside an open block is dropped
//! - an unterminated `{` is dropped and its content stays as plain text
//!
//! Placeholders are `?` followed by an optional tag: `#`, `a`, `d` or `f`.


use std::fmt;

/// Placeholder type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `?` - detect from the argument.
    Auto,
    /// `?#` - identifier or identifier list.
    Ident,
    /// `?a` - value list or `key = value` list.
    Array,
    /// `?d` - integer.
    Int,
    /// `?f` - float.
    Float,
}

impl PlaceholderKind {
    fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '#' => Some(Self::Ident),
            'a' => Some(Self::Array),
            'd' => Some(Self::Int),
            'f' => Some(Self::Float),
            _ => None,
        }
    }

    /// The placeholder as written in a template.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "?",
            Self::Ident => "?#",
            Self::Array => "?a",
            Self::Int => "?d",
            Self::Float => "?f",
        }
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    Placeholder(PlaceholderKind),
    BlockStart,
    BlockEnd,
}

/// A parsed template, reusable across compilations.
///
/// # Example
/// ```ignore
/// let t = Template::parse("SELECT * FROM users {WHERE id = ?d}");
/// assert_eq!(t.placeholder_count(), 1);
/// let sql = compiler.compile_template(&t, &args![5])?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
    placeholders: usize,
}

impl Template {
    /// Tokenize a template string. Parsing never fails.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = tokenize(&source);
        let placeholders = tokens
            .iter()
            .filter(|t| matches!(t, Token::Placeholder(_)))
            .count();
        Self {
            source,
            tokens,
            placeholders,
        }
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of placeholders; a compilation needs exactly this many arguments.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Number of terminated conditional blocks.
    pub fn block_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::BlockStart))
            .count()
    }

    pub(crate) fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::parse(source)
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &mut String) {
    if text.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(Token::Literal(last)) => last.push_str(text),
        _ => tokens.push(Token::Literal(text.clone())),
    }
    text.clear();
}

fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    // Index of the BlockStart token of the currently open block.
    let mut open_block: Option<usize> = None;
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '?' => {
                push_literal(&mut tokens, &mut text);
                let kind = match chars.peek().copied().and_then(PlaceholderKind::from_tag) {
                    Some(kind) => {
                        chars.next();
                        kind
                    }
                    None => PlaceholderKind::Auto,
                };
                tokens.push(Token::Placeholder(kind));
            }
            '{' => {
                if open_block.is_none() {
                    push_literal(&mut tokens, &mut text);
                    open_block = Some(tokens.len());
                    tokens.push(Token::BlockStart);
                }
            }
            '}' => {
                if open_block.take().is_some() {
                    push_literal(&mut tokens, &mut text);
                    tokens.push(Token::BlockEnd);
                }
            }
            c => text.push(c),
        }
    }
    push_literal(&mut tokens, &mut text);

    if let Some(start) = open_block {
        tokens.remove(start);
        merge_literals(&mut tokens);
    }
    tokens
}

/// Join adjacent literals left behind after removing a brace token.
fn merge_literals(tokens: &mut Vec<Token>) {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens.drain(..) {
        if let (Token::Literal(next), Some(Token::Literal(last))) = (&token, merged.last_mut()) {
            last.push_str(next);
            continue;
        }
        merged.push(token);
    }
    *tokens = merged;
}
