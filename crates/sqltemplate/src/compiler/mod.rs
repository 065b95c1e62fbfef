//! Template compiler.
//!
//! Compilation runs in two passes over a parsed [`Template`]:
//!
//! 1. substitution: each placeholder consumes the next argument and is rendered,
//!    or recorded as skipped when the argument is [`Arg::Skip`]
//! 2. elision: blocks holding a skipped placeholder are dropped with their braces,
//!    other blocks lose only their braces; a skipped placeholder outside any block
//!    is written as [`SKIP_MARKER`]
//!
//! # Example
//!
//! ```ignore
//! use sqltemplate::{Compiler, MysqlEscaper, args, skip};
//!
//! let compiler = Compiler::new(MysqlEscaper);
//! let sql = compiler.compile(
//!     "SELECT name FROM users WHERE id = ?d {AND block = ?d}",
//!     &args![1, skip()],
//! )?;
//! assert_eq!(sql, "SELECT name FROM users WHERE id = 1 ");
//! ```


use std::borrow::Cow;

use crate::arg::{Arg, SKIP_MARKER};
use crate::config::CompilerConfig;
use crate::error::{TemplateError, TemplateResult};
use crate::escape::{Escape, MysqlEscaper};
use crate::render::{Renderer, Slot};
use crate::template::{Template, Token};

/// Compiles query templates against an injected escaper.
///
/// `Compiler` holds no mutable state; share one instance across threads.
#[derive(Debug, Clone)]
pub struct Compiler<E = MysqlEscaper> {
    escaper: E,
    config: CompilerConfig,
}

/// Output of the substitution pass.
#[derive(Debug)]
enum Piece<'t> {
    Text(Cow<'t, str>),
    /// A placeholder whose argument requested a skip.
    Skipped,
    BlockStart,
    BlockEnd,
}

impl Default for Compiler<MysqlEscaper> {
    fn default() -> Self {
        Self::new(MysqlEscaper)
    }
}

impl<E: Escape> Compiler<E> {
    /// Create a compiler with the default configuration.
    pub fn new(escaper: E) -> Self {
        Self::with_config(escaper, CompilerConfig::default())
    }

    pub fn with_config(escaper: E, config: CompilerConfig) -> Self {
        Self { escaper, config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn escaper(&self) -> &E {
        &self.escaper
    }

    /// The skip marker; pass it to drop the block around its placeholder.
    pub fn skip_value(&self) -> Arg {
        Arg::Skip
    }

    /// Compile a template string.
    ///
    /// Fails with [`TemplateError::Mismatch`] when the placeholder count differs
    /// from `args.len()`, and with [`TemplateError::UnsupportedType`] when an argument
    /// cannot be rendered under its tag.
    pub fn compile(&self, template: &str, args: &[Arg]) -> TemplateResult<String> {
        self.compile_template(&Template::parse(template), args)
    }

    /// Compile a pre-parsed template. Same rules as [`Compiler::compile`].
    pub fn compile_template(&self, template: &Template, args: &[Arg]) -> TemplateResult<String> {
        let result = self
            .substitute(template, args)
            .map(|pieces| elide(&pieces));

        match result {
            Ok((sql, _skipped_blocks)) => {
                #[cfg(feature = "tracing")]
                crate::trace::compiled(&self.config, template, &sql, _skipped_blocks);
                Ok(sql)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                crate::trace::failed(&self.config, template, &err);
                Err(err)
            }
        }
    }

    /// Pass 1: render every placeholder.
    fn substitute<'t>(
        &self,
        template: &'t Template,
        args: &[Arg],
    ) -> TemplateResult<Vec<Piece<'t>>> {
        let placeholders = template.placeholder_count();
        if placeholders != args.len() {
            return Err(TemplateError::Mismatch {
                placeholders,
                args: args.len(),
            });
        }

        let renderer = Renderer::new(&self.escaper, self.config.ident_quote.as_char());
        let mut args = args.iter();
        let mut ordinal = 0;
        let mut pieces = Vec::with_capacity(template.tokens().len());

        for token in template.tokens() {
            let piece = match token {
                Token::Literal(text) => Piece::Text(Cow::Borrowed(text.as_str())),
                Token::BlockStart => Piece::BlockStart,
                Token::BlockEnd => Piece::BlockEnd,
                Token::Placeholder(kind) => {
                    ordinal += 1;
                    let Some(arg) = args.next() else {
                        return Err(TemplateError::Mismatch {
                            placeholders,
                            args: ordinal - 1,
                        });
                    };
                    let slot = Slot {
                        ordinal,
                        kind: *kind,
                    };
                    match renderer.render(slot, arg)? {
                        Some(text) => Piece::Text(Cow::Owned(text)),
                        None => Piece::Skipped,
                    }
                }
            };
            pieces.push(piece);
        }
        Ok(pieces)
    }
}

/// Pass 2: drop blocks containing a skipped placeholder, strip the remaining braces.
///
/// Returns the SQL and the number of dropped blocks.
fn elide(pieces: &[Piece<'_>]) -> (String, usize) {
    let capacity = pieces
        .iter()
        .map(|p| match p {
            Piece::Text(t) => t.len(),
            _ => 0,
        })
        .sum();
    let mut out = String::with_capacity(capacity);
    let mut skipped_blocks = 0;
    // Start index into `out` and skip flag of the open block.
    let mut block: Option<(usize, bool)> = None;

    for piece in pieces {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Skipped => match block.as_mut() {
                Some((_, skipped)) => *skipped = true,
                None => out.push_str(SKIP_MARKER),
            },
            Piece::BlockStart => block = Some((out.len(), false)),
            Piece::BlockEnd => {
                if let Some((start, true)) = block.take() {
                    out.truncate(start);
                    skipped_blocks += 1;
                }
            }
        }
    }
    (out, skipped_blocks)
}
