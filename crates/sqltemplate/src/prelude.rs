//! Convenient imports for typical `sqltemplate` usage.
//!
//! ```ignore
//! use sqltemplate::prelude::*;
//! ```

pub use crate::{
    Arg, Compiler, CompilerConfig, Escape, MysqlEscaper, TemplateError, TemplateResult, Template,
    args, skip,
};
