//! `tracing` events for compilations.
//!
//! Enable via the crate feature: `sqltemplate = { features = ["tracing"] }`.
//! Events are emitted at `DEBUG` on target `sqltemplate.compile`.

use crate::config::CompilerConfig;
use crate::error::TemplateError;
use crate::template::Template;

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn display_sql(config: &CompilerConfig, sql: &str) -> String {
    match config.max_logged_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

pub(crate) fn compiled(
    config: &CompilerConfig,
    template: &Template,
    sql: &str,
    skipped_blocks: usize,
) {
    tracing::debug!(
        target: "sqltemplate.compile",
        placeholders = template.placeholder_count(),
        blocks = template.block_count(),
        skipped_blocks,
        sql = %display_sql(config, sql),
        "compiled sql template"
    );
}

pub(crate) fn failed(config: &CompilerConfig, template: &Template, err: &TemplateError) {
    tracing::debug!(
        target: "sqltemplate.compile",
        template = %display_sql(config, template.source()),
        error = %err,
        "sql template compilation failed"
    );
}
