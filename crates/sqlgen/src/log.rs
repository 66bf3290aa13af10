//! `tracing` output for generated statements.
//!
//! Enable via the crate feature `tracing` (on by default). One event is
//! emitted per generated statement at target `sqlgen.sql`, after placeholder
//! expansion, so the logged SQL is what the driver receives.

use crate::config::GeneratorConfig;
use crate::named::BoundQuery;

#[cfg(feature = "tracing")]
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

#[cfg(feature = "tracing")]
pub(crate) fn log_statement(config: &GeneratorConfig, query: &BoundQuery) {
    use tracing::Level;

    /// Dispatch a tracing event at a runtime-determined level.
    macro_rules! emit_at_level {
        ($level:expr, $($field:tt)*) => {
            match $level {
                Level::ERROR => tracing::error!($($field)*),
                Level::WARN  => tracing::warn!($($field)*),
                Level::INFO  => tracing::info!($($field)*),
                Level::DEBUG => tracing::debug!($($field)*),
                Level::TRACE => tracing::trace!($($field)*),
            }
        };
    }

    if !config.log_sql {
        return;
    }

    let sql = match config.max_sql_length {
        Some(max) if query.sql.len() > max => {
            format!("{}...", truncate_sql_bytes(&query.sql, max))
        }
        _ => query.sql.clone(),
    };

    let level: Level = config.log_level.into();
    emit_at_level!(
        level,
        target: "sqlgen.sql",
        kind = ?query.kind,
        table = %query.table,
        param_count = query.args.len(),
        sql = %sql,
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_statement(_config: &GeneratorConfig, _query: &BoundQuery) {}
