//! Общий модуль для CLI
//!
//! Содержит функциональность, используемую бинарником:
//! - Инициализация логирования
//! - Форматирование итоговой сводки

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::core::walker::WalkSummary;

/// Инициализирует систему логирования с настройками по умолчанию
///
/// The minimum severity is fixed once at startup: `DEBUG` when verbose,
/// `INFO` otherwise. It is never changed afterwards; `RUST_LOG` directives
/// still take precedence through the env filter.
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}

/// Выводит итоговую сводку по каталогу
pub fn print_summary(summary: &WalkSummary) {
    let status = if summary.failures == 0 {
        "✓".green()
    } else {
        "!".yellow()
    };
    println!(
        "{} {} file(s) processed, {} BOM(s) removed, {} failure(s)",
        status, summary.files_processed, summary.stripped, summary.failures
    );
}
