//! Extracts every log line for one calendar date from a large, date-sorted
//! log file.
//!
//! The log is scanned once to build a side-car index mapping each date to
//! the byte offset of its first line. Queries look the date up in that index,
//! seek straight to the offset and read the contiguous run of matching lines.
//!
//! The index is never invalidated: if the log changes after the index was
//! written, rebuild it explicitly.

pub mod config;
pub mod error;
pub mod extractor;
pub mod index;
pub mod indexer;
pub mod output;
pub mod query;
pub mod session;

pub use config::Config;
pub use error::{LogExtractError, Result};
pub use extractor::extract;
pub use index::{find_offset, load_index, IndexEntry};
pub use indexer::build_index;
pub use output::write_output;
pub use query::run_query;
pub use session::QuerySession;

/// Installs the stderr `tracing` subscriber used by the binaries.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "log_extract=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
