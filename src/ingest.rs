//! Analytics ingest: decode events, queue them, and let a pool of workers
//! parse each operation body.
//!
//! Events arrive as JSON lines. [`ingest_lines`] feeds them through a
//! [`WorkerPool`] and folds the per-event reports into an [`IngestSummary`].

pub mod event;
pub mod pool;

pub use event::{AnalyticsEvent, EventReport};
pub use pool::{process_event, PoolConfig, WorkerPool};

use crate::field_counter::FieldUsage;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event queue is closed")]
    Closed,
}

/// Totals over one ingest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Events decoded and handed to the pool
    pub events: usize,
    /// Events whose operation body parsed
    pub parsed: usize,
    /// Events whose operation body failed to parse
    pub failed: usize,
    /// Lines that were not valid event JSON
    pub rejected: usize,
    /// Field usage summed over all events
    pub usage: FieldUsage,
}

impl IngestSummary {
    pub fn record(&mut self, report: &EventReport) {
        if report.is_parsed() {
            self.parsed += 1;
        } else {
            self.failed += 1;
        }
        self.usage.merge(&report.usage);
    }
}

/// Reads JSON-lines events from `reader` and runs them through a pool.
///
/// Blank lines are skipped. Lines that are not UTF-8 or not valid events are
/// logged and counted as rejected. A read failure stops reading; events
/// already queued are processed before the error is returned.
pub fn ingest_lines<R: BufRead>(
    mut reader: R,
    config: PoolConfig,
) -> Result<IngestSummary, IngestError> {
    let pool = WorkerPool::new(config);
    let mut summary = IngestSummary::default();
    let mut buf = Vec::new();
    let mut n = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => n += 1,
            Err(e) => {
                let reports = pool.shutdown();
                log::warn!(
                    "read failed after line {} ({} event(s) processed): {}",
                    n,
                    reports.len(),
                    e
                );
                return Err(e.into());
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("line {}: not UTF-8: {}", n, e);
                summary.rejected += 1;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match AnalyticsEvent::from_json(line) {
            Ok(event) => {
                pool.submit(event)?;
                summary.events += 1;
            }
            Err(e) => {
                log::warn!("line {}: {}", n, e);
                summary.rejected += 1;
            }
        }
    }

    for report in pool.shutdown() {
        summary.record(&report);
    }
    Ok(summary)
}
