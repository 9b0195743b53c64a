use crate::field_counter::count_fields;
use crate::ingest::{AnalyticsEvent, EventReport, IngestError};
use crate::parser::parse;
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Sizing for a [`WorkerPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of worker threads (at least one is always started)
    pub workers: usize,
    /// Events that may wait in the queue before `submit` blocks
    pub queue_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            workers: 5,
            queue_capacity: 100,
        }
    }
}

/// Fixed set of threads draining a bounded event queue.
///
/// Every worker parses with its own parser; the only shared state is the
/// receiving end of the queue.
pub struct WorkerPool {
    sender: Option<SyncSender<AnalyticsEvent>>,
    reports: Receiver<EventReport>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(config: PoolConfig) -> Self {
        let (sender, receiver) = mpsc::sync_channel(config.queue_capacity);
        let (report_tx, reports) = mpsc::channel();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (1..=config.workers.max(1))
            .map(|id| {
                let receiver = Arc::clone(&receiver);
                let report_tx = report_tx.clone();
                thread::spawn(move || run_worker(id, receiver, report_tx))
            })
            .collect();

        log::debug!(
            "started {} worker(s), queue capacity {}",
            config.workers.max(1),
            config.queue_capacity
        );

        WorkerPool {
            sender: Some(sender),
            reports,
            workers,
        }
    }

    /// Queues an event, blocking while the queue is full.
    pub fn submit(&self, event: AnalyticsEvent) -> Result<(), IngestError> {
        let sender = self.sender.as_ref().ok_or(IngestError::Closed)?;
        sender.send(event).map_err(|_| IngestError::Closed)
    }

    /// Closes the queue, waits for every queued event to be processed and
    /// returns the reports in completion order.
    pub fn shutdown(mut self) -> Vec<EventReport> {
        self.close();
        self.reports.try_iter().collect()
    }

    fn close(&mut self) {
        self.sender.take();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::warn!("worker thread panicked");
            }
        }
    }
}

impl Drop for WorkerPool {
    /// Queued events are still processed; their reports are discarded.
    fn drop(&mut self) {
        if self.workers.is_empty() {
            return;
        }
        self.close();
        let discarded = self.reports.try_iter().count();
        if discarded > 0 {
            log::warn!("worker pool dropped, discarding {} report(s)", discarded);
        }
    }
}

fn run_worker(
    id: usize,
    receiver: Arc<Mutex<Receiver<AnalyticsEvent>>>,
    reports: Sender<EventReport>,
) {
    loop {
        let event = match receiver.lock() {
            Ok(rx) => rx.recv(),
            Err(_) => break,
        };
        let Ok(event) = event else {
            break;
        };

        let report = process_event(id, event);
        if reports.send(report).is_err() {
            break;
        }
    }
    log::debug!("worker {} stopped", id);
}

/// Counts fields in and parses one event's operation body.
pub fn process_event(worker: usize, event: AnalyticsEvent) -> EventReport {
    log::debug!("worker {} processing event at {}", worker, event.timestamp);

    let usage = count_fields(&event.operation_body);
    let parsed = parse(&event.operation_body);
    if let Err(e) = &parsed {
        log::warn!(
            "worker {}: operation `{}` failed to parse: {}",
            worker,
            event.operation_name,
            e
        );
    }

    EventReport {
        worker,
        timestamp: event.timestamp,
        operation_name: event.operation_name,
        usage,
        parsed,
    }
}
