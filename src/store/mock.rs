//! Test doubles for the persistence capabilities.
//!
//! [`MockProbe`] answers availability checks with a fixed value and counts
//! how often it was consulted, so tests can assert both the dispatch decision
//! and that the processor actually asked.

use crate::store::AvailabilityProbe;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An availability probe with a canned answer.
///
/// # Example
/// ```ignore
/// let probe = Arc::new(MockProbe::new(false));
/// let processor = OrderProcessor::new(probe.clone(), config);
/// processor.process_order(&order).await?;
/// assert_eq!(probe.calls(), 1);
/// ```
#[derive(Debug)]
pub struct MockProbe {
    available: bool,
    calls: AtomicUsize,
}

impl MockProbe {
    /// Creates a probe that always answers `available`.
    pub fn new(available: bool) -> Self {
        Self {
            available,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the probe has been consulted.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AvailabilityProbe for MockProbe {
    async fn is_database_available(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.available
    }
}
