//! failure reporters
//!
//! a reporter is the test-failure channel handed to every stub. stubs never
//! panic on their own; the reporter decides what a failure means:
//! - recorder: collect failures for assertions, fail the test on drop if
//!   nobody looked at them
//! - panicking: hard stop at the call site
//! - tracing: log and carry on

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, warn};

use crate::Error;

/// sink for failures raised by unimplemented slots
pub trait ReportFailure: Send + Sync {
    fn report(&self, failure: Error);
}

/// shared handle to a failure sink, cheap to clone into every stub
#[derive(Clone)]
pub struct Reporter(Arc<dyn ReportFailure>);

impl Reporter {
    pub fn new(sink: impl ReportFailure + 'static) -> Self {
        Self(Arc::new(sink))
    }

    /// panics with the failure message
    pub fn panicking() -> Self {
        Self::new(Panicking)
    }

    /// logs the failure at error level and continues
    pub fn tracing() -> Self {
        Self::new(Tracing)
    }

    pub fn report(&self, failure: Error) {
        self.0.report(failure)
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

struct Panicking;

impl ReportFailure for Panicking {
    fn report(&self, failure: Error) {
        panic!("{}", failure);
    }
}

struct Tracing;

impl ReportFailure for Tracing {
    fn report(&self, failure: Error) {
        error!(%failure, "capability failure");
    }
}

#[derive(Default)]
struct Log {
    failures: Mutex<Vec<Error>>,
}

impl ReportFailure for Log {
    fn report(&self, failure: Error) {
        warn!(%failure, "recorded capability failure");
        self.failures.lock().push(failure);
    }
}

impl Drop for Log {
    // reached once the recorder and every reporter clone are gone
    fn drop(&mut self) {
        let pending = std::mem::take(self.failures.get_mut());
        if !pending.is_empty() && !std::thread::panicking() {
            panic!("{}", unacknowledged("after the recorder was dropped", &pending));
        }
    }
}

fn unacknowledged(context: &str, pending: &[Error]) -> String {
    let lines: Vec<String> = pending.iter().map(|f| format!("  {}", f)).collect();
    format!(
        "{} unacknowledged capability failure(s) {}:\n{}",
        pending.len(),
        context,
        lines.join("\n")
    )
}

/// records failures so a test can assert on them
///
/// dropping a recorder that still holds failures panics, so an unconfigured
/// call nobody asserted on still fails the test. call [`Recorder::take`] to
/// acknowledge expected failures.
///
/// reporters handed out by [`Recorder::reporter`] keep the log alive. a
/// failure reported after the recorder itself is gone, say from a slot clone
/// held by a spawned task, panics wherever the last reporter clone is dropped.
pub struct Recorder {
    log: Arc<Log>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Log::default()),
        }
    }

    /// reporter feeding this recorder
    pub fn reporter(&self) -> Reporter {
        Reporter(self.log.clone())
    }

    /// snapshot of recorded failures, in report order
    pub fn failures(&self) -> Vec<Error> {
        self.log.failures.lock().clone()
    }

    /// operation labels of recorded failures, in report order
    pub fn operations(&self) -> Vec<&'static str> {
        self.log
            .failures
            .lock()
            .iter()
            .filter_map(Error::operation)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.log.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// drain recorded failures, marking them as seen
    pub fn take(&self) -> Vec<Error> {
        std::mem::take(&mut *self.log.failures.lock())
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("failures", &*self.log.failures.lock())
            .finish()
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let pending = self.take();
        if !pending.is_empty() {
            panic!("{}", unacknowledged("at recorder drop", &pending));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured(operation: &'static str) -> Error {
        Error::UnconfiguredOperationInvoked {
            operation,
            file: file!(),
            line: line!(),
            column: 1,
        }
    }

    #[test]
    fn test_recorder_collects_in_order() {
        let recorder = Recorder::new();
        let reporter = recorder.reporter();

        reporter.report(unconfigured("a"));
        reporter.clone().report(unconfigured("b"));

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.operations(), vec!["a", "b"]);
        assert_eq!(recorder.take().len(), 2);
        assert!(recorder.is_empty());
    }

    #[test]
    #[should_panic(expected = "1 unacknowledged capability failure(s) at recorder drop")]
    fn test_recorder_panics_on_unacknowledged_drop() {
        let recorder = Recorder::new();
        recorder.reporter().report(unconfigured("LocationManager::heading"));
    }

    #[test]
    #[should_panic(expected = "after the recorder was dropped")]
    fn test_failure_after_recorder_drop_is_not_lost() {
        let recorder = Recorder::new();
        let reporter = recorder.reporter();
        drop(recorder);

        reporter.report(unconfigured("late"));
        drop(reporter);
    }

    #[test]
    fn test_reporter_outliving_clean_recorder() {
        let recorder = Recorder::new();
        let reporter = recorder.reporter();
        drop(recorder);
        drop(reporter);
    }

    #[test]
    #[should_panic(expected = "unimplemented: boom")]
    fn test_panicking_reporter() {
        Reporter::panicking().report(unconfigured("boom"));
    }

    #[test]
    fn test_tracing_reporter_continues() {
        Reporter::tracing().report(unconfigured("quiet"));
    }
}
