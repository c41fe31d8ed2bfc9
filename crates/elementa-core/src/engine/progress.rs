//! Progress events emitted by long-running tasks and workflows.
//!
//! The library never renders progress itself; callers install a callback and
//! translate events into whatever display they use.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

/// Callback receiving progress events. Must be callable from worker threads.
pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    /// Reporter that discards every event.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` between a `PhaseStart` and a `PhaseFinish` event.
    pub fn phase<T>(&self, name: &'static str, f: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { name });
        let result = f();
        self.report(Progress::PhaseFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn silent_reporter_accepts_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("ignored".to_string()));
    }

    #[test]
    fn phase_wraps_work_in_start_and_finish_events() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        let value = reporter.phase("Generation", || {
            reporter.report(Progress::TaskIncrement);
            42
        });

        assert_eq!(value, 42);
        drop(reporter);
        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::PhaseStart { name: "Generation" },
                Progress::TaskIncrement,
                Progress::PhaseFinish,
            ]
        );
    }
}
