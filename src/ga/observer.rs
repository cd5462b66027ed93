//! Progress observers.
//!
//! The engine reports to a [`GenerationObserver`] after every generation
//! and once at the end of a run. Observers are a side channel: nothing
//! they do feeds back into the search.

use std::time::Duration;

/// Snapshot passed to [`GenerationObserver::on_generation`].
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// 1-based generation index.
    pub generation: usize,
    /// Cost of the best tour tracked so far.
    pub best_cost: f64,
    /// The best tour tracked so far.
    pub best_tour: &'a [usize],
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

/// Final summary passed to [`GenerationObserver::on_finish`].
#[derive(Debug, Clone, Copy)]
pub struct RunSummary<'a> {
    pub generations: usize,
    pub best_cost: f64,
    pub best_tour: &'a [usize],
    pub elapsed: Duration,
}

/// Receives progress notifications from a running engine.
pub trait GenerationObserver {
    /// Called at the end of each generation.
    fn on_generation(&mut self, report: &GenerationReport<'_>);

    /// Called once when the run terminates. The default is a no-op.
    fn on_finish(&mut self, _summary: &RunSummary<'_>) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _report: &GenerationReport<'_>) {}
}

/// Logs progress through the [`log`] facade.
///
/// Emits an `info` line every `every` generations and a final summary.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    every: usize,
}

impl LogObserver {
    /// Logs every `every` generations; 0 logs only the final summary.
    pub fn new(every: usize) -> Self {
        Self { every }
    }

    /// Whether `generation` gets a progress line.
    pub fn reports(&self, generation: usize) -> bool {
        self.every > 0 && generation % self.every == 0
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(10)
    }
}

impl GenerationObserver for LogObserver {
    fn on_generation(&mut self, report: &GenerationReport<'_>) {
        if self.reports(report.generation) {
            log::info!(
                "generation {}: best cost {:.2} ({:.2?})",
                report.generation,
                report.best_cost,
                report.elapsed
            );
        }
    }

    fn on_finish(&mut self, summary: &RunSummary<'_>) {
        log::info!(
            "finished {} generations: best cost {:.2} in {:.2?}",
            summary.generations,
            summary.best_cost,
            summary.elapsed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_observer_interval() {
        let observer = LogObserver::new(10);
        let reported: Vec<usize> = (1..=35).filter(|&g| observer.reports(g)).collect();
        assert_eq!(reported, vec![10, 20, 30]);

        let every = LogObserver::new(1);
        assert!((1..=5).all(|g| every.reports(g)));
        assert!(LogObserver::default().reports(10));
    }

    #[test]
    fn test_log_observer_zero_interval_only_summarizes() {
        let mut observer = LogObserver::new(0);
        assert!((0..100).all(|g| !observer.reports(g)));

        let tour = [0, 1, 2];
        observer.on_generation(&GenerationReport {
            generation: 5,
            best_cost: 1.0,
            best_tour: &tour,
            elapsed: Duration::from_millis(3),
        });
        observer.on_finish(&RunSummary {
            generations: 5,
            best_cost: 1.0,
            best_tour: &tour,
            elapsed: Duration::from_millis(3),
        });
    }
}
