//! Wall-clock timing of catalog operations.
//!
//! These helpers only observe: the timed closure's result is handed back
//! untouched and nothing about the catalog is changed by measuring it.
//!
//! # Examples
//!
//! ```
//! use bookshelf::{Book, Catalog, HashMapCatalog};
//! use bookshelf::timing::benchmark;
//!
//! let catalog = HashMapCatalog::new(&[Book::without_author("Dune")]);
//! let report = benchmark("find", 100, || catalog.find("Dune").is_some());
//!
//! assert_eq!(report.runs, 100);
//! assert!(report.min <= report.average() && report.average() <= report.max);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

/// Run `f` once and return its result along with the elapsed time.
pub fn time_execution<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Summary of repeated timings of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BenchmarkReport {
    /// Number of timed runs.
    pub runs: u32,
    /// Fastest run.
    pub min: Duration,
    /// Slowest run.
    pub max: Duration,
    /// Sum of all runs.
    pub total: Duration,
}

impl BenchmarkReport {
    /// Fold one more timing into the report.
    pub fn record(&mut self, elapsed: Duration) {
        if self.runs == 0 {
            self.min = elapsed;
            self.max = elapsed;
        } else {
            self.min = self.min.min(elapsed);
            self.max = self.max.max(elapsed);
        }
        self.total += elapsed;
        self.runs += 1;
    }

    /// Mean run time, or zero if nothing was recorded.
    #[must_use]
    pub fn average(&self) -> Duration {
        if self.runs == 0 {
            Duration::ZERO
        } else {
            self.total / self.runs
        }
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "executed {} times:", self.runs)?;
        writeln!(f, "min: {:.6} seconds", self.min.as_secs_f64())?;
        writeln!(f, "avg: {:.6} seconds", self.average().as_secs_f64())?;
        writeln!(f, "max: {:.6} seconds", self.max.as_secs_f64())?;
        write!(f, "total: {:.6} seconds", self.total.as_secs_f64())
    }
}

/// Run `f` `runs` times and summarise the timings.
///
/// The result of each call is discarded; use [`time_execution`] when the
/// result is needed.
pub fn benchmark<T, F>(name: &str, runs: u32, mut f: F) -> BenchmarkReport
where
    F: FnMut() -> T,
{
    let mut report = BenchmarkReport::default();
    for _ in 0..runs {
        let (_, elapsed) = time_execution(&mut f);
        report.record(elapsed);
    }
    info!(
        name,
        runs,
        min_secs = report.min.as_secs_f64(),
        avg_secs = report.average().as_secs_f64(),
        max_secs = report.max.as_secs_f64(),
        "benchmark finished"
    );
    report
}
