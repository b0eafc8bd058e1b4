use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

pub struct Metrics {
    // Counters
    summaries_requested: AtomicUsize,
    summaries_failed: AtomicUsize,
    graphs_built: AtomicUsize,
    cache_hits: AtomicUsize,

    // Timing (in microseconds)
    total_summary_time_us: AtomicU64,
    total_graph_time_us: AtomicU64,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            summaries_requested: AtomicUsize::new(0),
            summaries_failed: AtomicUsize::new(0),
            graphs_built: AtomicUsize::new(0),
            cache_hits: AtomicUsize::new(0),
            total_summary_time_us: AtomicU64::new(0),
            total_graph_time_us: AtomicU64::new(0),
        })
    }

    pub fn record_summary(&self, duration: std::time::Duration, success: bool) {
        self.summaries_requested.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.summaries_failed.fetch_add(1, Ordering::Relaxed);
        }
        self.total_summary_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_graph(&self, duration: std::time::Duration) {
        self.graphs_built.fetch_add(1, Ordering::Relaxed);
        self.total_graph_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let summaries = self.summaries_requested.load(Ordering::Relaxed);
        let graphs = self.graphs_built.load(Ordering::Relaxed);
        MetricsSnapshot {
            summaries_requested: summaries,
            summaries_failed: self.summaries_failed.load(Ordering::Relaxed),
            graphs_built: graphs,
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            avg_summary_time_ms: avg_ms(&self.total_summary_time_us, summaries),
            avg_graph_time_ms: avg_ms(&self.total_graph_time_us, graphs),
        }
    }
}

fn avg_ms(total_us: &AtomicU64, count: usize) -> f64 {
    let total = total_us.load(Ordering::Relaxed) as f64;
    if count > 0 {
        total / count as f64 / 1000.0
    } else {
        0.0
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub summaries_requested: usize,
    pub summaries_failed: usize,
    pub graphs_built: usize,
    pub cache_hits: usize,
    pub avg_summary_time_ms: f64,
    pub avg_graph_time_ms: f64,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn snapshot_reflects_recordings() {
        let metrics = Metrics::new();
        metrics.record_summary(Duration::from_millis(10), true);
        metrics.record_summary(Duration::from_millis(20), false);
        metrics.record_graph(Duration::from_millis(5));
        metrics.record_cache_hit();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.summaries_requested, 2);
        assert_eq!(snapshot.summaries_failed, 1);
        assert_eq!(snapshot.graphs_built, 1);
        assert_eq!(snapshot.cache_hits, 1);
        assert!(snapshot.avg_summary_time_ms >= 10.0);
    }
}
