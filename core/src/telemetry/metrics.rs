use std::sync::Mutex;

/// Counts estimation outcomes across the lifetime of a stage.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    estimated: usize,
    degenerate: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                estimated: 0,
                degenerate: 0,
            }),
        }
    }

    pub fn record_estimated(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.estimated += 1;
        }
    }

    pub fn record_degenerate(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.degenerate += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.estimated, metrics.degenerate)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
