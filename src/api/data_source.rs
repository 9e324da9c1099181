use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Asynchronous supplier of one series worth of values.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get_data(&self) -> ChartResult<Vec<f64>>;
}

/// Stand-in backend that answers from canned datasets.
///
/// Each call returns the next dataset, wrapping around after the last one,
/// optionally after a simulated latency.
#[derive(Debug)]
pub struct MockDataSource {
    datasets: Vec<Vec<f64>>,
    latency: Duration,
    calls: AtomicUsize,
}

impl MockDataSource {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self::cycling(vec![values])
    }

    #[must_use]
    pub fn cycling(datasets: Vec<Vec<f64>>) -> Self {
        Self {
            datasets,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::cycling(vec![
            vec![120.0, 200.0, 150.0, 80.0, 70.0, 110.0, 130.0],
            vec![820.0, 932.0, 901.0, 934.0, 1290.0, 1330.0, 1320.0],
        ])
        .with_latency(Duration::from_millis(300))
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn get_data(&self) -> ChartResult<Vec<f64>> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.datasets.is_empty() {
            return Err(ChartError::DataSource(
                "mock data source has no datasets".to_owned(),
            ));
        }
        let values = self.datasets[call % self.datasets.len()].clone();
        debug!(call, points = values.len(), "mock data served");
        Ok(values)
    }
}
