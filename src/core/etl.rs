use crate::core::{FilterOutcome, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct EtlSummary {
    pub output_path: String,
    pub rows_considered: usize,
    pub rows_matched: usize,
    pub rows_skipped_short: usize,
    pub elapsed: Duration,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Extract and transform only. Nothing is written.
    pub async fn preview(&self) -> Result<FilterOutcome> {
        let records = self.pipeline.extract().await?;
        self.monitor.record_phase("Extract");
        let outcome = self.pipeline.transform(records).await?;
        self.monitor.record_phase("Transform");
        Ok(outcome)
    }

    /// Runs the full pipeline and hands back the outcome alongside the summary.
    pub async fn run_with_outcome(&self) -> Result<(EtlSummary, FilterOutcome)> {
        let started = Instant::now();
        tracing::info!("Starting ETL process");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} data rows", records.len());
        self.monitor.record_phase("Extract");

        // Transform
        let outcome = self.pipeline.transform(records).await?;
        tracing::info!(
            "Matched {} of {} rows",
            outcome.rows_matched(),
            outcome.rows_considered
        );
        self.monitor.record_phase("Transform");

        // Load
        let output_path = self.pipeline.load(&outcome).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.record_phase("Load");
        self.monitor.log_final_stats();

        let summary = EtlSummary {
            output_path,
            rows_considered: outcome.rows_considered,
            rows_matched: outcome.rows_matched(),
            rows_skipped_short: outcome.rows_skipped_short,
            elapsed: started.elapsed(),
        };
        Ok((summary, outcome))
    }

    pub async fn run(&self) -> Result<EtlSummary> {
        self.run_with_outcome().await.map(|(summary, _)| summary)
    }
}
