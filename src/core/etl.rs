use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn monitor(&self) -> &RunMonitor {
        &self.monitor
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting contact discovery run");

        let entries = self.pipeline.extract().await?;
        self.monitor.mark_phase("extract");

        let transformed = self.pipeline.transform(entries).await?;
        tracing::info!(
            "Found {} contacts across {} entries",
            transformed.contacts.len(),
            transformed.entries_processed
        );
        self.monitor.mark_phase("transform");

        let output_path = self.pipeline.load(transformed).await?;
        self.monitor.mark_phase("load");
        self.monitor.log_final_stats();

        tracing::info!("📁 Output saved to: {}", output_path);
        Ok(output_path)
    }
}
