use tasksmith_core::Stage;
use tracing::info;

/// Receives one-way progress notifications from the pipeline.
pub trait ProgressSink {
    fn notify(&self, stage: Stage, detail: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(Stage, &str),
{
    fn notify(&self, stage: Stage, detail: &str) {
        self(stage, detail)
    }
}

/// Logs every notification at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn notify(&self, stage: Stage, detail: &str) {
        info!(stage = %stage, "[Progress] {detail}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn notify(&self, _stage: Stage, _detail: &str) {}
}
