use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock time spent in each pipeline stage, in execution order.
#[derive(Debug, Clone, Default)]
pub struct PipelineTimings {
    stages: Vec<(String, Duration)>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `stage` and records its wall-clock time under `name`.
    pub fn time<T>(&mut self, name: &str, stage: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let value = stage();
        self.stages.push((name.to_string(), started.elapsed()));
        value
    }

    /// Appends every stage of `other` after the ones recorded here.
    pub fn extend(&mut self, other: &PipelineTimings) {
        self.stages.extend(other.stages.iter().cloned());
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, duration)| *duration).sum()
    }

    /// Summed time of every stage recorded under `name`.
    pub fn stage(&self, name: &str) -> Option<Duration> {
        let mut matching = self.stages.iter().filter(|(stage, _)| stage == name).peekable();
        matching.peek()?;
        Some(matching.map(|(_, duration)| *duration).sum())
    }
}

impl fmt::Display for PipelineTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = self.total().as_secs_f64() * 1000.0;
        writeln!(f, "{:<24} {:>11} {:>6}", "stage", "ms", "share")?;
        for (name, duration) in &self.stages {
            let ms = duration.as_secs_f64() * 1000.0;
            let share = if total_ms > 0.0 { ms / total_ms * 100.0 } else { 0.0 };
            writeln!(f, "{:<24} {:>11.3} {:>5.1}%", name, ms, share)?;
        }
        writeln!(f, "{:<24} {:>11.3}", "total", total_ms)
    }
}
