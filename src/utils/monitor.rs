#[cfg(feature = "cli")]
use std::sync::Mutex;
use std::time::Duration;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// A single resource reading taken at the end of a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseSample {
    pub phase: String,
    pub memory_mb: u64,
    pub cpu_usage: f32,
    pub elapsed: Duration,
}

#[cfg(feature = "cli")]
struct Sampler {
    system: System,
    pid: Pid,
}

#[cfg(feature = "cli")]
pub struct SystemMonitor {
    sampler: Option<Mutex<Sampler>>,
    started: Instant,
    samples: Mutex<Vec<PhaseSample>>,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let sampler = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => {
                    let mut system = System::new();
                    system.refresh_all();
                    Some(Mutex::new(Sampler { system, pid }))
                }
                Err(e) => {
                    tracing::warn!("⚠️ Resource monitoring unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            sampler,
            started: Instant::now(),
            samples: Mutex::new(Vec::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sampler.is_some()
    }

    /// 記錄某個階段結束時的資源用量
    pub fn record_phase(&self, phase: &str) -> Option<PhaseSample> {
        let mut sampler = self.sampler.as_ref()?.lock().ok()?;
        let pid = sampler.pid;
        sampler.system.refresh_all();
        let process = sampler.system.process(pid)?;

        let sample = PhaseSample {
            phase: phase.to_string(),
            memory_mb: process.memory() / 1024 / 1024,
            cpu_usage: process.cpu_usage(),
            elapsed: self.started.elapsed(),
        };

        tracing::info!(
            "📊 {} - CPU: {:.1}%, Memory: {}MB, Time: {:?}",
            sample.phase,
            sample.cpu_usage,
            sample.memory_mb,
            sample.elapsed
        );

        if let Ok(mut samples) = self.samples.lock() {
            samples.push(sample.clone());
        }
        Some(sample)
    }

    pub fn peak_memory_mb(&self) -> u64 {
        self.samples
            .lock()
            .map(|samples| samples.iter().map(|s| s.memory_mb).max().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn log_final_stats(&self) {
        if self.is_enabled() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                self.started.elapsed(),
                self.peak_memory_mb()
            );
        }
    }
}

// 非 CLI 環境下的空實現
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn record_phase(&self, _phase: &str) -> Option<PhaseSample> {
        None
    }

    pub fn peak_memory_mb(&self) -> u64 {
        0
    }

    pub fn log_final_stats(&self) {}
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
