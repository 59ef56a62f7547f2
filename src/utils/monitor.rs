use std::sync::Mutex;
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// 單一階段的耗時與記憶體快照
#[derive(Debug, Clone)]
pub struct PhaseStats {
    pub phase: String,
    pub elapsed: Duration,
    pub memory_mb: Option<u64>,
}

/// Records how long each pipeline phase took, plus process memory when
/// built with the `cli` feature.
pub struct RunMonitor {
    enabled: bool,
    started: Instant,
    last_mark: Mutex<Instant>,
    phases: Mutex<Vec<PhaseStats>>,
    #[cfg(feature = "cli")]
    system: Mutex<System>,
    #[cfg(feature = "cli")]
    pid: Option<Pid>,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            enabled,
            started: now,
            last_mark: Mutex::new(now),
            phases: Mutex::new(Vec::new()),
            #[cfg(feature = "cli")]
            system: Mutex::new(System::new()),
            #[cfg(feature = "cli")]
            pid: sysinfo::get_current_pid().ok(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[cfg(feature = "cli")]
    fn memory_mb(&self) -> Option<u64> {
        let pid = self.pid?;
        let mut system = self.system.lock().ok()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        system.process(pid).map(|p| p.memory() / 1024 / 1024)
    }

    #[cfg(not(feature = "cli"))]
    fn memory_mb(&self) -> Option<u64> {
        None
    }

    /// Closes the current phase and logs it. Does nothing when disabled.
    pub fn mark_phase(&self, phase: &str) {
        if !self.enabled {
            return;
        }

        let now = Instant::now();
        let elapsed = match self.last_mark.lock() {
            Ok(mut last) => {
                let elapsed = now.duration_since(*last);
                *last = now;
                elapsed
            }
            Err(_) => return,
        };

        let stats = PhaseStats {
            phase: phase.to_string(),
            elapsed,
            memory_mb: self.memory_mb(),
        };

        match stats.memory_mb {
            Some(mb) => tracing::info!("📊 {} - {:?}, memory {}MB", phase, elapsed, mb),
            None => tracing::info!("📊 {} - {:?}", phase, elapsed),
        }

        if let Ok(mut phases) = self.phases.lock() {
            phases.push(stats);
        }
    }

    pub fn phases(&self) -> Vec<PhaseStats> {
        self.phases.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn log_final_stats(&self) {
        if !self.enabled {
            return;
        }

        let phases = self.phases();
        let peak = phases.iter().filter_map(|p| p.memory_mb).max();
        tracing::info!(
            "📊 Final Stats - {} phases, total {:?}, peak memory {}",
            phases.len(),
            self.started.elapsed(),
            peak.map(|mb| format!("{}MB", mb))
                .unwrap_or_else(|| "n/a".to_string())
        );
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_records_nothing() {
        let monitor = RunMonitor::default();
        monitor.mark_phase("extract");
        assert!(!monitor.is_enabled());
        assert!(monitor.phases().is_empty());
    }

    #[test]
    fn test_enabled_monitor_records_phases_in_order() {
        let monitor = RunMonitor::new(true);
        monitor.mark_phase("extract");
        monitor.mark_phase("transform");
        let names: Vec<String> = monitor.phases().into_iter().map(|p| p.phase).collect();
        assert_eq!(names, vec!["extract", "transform"]);
    }
}
