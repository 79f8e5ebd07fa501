//! sysinfo-backed sensor acquisition.
//!
//! Each signal is read once per sample from the corresponding OS interface:
//! temperature from the hottest readable thermal component, current
//! frequency as the mean over logical CPUs, base frequency from the Linux
//! cpufreq sysfs entry, and load from the global CPU usage. A signal whose
//! read fails is left absent on the snapshot.

use chrono::Utc;
use heat_analyzer::Snapshot;
use sysinfo::{Components, CpuRefreshKind, RefreshKind, System};
use tracing::debug;

use crate::error::{Result, SensorError};
use crate::source::SnapshotSource;

/// cpufreq rated-frequency file, in kHz.
#[cfg(target_os = "linux")]
const CPUINFO_MAX_FREQ: &str = "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq";

/// Snapshot source backed by the host's real sensors.
pub struct SystemSensors {
    sys: System,
    components: Components,
    primed: bool,
}

impl SystemSensors {
    /// Creates a sensor source for the local host.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sys: System::new_with_specifics(
                RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
            ),
            components: Components::new_with_refreshed_list(),
            primed: false,
        }
    }
}

impl Default for SystemSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for SystemSensors {
    async fn sample(&mut self) -> Snapshot {
        // CPU usage is a delta between two refreshes; warm up once so the
        // first sample already carries a meaningful load reading.
        if !self.primed {
            self.sys.refresh_cpu_usage();
            tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
            self.primed = true;
        }
        self.sys.refresh_cpu();
        self.components.refresh();

        let mut snapshot = Snapshot::new(Utc::now());

        match read_temperature(&self.components) {
            Ok(temp_c) => snapshot = snapshot.with_temperature(temp_c),
            Err(err) => debug!(%err, "temperature not obtained"),
        }
        match read_frequency(&self.sys) {
            Ok(mhz) => snapshot = snapshot.with_frequency(mhz),
            Err(err) => debug!(%err, "frequency not obtained"),
        }
        match read_base_frequency() {
            Ok(mhz) => snapshot = snapshot.with_base_frequency(mhz),
            Err(err) => debug!(%err, "base frequency not obtained"),
        }
        match read_load(&self.sys) {
            Ok(percent) => snapshot = snapshot.with_load(percent),
            Err(err) => debug!(%err, "load not obtained"),
        }

        debug!(signals = snapshot.signal_count(), "captured snapshot");
        snapshot
    }
}

/// Hottest readable thermal component, the moral equivalent of taking the
/// maximum over ACPI thermal zones.
fn read_temperature(components: &Components) -> Result<f64> {
    components
        .list()
        .iter()
        .map(|c| f64::from(c.temperature()))
        .filter(|t| t.is_finite() && *t > 0.0)
        .fold(None, |hottest: Option<f64>, t| {
            Some(hottest.map_or(t, |h| h.max(t)))
        })
        .ok_or(SensorError::Unavailable {
            signal: "temperature",
        })
}

fn read_frequency(sys: &System) -> Result<u32> {
    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Err(SensorError::Unavailable {
            signal: "frequency",
        });
    }
    let sum: u64 = cpus.iter().map(sysinfo::Cpu::frequency).sum();
    let mean = sum / cpus.len() as u64;
    if mean == 0 {
        return Err(SensorError::Unavailable {
            signal: "frequency",
        });
    }
    Ok(mean as u32)
}

#[cfg(target_os = "linux")]
fn read_base_frequency() -> Result<u32> {
    let raw = std::fs::read_to_string(CPUINFO_MAX_FREQ)?;
    parse_khz(raw.trim())
}

#[cfg(not(target_os = "linux"))]
fn read_base_frequency() -> Result<u32> {
    Err(SensorError::Unavailable {
        signal: "base_frequency",
    })
}

/// Parses a cpufreq kHz value into MHz.
#[cfg(any(target_os = "linux", test))]
fn parse_khz(raw: &str) -> Result<u32> {
    let khz: u64 = raw.parse().map_err(|_| SensorError::Parse {
        value: raw.to_string(),
    })?;
    let mhz = khz / 1000;
    if mhz == 0 {
        return Err(SensorError::Unavailable {
            signal: "base_frequency",
        });
    }
    Ok(mhz as u32)
}

fn read_load(sys: &System) -> Result<f64> {
    if sys.cpus().is_empty() {
        return Err(SensorError::Unavailable { signal: "load" });
    }
    let usage = f64::from(sys.global_cpu_info().cpu_usage());
    if !usage.is_finite() {
        return Err(SensorError::Unavailable { signal: "load" });
    }
    Ok(usage.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heat_analyzer::Signal;

    mod parse_tests {
        use super::*;

        #[test]
        fn parses_khz_to_mhz() {
            assert_eq!(parse_khz("3000000").unwrap(), 3000);
            assert_eq!(parse_khz("2400000").unwrap(), 2400);
        }

        #[test]
        fn rejects_garbage() {
            assert!(matches!(
                parse_khz("not-a-number"),
                Err(SensorError::Parse { .. })
            ));
        }

        #[test]
        fn rejects_sub_mhz_values() {
            assert!(matches!(
                parse_khz("500"),
                Err(SensorError::Unavailable { .. })
            ));
        }
    }

    mod sample_tests {
        use super::*;

        #[tokio::test]
        async fn sample_is_internally_consistent() {
            let mut sensors = SystemSensors::new();
            let snapshot = sensors.sample().await;

            // Whatever was obtainable on this host must be plausible;
            // everything else must be absent rather than zero-present.
            if snapshot.has(Signal::Frequency) {
                assert!(snapshot.freq_mhz > 0);
            }
            if snapshot.has(Signal::BaseFrequency) {
                assert!(snapshot.base_freq_mhz > 0);
            }
            if snapshot.has(Signal::Load) {
                assert!((0.0..=100.0).contains(&snapshot.load_percent));
            }
        }
    }
}
