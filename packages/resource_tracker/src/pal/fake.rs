//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::ERR_POISONED_LOCK;
use crate::error::Result;
use crate::pal::{MemoryCounters, Platform, ProcessMemoryCounters, SystemCpuTimes};

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    memory: MemoryCounters,
    process_memory: ProcessMemoryCounters,
    system_cpu_times: SystemCpuTimes,
    process_cpu_time: Duration,
    now: Instant,
    processor_count: usize,
}

/// Fake implementation of the platform abstraction for testing.
///
/// Tests script the sensor values instead of relying on the real operating
/// system. Multiple clones of the same `FakePlatform` share the same
/// underlying state, allowing tests to modify values after the platform was
/// handed to the type under test - in particular, to advance the fake clock
/// and cumulative processor times between samples.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a fake platform with plausible defaults: a 16 GiB / 8 GiB
    /// machine with 4 processors, an idle process, and all cumulative
    /// counters at zero.
    pub(crate) fn new() -> Self {
        const GIB: u64 = 1024 * 1024 * 1024;

        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                memory: MemoryCounters {
                    virtual_total: 16 * GIB,
                    virtual_available: 12 * GIB,
                    physical_total: 8 * GIB,
                    physical_available: 6 * GIB,
                },
                process_memory: ProcessMemoryCounters {
                    virtual_bytes: GIB,
                    resident_bytes: GIB / 2,
                },
                system_cpu_times: SystemCpuTimes { busy: 0, idle: 0 },
                process_cpu_time: Duration::ZERO,
                now: Instant::now(),
                processor_count: 4,
            })),
        }
    }

    pub(crate) fn set_memory_counters(&self, memory: MemoryCounters) {
        self.state.lock().expect(ERR_POISONED_LOCK).memory = memory;
    }

    pub(crate) fn set_process_memory_counters(&self, process_memory: ProcessMemoryCounters) {
        self.state.lock().expect(ERR_POISONED_LOCK).process_memory = process_memory;
    }

    pub(crate) fn set_system_cpu_times(&self, times: SystemCpuTimes) {
        self.state.lock().expect(ERR_POISONED_LOCK).system_cpu_times = times;
    }

    /// Sets the cumulative processor time consumed by the fake process.
    pub(crate) fn set_process_cpu_time(&self, time: Duration) {
        self.state.lock().expect(ERR_POISONED_LOCK).process_cpu_time = time;
    }

    /// Moves the fake clock forward.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// wall-clock time passing between samples.
    pub(crate) fn advance_clock(&self, by: Duration) {
        let mut state = self.state.lock().expect(ERR_POISONED_LOCK);
        state.now = state
            .now
            .checked_add(by)
            .expect("fake clock advanced beyond the end of the universe - impossible in tests");
    }

    pub(crate) fn set_processor_count(&self, count: usize) {
        self.state.lock().expect(ERR_POISONED_LOCK).processor_count = count;
    }
}

impl Platform for FakePlatform {
    fn memory_counters(&self) -> Result<MemoryCounters> {
        Ok(self.state.lock().expect(ERR_POISONED_LOCK).memory)
    }

    fn process_memory_counters(&self) -> Result<ProcessMemoryCounters> {
        Ok(self.state.lock().expect(ERR_POISONED_LOCK).process_memory)
    }

    fn system_cpu_times(&self) -> Result<SystemCpuTimes> {
        Ok(self.state.lock().expect(ERR_POISONED_LOCK).system_cpu_times)
    }

    fn process_cpu_time(&self) -> Result<Duration> {
        Ok(self.state.lock().expect(ERR_POISONED_LOCK).process_cpu_time)
    }

    fn processor_count(&self) -> usize {
        self.state.lock().expect(ERR_POISONED_LOCK).processor_count
    }

    fn now(&self) -> Instant {
        self.state.lock().expect(ERR_POISONED_LOCK).now
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_process_cpu_time(Duration::from_millis(100));
        assert_eq!(
            platform2.process_cpu_time().expect("fake never fails"),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn advancing_the_clock_moves_now() {
        let platform = FakePlatform::new();
        let before = platform.now();

        platform.advance_clock(Duration::from_secs(5));

        assert_eq!(platform.now().duration_since(before), Duration::from_secs(5));
    }

    #[test]
    fn cumulative_counters_are_settable() {
        let platform = FakePlatform::new();

        platform.set_system_cpu_times(SystemCpuTimes {
            busy: 250,
            idle: 750,
        });

        let times = platform.system_cpu_times().expect("fake never fails");
        assert_eq!(times.busy, 250);
        assert_eq!(times.idle, 750);
    }
}
