use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::pal::{MemoryCounters, Platform, ProcessMemoryCounters, SystemCpuTimes};

/// Singleton instance of `BuildTargetPlatform`, used by the facade to hook up
/// to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// Fallback platform implementation for operating systems without resource
/// sensors.
///
/// Every sensor query reports [`Error::SensorUnavailable`], so callers see an
/// explicit unsupported result instead of zeroed or uninitialized figures.
/// Processor count and clock reads still work, as the standard library
/// provides those everywhere.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn memory_counters(&self) -> Result<MemoryCounters> {
        Err(Error::SensorUnavailable)
    }

    fn process_memory_counters(&self) -> Result<ProcessMemoryCounters> {
        Err(Error::SensorUnavailable)
    }

    fn system_cpu_times(&self) -> Result<SystemCpuTimes> {
        Err(Error::SensorUnavailable)
    }

    fn process_cpu_time(&self) -> Result<Duration> {
        Err(Error::SensorUnavailable)
    }

    fn processor_count(&self) -> usize {
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
