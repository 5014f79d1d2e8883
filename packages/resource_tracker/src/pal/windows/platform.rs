use std::time::{Duration, Instant};

use cpu_time::ProcessTime;

use crate::error::{Error, Result};
use crate::pal::windows::{Bindings, BindingsFacade};
use crate::pal::{MemoryCounters, Platform, ProcessMemoryCounters, SystemCpuTimes};

/// Singleton instance of `BuildTargetPlatform`, used by the facade to hook up
/// to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::real());

/// The platform that matches the operating system the build is targeting.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl BuildTargetPlatform {
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl Platform for BuildTargetPlatform {
    fn memory_counters(&self) -> Result<MemoryCounters> {
        let status = self
            .bindings
            .global_memory_status()
            .map_err(|source| Error::Sensor {
                counter: "GlobalMemoryStatusEx",
                source,
            })?;

        Ok(MemoryCounters {
            virtual_total: status.total_page_file,
            virtual_available: status.avail_page_file,
            physical_total: status.total_phys,
            physical_available: status.avail_phys,
        })
    }

    fn process_memory_counters(&self) -> Result<ProcessMemoryCounters> {
        let info = self
            .bindings
            .process_memory_info()
            .map_err(|source| Error::Sensor {
                counter: "K32GetProcessMemoryInfo",
                source,
            })?;

        Ok(ProcessMemoryCounters {
            virtual_bytes: info.private_usage,
            resident_bytes: info.working_set_size,
        })
    }

    fn system_cpu_times(&self) -> Result<SystemCpuTimes> {
        let times = self.bindings.system_times().map_err(|source| Error::Sensor {
            counter: "GetSystemTimes",
            source,
        })?;

        // Kernel time includes idle time, so the busy share of kernel time is
        // the difference.
        Ok(SystemCpuTimes {
            busy: times
                .kernel
                .saturating_sub(times.idle)
                .saturating_add(times.user),
            idle: times.idle,
        })
    }

    fn process_cpu_time(&self) -> Result<Duration> {
        ProcessTime::try_now()
            .map(|time| time.as_duration())
            .map_err(|source| Error::Sensor {
                counter: "process CPU time",
                source,
            })
    }

    fn processor_count(&self) -> usize {
        let count = self.bindings.number_of_processors();

        usize::try_from(count).ok().filter(|&c| c > 0).unwrap_or(1)
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
