use std::time::{Duration, Instant};

use cpu_time::ProcessTime;

use crate::error::{Error, Result};
use crate::pal::linux::{Filesystem, FilesystemFacade};
use crate::pal::{MemoryCounters, Platform, ProcessMemoryCounters, SystemCpuTimes};

/// Singleton instance of `BuildTargetPlatform`, used by the facade to hook up
/// to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(FilesystemFacade::real());

/// The platform that matches the operating system the build is targeting.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    filesystem: FilesystemFacade,
}

impl BuildTargetPlatform {
    pub(crate) const fn new(filesystem: FilesystemFacade) -> Self {
        Self { filesystem }
    }
}

impl Platform for BuildTargetPlatform {
    fn memory_counters(&self) -> Result<MemoryCounters> {
        let contents = self
            .filesystem
            .get_meminfo_contents()
            .map_err(|source| Error::Sensor {
                counter: "/proc/meminfo",
                source,
            })?;

        parse_meminfo(&contents)
    }

    fn process_memory_counters(&self) -> Result<ProcessMemoryCounters> {
        let contents =
            self.filesystem
                .get_proc_self_status_contents()
                .map_err(|source| Error::Sensor {
                    counter: "/proc/self/status",
                    source,
                })?;

        parse_process_status(&contents)
    }

    fn system_cpu_times(&self) -> Result<SystemCpuTimes> {
        let contents = self
            .filesystem
            .get_proc_stat_contents()
            .map_err(|source| Error::Sensor {
                counter: "/proc/stat",
                source,
            })?;

        parse_cpu_times(&contents)
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
        // All logical processors in the system, not the affinity-restricted
        // count; utilization is normalized against the whole machine.
        //
        // SAFETY: No safety requirements.
        let count = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };

        usize::try_from(count).ok().filter(|&c| c > 0).unwrap_or(1)
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Extracts a "Key:    value kB" field from /proc/meminfo or /proc/pid/status
/// style contents, returning the value in bytes.
fn kb_field(contents: &str, key: &str, counter: &'static str) -> Result<u64> {
    for line in contents.lines() {
        let Some(rest) = line.strip_prefix(key) else {
            continue;
        };
        let Some(rest) = rest.strip_prefix(':') else {
            continue;
        };

        let value = rest.trim().trim_end_matches("kB").trim();

        return value
            .parse::<u64>()
            .map(|kb| kb.saturating_mul(1024))
            .map_err(|_| Error::Malformed {
                counter,
                details: format!("field {key} has non-numeric value '{value}'"),
            });
    }

    Err(Error::Malformed {
        counter,
        details: format!("field {key} not present"),
    })
}

fn parse_meminfo(contents: &str) -> Result<MemoryCounters> {
    const COUNTER: &str = "/proc/meminfo";

    let mem_total = kb_field(contents, "MemTotal", COUNTER)?;
    let mem_available = kb_field(contents, "MemAvailable", COUNTER)?;
    let swap_total = kb_field(contents, "SwapTotal", COUNTER)?;
    let swap_free = kb_field(contents, "SwapFree", COUNTER)?;

    // Virtual memory here means everything the system could commit: physical
    // memory plus swap.
    Ok(MemoryCounters {
        virtual_total: mem_total.saturating_add(swap_total),
        virtual_available: mem_available.saturating_add(swap_free),
        physical_total: mem_total,
        physical_available: mem_available,
    })
}

fn parse_process_status(contents: &str) -> Result<ProcessMemoryCounters> {
    const COUNTER: &str = "/proc/self/status";

    Ok(ProcessMemoryCounters {
        virtual_bytes: kb_field(contents, "VmSize", COUNTER)?,
        resident_bytes: kb_field(contents, "VmRSS", COUNTER)?,
    })
}

/// Parses the aggregate "cpu" line of /proc/stat into cumulative busy and
/// idle tick counts.
///
/// The line carries up to ten fields; kernels older than the steal/guest
/// accounting emit fewer, so only the first four (user, nice, system, idle)
/// are required.
fn parse_cpu_times(contents: &str) -> Result<SystemCpuTimes> {
    const COUNTER: &str = "/proc/stat";

    let line = contents
        .lines()
        .find(|line| line.starts_with("cpu "))
        .ok_or_else(|| Error::Malformed {
            counter: COUNTER,
            details: "no aggregate cpu line present".to_string(),
        })?;

    let mut fields = [0_u64; 10];
    let mut parsed = 0_usize;

    for (slot, field) in fields.iter_mut().zip(line.split_whitespace().skip(1)) {
        *slot = field.parse::<u64>().map_err(|_| Error::Malformed {
            counter: COUNTER,
            details: format!("non-numeric tick count '{field}'"),
        })?;
        parsed = parsed.saturating_add(1);
    }

    if parsed < 4 {
        return Err(Error::Malformed {
            counter: COUNTER,
            details: format!("expected at least 4 tick fields, found {parsed}"),
        });
    }

    let [user, nice, system, idle, iowait, irq, softirq, steal, _guest, _guest_nice] = fields;

    // Guest time is already accounted inside user time, so it is not added
    // again. Iowait counts as idle: the processor was not doing work.
    let busy = user
        .saturating_add(nice)
        .saturating_add(system)
        .saturating_add(irq)
        .saturating_add(softirq)
        .saturating_add(steal);

    Ok(SystemCpuTimes {
        busy,
        idle: idle.saturating_add(iowait),
    })
}
