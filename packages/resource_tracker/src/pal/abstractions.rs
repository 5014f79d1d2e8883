use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::error::Result;

/// System-wide memory counters, in bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MemoryCounters {
    /// Total virtual memory the system can commit (physical plus page/swap
    /// file).
    pub(crate) virtual_total: u64,

    /// Virtual memory not currently committed.
    pub(crate) virtual_available: u64,

    /// Total physical memory installed.
    pub(crate) physical_total: u64,

    /// Physical memory available for new allocations without swapping.
    pub(crate) physical_available: u64,
}

/// Memory counters of the calling process, in bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProcessMemoryCounters {
    /// Virtual memory in use by the process.
    pub(crate) virtual_bytes: u64,

    /// The portion of the process's memory resident in physical RAM (its
    /// working set).
    pub(crate) resident_bytes: u64,
}

/// Cumulative system-wide processor times since boot, in an arbitrary
/// platform-defined unit.
///
/// Both counters increase monotonically; only deltas and the busy/idle ratio
/// are meaningful, which is why no unit conversion is ever needed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SystemCpuTimes {
    /// Time the processors spent doing work.
    pub(crate) busy: u64,

    /// Time the processors spent idle (or waiting for I/O).
    pub(crate) idle: u64,
}

/// The operating system sensor interface.
///
/// Every operation is a read-only query returning raw counts; failures are
/// surfaced once and never retried at this layer. The platform-independent
/// logic (differential utilization, percentages, deltas) lives above this
/// trait and is never duplicated per platform.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// System-wide virtual and physical memory totals and availability.
    fn memory_counters(&self) -> Result<MemoryCounters>;

    /// The calling process's virtual and resident memory use.
    fn process_memory_counters(&self) -> Result<ProcessMemoryCounters>;

    /// Cumulative busy/idle processor times across all processors.
    fn system_cpu_times(&self) -> Result<SystemCpuTimes>;

    /// Cumulative kernel plus user processor time consumed by the calling
    /// process.
    fn process_cpu_time(&self) -> Result<Duration>;

    /// The number of logical processors in the system.
    fn processor_count(&self) -> usize;

    // We also put this here because Rust does not (yet) support a proper clock
    // abstraction, so without this we have nothing to fake. This just provides
    // a fakeable wrapper around `Instant`.
    fn now(&self) -> Instant;
}
