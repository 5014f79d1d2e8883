use crate::{SnapshotDelta, UsageReport};

/// One reading of system and process memory use plus processor utilization,
/// captured at a single instant by
/// [`ResourceTracker::sample()`][crate::ResourceTracker::sample].
///
/// The individual figures are queried as close together in time as practical,
/// but the operating system offers no way to read them atomically, so a
/// snapshot is self-consistent only to within the few microseconds the
/// queries take.
///
/// All memory figures are in bytes. System-wide "used" figures are derived as
/// total minus available, so `virtual_used_system <= virtual_total` and
/// `ram_used_system <= ram_total` always hold. The per-process figures come
/// from separate counters and the operating system may transiently report a
/// process figure above the corresponding system-wide one.
///
/// # Examples
///
/// ```
/// use resource_tracker::ResourceTracker;
///
/// # fn main() -> Result<(), resource_tracker::Error> {
/// let tracker = ResourceTracker::new();
/// tracker.init_cpu_monitor()?;
///
/// let snapshot = tracker.sample()?;
/// assert!(snapshot.virtual_used_system <= snapshot.virtual_total);
/// assert!(snapshot.ram_used_system <= snapshot.ram_total);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct ResourceSnapshot {
    /// Total virtual memory the system can commit (physical memory plus
    /// page/swap file).
    pub virtual_total: u64,

    /// Virtual memory currently committed across the whole system.
    pub virtual_used_system: u64,

    /// Virtual memory currently used by the calling process.
    pub virtual_used_process: u64,

    /// Total physical memory installed.
    pub ram_total: u64,

    /// Physical memory currently in use across the whole system.
    pub ram_used_system: u64,

    /// Physical memory resident for the calling process (its working set).
    pub ram_used_process: u64,

    /// System-wide processor utilization in percent over the interval since
    /// the previous processor query, or 0.0 when the interval was too short
    /// to register any processor ticks.
    ///
    /// Not clamped: accounting granularity may push a reading slightly
    /// outside [0, 100].
    pub cpu_system_percent: f64,

    /// The calling process's processor utilization in percent over the
    /// interval since the previous processor query, normalized by logical
    /// processor count, or `None` when no wall-clock time elapsed since that
    /// query.
    ///
    /// Not clamped: accounting granularity may push a reading slightly
    /// outside [0, 100].
    pub cpu_process_percent: Option<f64>,
}

impl ResourceSnapshot {
    /// Percentage deltas from an earlier snapshot to this one.
    ///
    /// Equivalent to [`SnapshotDelta::between(earlier, self)`][SnapshotDelta::between].
    #[must_use]
    pub fn delta_since(&self, earlier: &Self) -> SnapshotDelta {
        SnapshotDelta::between(earlier, self)
    }

    /// Absolute usage figures of this snapshot, ready for presentation.
    #[must_use]
    pub fn usage_report(&self) -> UsageReport {
        UsageReport::from_snapshot(self)
    }
}
