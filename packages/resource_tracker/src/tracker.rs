use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::ERR_POISONED_LOCK;
use crate::error::{Error, Result};
use crate::pal::{Platform, PlatformFacade, SystemCpuTimes};
use crate::snapshot::ResourceSnapshot;

/// Captures [`ResourceSnapshot`]s and owns the differential processor-time
/// baseline.
///
/// The tracker must be armed once with
/// [`init_cpu_monitor()`](Self::init_cpu_monitor) before the first sample;
/// sampling an unarmed tracker fails with [`Error::MonitorNotArmed`] rather
/// than reading an uninitialized baseline. Arming again later is allowed and
/// re-arms the monitor, resetting the differential interval.
///
/// The baseline is the one piece of shared mutable state in this package. It
/// is guarded by a lock, so samples taken concurrently from several threads
/// serialize; each observed interval then belongs to exactly one sample.
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
/// println!(
///     "process uses {} bytes of virtual memory",
///     snapshot.virtual_used_process
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResourceTracker {
    platform: PlatformFacade,
    cpu_baseline: Mutex<Option<CpuBaseline>>,
}

/// The previous processor observation, against which the next observation is
/// compared to produce utilization over the interval between the two.
///
/// The processor count is captured once at arming time and stays fixed for
/// the lifetime of the baseline.
#[derive(Clone, Copy, Debug)]
struct CpuBaseline {
    taken_at: Instant,
    process_time: Duration,
    system_times: SystemCpuTimes,
    processor_count: usize,
}

impl ResourceTracker {
    /// Creates a tracker reading the real operating system sensors.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            platform,
            cpu_baseline: Mutex::new(None),
        }
    }

    /// Arms the processor monitor: records the current wall-clock instant,
    /// the cumulative system busy/idle times, the process's cumulative
    /// processor time and the logical processor count as the baseline for
    /// differential utilization.
    ///
    /// Must be called once before the first [`sample()`](Self::sample) or
    /// [`process_cpu_percent()`](Self::process_cpu_percent). Calling it again
    /// re-arms the monitor: the baseline resets and the next utilization
    /// figure describes the interval since the re-arm.
    ///
    /// # Errors
    ///
    /// [`Error::SensorUnavailable`] on platforms without resource sensors;
    /// [`Error::Sensor`] when a counter query fails.
    pub fn init_cpu_monitor(&self) -> Result<()> {
        let baseline = self.observe_cpu()?;

        *self.cpu_baseline.lock().expect(ERR_POISONED_LOCK) = Some(baseline);

        Ok(())
    }

    /// Captures a snapshot of system and process memory use plus processor
    /// utilization.
    ///
    /// The individual sensor queries execute back to back; the operating
    /// system offers no way to read them atomically, and none is assumed.
    /// The processor figures describe the interval since the previous
    /// processor observation, and taking the sample becomes the new baseline.
    ///
    /// # Errors
    ///
    /// [`Error::MonitorNotArmed`] if
    /// [`init_cpu_monitor()`](Self::init_cpu_monitor) has not been called;
    /// [`Error::SensorUnavailable`] on platforms without resource sensors;
    /// [`Error::Sensor`] / [`Error::Malformed`] when a counter query fails.
    pub fn sample(&self) -> Result<ResourceSnapshot> {
        // The baseline lock is held across all sub-queries so that concurrent
        // samples serialize and each interval is consumed by exactly one of
        // them.
        let mut guard = self.cpu_baseline.lock().expect(ERR_POISONED_LOCK);
        let baseline = guard.as_mut().ok_or(Error::MonitorNotArmed)?;

        let memory = self.platform.memory_counters()?;
        let process_memory = self.platform.process_memory_counters()?;
        let (cpu_system_percent, cpu_process_percent) = self.advance_baseline(baseline)?;

        Ok(ResourceSnapshot {
            virtual_total: memory.virtual_total,
            virtual_used_system: memory.virtual_total.saturating_sub(memory.virtual_available),
            virtual_used_process: process_memory.virtual_bytes,
            ram_total: memory.physical_total,
            ram_used_system: memory
                .physical_total
                .saturating_sub(memory.physical_available),
            ram_used_process: process_memory.resident_bytes,
            cpu_system_percent,
            cpu_process_percent,
        })
    }

    /// The process's processor utilization over the interval since the
    /// previous processor observation, normalized by logical processor count.
    ///
    /// Returns `Ok(None)` when no wall-clock time has elapsed since the
    /// previous observation - an expected condition under fast repeated
    /// sampling, not a failure. Every call, including one that returns
    /// `None`, makes the current observation the new baseline, so each call
    /// reports utilization since the previous call rather than since arming.
    ///
    /// # Errors
    ///
    /// [`Error::MonitorNotArmed`] if
    /// [`init_cpu_monitor()`](Self::init_cpu_monitor) has not been called;
    /// [`Error::SensorUnavailable`] on platforms without resource sensors;
    /// [`Error::Sensor`] when a counter query fails.
    pub fn process_cpu_percent(&self) -> Result<Option<f64>> {
        let mut guard = self.cpu_baseline.lock().expect(ERR_POISONED_LOCK);
        let baseline = guard.as_mut().ok_or(Error::MonitorNotArmed)?;

        let (_system, process) = self.advance_baseline(baseline)?;

        Ok(process)
    }

    fn observe_cpu(&self) -> Result<CpuBaseline> {
        Ok(CpuBaseline {
            taken_at: self.platform.now(),
            process_time: self.platform.process_cpu_time()?,
            system_times: self.platform.system_cpu_times()?,
            processor_count: self.platform.processor_count(),
        })
    }

    /// Computes both utilization figures for the interval from the baseline
    /// to now, then replaces the baseline with the current observation.
    fn advance_baseline(&self, baseline: &mut CpuBaseline) -> Result<(f64, Option<f64>)> {
        let current = CpuBaseline {
            taken_at: self.platform.now(),
            process_time: self.platform.process_cpu_time()?,
            system_times: self.platform.system_cpu_times()?,
            processor_count: baseline.processor_count,
        };

        let system = system_percent(baseline.system_times, current.system_times);
        let process = process_percent(baseline, &current);

        *baseline = current;

        Ok((system, process))
    }
}

impl Default for ResourceTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// System-wide utilization from two cumulative busy/idle observations.
///
/// The unit of the tick counters cancels out of the ratio. An interval too
/// short to register any ticks reports 0.0.
#[expect(
    clippy::cast_precision_loss,
    reason = "tick deltas between two nearby samples are far below the 2^52 range where f64 rounding would matter"
)]
fn system_percent(previous: SystemCpuTimes, current: SystemCpuTimes) -> f64 {
    let busy = current.busy.saturating_sub(previous.busy);
    let idle = current.idle.saturating_sub(previous.idle);
    let total = busy.saturating_add(idle);

    if total == 0 {
        return 0.0;
    }

    (busy as f64) * 100.0 / (total as f64)
}

/// Process utilization from two cumulative observations: processor time
/// consumed over wall-clock time elapsed, normalized by processor count.
///
/// `None` when no wall-clock time elapsed between the observations (or the
/// processor count is degenerate), so there is no interval to attribute the
/// time to.
#[expect(
    clippy::cast_precision_loss,
    reason = "realistic processor counts are tiny; the cast is exact"
)]
fn process_percent(previous: &CpuBaseline, current: &CpuBaseline) -> Option<f64> {
    let wall = current.taken_at.saturating_duration_since(previous.taken_at);

    if wall.is_zero() || previous.processor_count == 0 {
        return None;
    }

    let consumed = current.process_time.saturating_sub(previous.process_time);

    Some(
        consumed.as_secs_f64() / wall.as_secs_f64() / (previous.processor_count as f64) * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pal::{FakePlatform, MemoryCounters, ProcessMemoryCounters};

    fn tracker_with_fake() -> (ResourceTracker, FakePlatform) {
        let fake = FakePlatform::new();
        let tracker = ResourceTracker::with_platform(PlatformFacade::fake(fake.clone()));

        (tracker, fake)
    }

    #[test]
    fn sample_before_arming_fails() {
        let (tracker, _fake) = tracker_with_fake();

        assert!(matches!(tracker.sample(), Err(Error::MonitorNotArmed)));
    }

    #[test]
    fn process_cpu_before_arming_fails() {
        let (tracker, _fake) = tracker_with_fake();

        assert!(matches!(
            tracker.process_cpu_percent(),
            Err(Error::MonitorNotArmed)
        ));
    }

    #[test]
    fn sample_captures_memory_counters() {
        let (tracker, fake) = tracker_with_fake();

        fake.set_memory_counters(MemoryCounters {
            virtual_total: 10_000,
            virtual_available: 4_000,
            physical_total: 5_000,
            physical_available: 2_000,
        });
        fake.set_process_memory_counters(ProcessMemoryCounters {
            virtual_bytes: 1_200,
            resident_bytes: 800,
        });

        tracker.init_cpu_monitor().expect("fake never fails");
        fake.advance_clock(Duration::from_secs(1));

        let snapshot = tracker.sample().expect("fake never fails");

        assert_eq!(snapshot.virtual_total, 10_000);
        assert_eq!(snapshot.virtual_used_system, 6_000);
        assert_eq!(snapshot.virtual_used_process, 1_200);
        assert_eq!(snapshot.ram_total, 5_000);
        assert_eq!(snapshot.ram_used_system, 3_000);
        assert_eq!(snapshot.ram_used_process, 800);
    }

    #[test]
    fn sample_holds_used_within_total_invariant() {
        let (tracker, fake) = tracker_with_fake();

        // Availability exceeding the total is a degenerate sensor reading;
        // the derived "used" figure must still stay within bounds.
        fake.set_memory_counters(MemoryCounters {
            virtual_total: 1_000,
            virtual_available: 2_000,
            physical_total: 500,
            physical_available: 700,
        });

        tracker.init_cpu_monitor().expect("fake never fails");
        let snapshot = tracker.sample().expect("fake never fails");

        assert!(snapshot.virtual_used_system <= snapshot.virtual_total);
        assert!(snapshot.ram_used_system <= snapshot.ram_total);
    }

    #[test]
    fn process_cpu_is_normalized_by_processor_count() {
        let (tracker, fake) = tracker_with_fake();
        fake.set_processor_count(4);

        tracker.init_cpu_monitor().expect("fake never fails");

        // 50 ms of processor time over 1 s of wall time on 4 processors.
        fake.advance_clock(Duration::from_secs(1));
        fake.set_process_cpu_time(Duration::from_millis(50));

        let percent = tracker
            .process_cpu_percent()
            .expect("fake never fails")
            .expect("wall time elapsed");

        assert!((percent - 1.25).abs() < 1e-9);
    }

    #[test]
    fn degenerate_interval_yields_none_repeatedly() {
        let (tracker, _fake) = tracker_with_fake();

        tracker.init_cpu_monitor().expect("fake never fails");

        // No wall-clock time passes between the observations.
        assert!(tracker.process_cpu_percent().expect("fake never fails").is_none());
        assert!(tracker.process_cpu_percent().expect("fake never fails").is_none());
    }

    #[test]
    fn each_call_measures_since_the_previous_call() {
        let (tracker, fake) = tracker_with_fake();
        fake.set_processor_count(4);

        tracker.init_cpu_monitor().expect("fake never fails");

        fake.advance_clock(Duration::from_secs(1));
        fake.set_process_cpu_time(Duration::from_millis(100));

        let first = tracker
            .process_cpu_percent()
            .expect("fake never fails")
            .expect("wall time elapsed");
        assert!((first - 2.5).abs() < 1e-9);

        // The next interval consumed only 50 ms more.
        fake.advance_clock(Duration::from_secs(1));
        fake.set_process_cpu_time(Duration::from_millis(150));

        let second = tracker
            .process_cpu_percent()
            .expect("fake never fails")
            .expect("wall time elapsed");
        assert!((second - 1.25).abs() < 1e-9);
    }

    #[test]
    fn rearming_resets_the_baseline() {
        let (tracker, fake) = tracker_with_fake();

        tracker.init_cpu_monitor().expect("fake never fails");

        fake.advance_clock(Duration::from_secs(10));
        fake.set_process_cpu_time(Duration::from_secs(10));

        // Re-arming discards the interval accumulated above.
        tracker.init_cpu_monitor().expect("fake never fails");

        fake.advance_clock(Duration::from_secs(1));

        let percent = tracker
            .process_cpu_percent()
            .expect("fake never fails")
            .expect("wall time elapsed");

        assert!(percent.abs() < 1e-9);
    }

    #[test]
    fn system_cpu_is_busy_share_of_ticks() {
        let (tracker, fake) = tracker_with_fake();

        tracker.init_cpu_monitor().expect("fake never fails");

        fake.advance_clock(Duration::from_secs(1));
        fake.set_system_cpu_times(SystemCpuTimes {
            busy: 250,
            idle: 750,
        });

        let snapshot = tracker.sample().expect("fake never fails");

        assert!((snapshot.cpu_system_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn system_cpu_with_no_ticks_is_zero() {
        let (tracker, fake) = tracker_with_fake();

        tracker.init_cpu_monitor().expect("fake never fails");
        fake.advance_clock(Duration::from_secs(1));

        let snapshot = tracker.sample().expect("fake never fails");

        assert!(snapshot.cpu_system_percent.abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_processor_count_yields_none() {
        let (tracker, fake) = tracker_with_fake();
        fake.set_processor_count(0);

        tracker.init_cpu_monitor().expect("fake never fails");

        fake.advance_clock(Duration::from_secs(1));
        fake.set_process_cpu_time(Duration::from_millis(100));

        assert!(tracker.process_cpu_percent().expect("fake never fails").is_none());
    }

    #[test]
    fn sampling_advances_the_baseline_too() {
        let (tracker, fake) = tracker_with_fake();
        fake.set_processor_count(1);

        tracker.init_cpu_monitor().expect("fake never fails");

        fake.advance_clock(Duration::from_secs(1));
        fake.set_process_cpu_time(Duration::from_millis(500));

        let snapshot = tracker.sample().expect("fake never fails");
        assert!(
            (snapshot.cpu_process_percent.expect("wall time elapsed") - 50.0).abs() < 1e-9
        );

        // A sample consumed the interval; a query right after sees none.
        assert!(tracker.process_cpu_percent().expect("fake never fails").is_none());
    }

    // The type is thread-safe.
    static_assertions::assert_impl_all!(ResourceTracker: Send, Sync);
}
