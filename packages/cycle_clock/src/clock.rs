use crate::pal::{Bindings, BindingsFacade};
use crate::{Measurement, MeasurementReport, TimeUnit};

/// Captures [`Measurement`]s and computes elapsed cycles and durations.
///
/// Every capture reads the processor cycle counter and the monotonic system
/// clock in immediate succession, so one measurement serves both a cycle-level
/// and a wall-clock view of the same interval.
///
/// All operations are synchronous and complete before returning; the clock
/// performs no background activity.
///
/// # Examples
///
/// ```
/// use cycle_clock::{Clock, TimeUnit};
///
/// let clock = Clock::new();
/// let start = clock.now();
///
/// let mut sum = 0_u64;
/// for i in 0..1000 {
///     sum = sum.wrapping_add(i);
/// }
/// std::hint::black_box(sum);
///
/// assert!(clock.elapsed(start, TimeUnit::Nanoseconds) >= 0);
/// ```
#[derive(Debug)]
pub struct Clock {
    bindings: BindingsFacade,
}

impl Clock {
    /// Creates a clock reading the real hardware counters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(BindingsFacade::real())
    }

    pub(crate) fn with_bindings(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }

    /// Captures the current cycle count and monotonic timestamp.
    ///
    /// Never fails and has no side effects beyond the reads themselves.
    #[must_use]
    pub fn now(&self) -> Measurement {
        let cycles = self.bindings.cycle_count();
        let instant = self.bindings.now();

        Measurement::new(cycles, instant)
    }

    /// Cycles elapsed since `start` was captured.
    ///
    /// Uses wrapping arithmetic, so a counter rollover between the two readings
    /// still yields the correct delta.
    #[must_use]
    pub fn elapsed_cycles(&self, start: Measurement) -> u64 {
        self.bindings.cycle_count().wrapping_sub(start.cycles())
    }

    /// Duration elapsed since `start` was captured, as a whole number of the
    /// requested unit, truncated toward zero.
    ///
    /// Non-negative for any call made after `start` was taken.
    #[must_use]
    pub fn elapsed(&self, start: Measurement, unit: TimeUnit) -> i64 {
        let duration = self
            .bindings
            .now()
            .saturating_duration_since(start.instant());

        unit.count_of(duration)
    }

    /// Runs a callable to completion on the calling thread and returns its
    /// output together with the elapsed time of the call.
    ///
    /// Panics raised by the callable propagate unmodified and no timing result
    /// is produced for the aborted call. A callable returning `Result` has its
    /// value passed through untouched, so failures remain visible to the
    /// caller alongside the timing of the failed attempt.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle_clock::{Clock, TimeUnit};
    ///
    /// let clock = Clock::new();
    ///
    /// let (sum, micros) = clock.benchmark(TimeUnit::Microseconds, || {
    ///     (0..10_000_u64).fold(0_u64, u64::wrapping_add)
    /// });
    ///
    /// assert_eq!(sum, 49_995_000);
    /// assert!(micros >= 0);
    /// ```
    #[must_use = "the elapsed count is the point of benchmarking the callable"]
    pub fn benchmark<R>(&self, unit: TimeUnit, f: impl FnOnce() -> R) -> (R, i64) {
        let start = self.now();
        let output = f();
        let elapsed = self.elapsed(start, unit);

        (output, elapsed)
    }

    /// Bundles the cycle delta and duration delta since `start` into a report
    /// for presentation.
    ///
    /// The report exposes the underlying numbers; formatting and destination
    /// remain the caller's decision.
    #[must_use]
    pub fn report(&self, start: Measurement, unit: TimeUnit) -> MeasurementReport {
        let cycles = self.elapsed_cycles(start);
        let elapsed = self.elapsed(start, unit);

        MeasurementReport::new(cycles, elapsed, unit)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
