//! Presentation of a finished measurement.

use std::fmt;

use crate::TimeUnit;

/// The cycle delta and duration delta of one measured interval, bundled for
/// presentation.
///
/// Produced by [`Clock::report()`][crate::Clock::report]. The report holds the
/// raw numbers and leaves formatting and destination to the caller; the
/// [`Display`][fmt::Display] implementation and [`print_to_stdout()`](Self::print_to_stdout)
/// are conveniences on top.
///
/// # Examples
///
/// ```
/// use cycle_clock::{Clock, TimeUnit};
///
/// let clock = Clock::new();
/// let start = clock.now();
///
/// // ... the code being measured ...
///
/// let report = clock.report(start, TimeUnit::Microseconds);
/// println!("{report}");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MeasurementReport {
    cycles: u64,
    elapsed: i64,
    unit: TimeUnit,
}

impl MeasurementReport {
    pub(crate) fn new(cycles: u64, elapsed: i64, unit: TimeUnit) -> Self {
        Self {
            cycles,
            elapsed,
            unit,
        }
    }

    /// Cycles elapsed over the measured interval.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Duration elapsed over the measured interval, in [`unit()`](Self::unit).
    #[must_use]
    pub fn elapsed(&self) -> i64 {
        self.elapsed
    }

    /// The unit in which [`elapsed()`](Self::elapsed) is expressed.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Prints the report to stdout.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        println!("{self}");
    }
}

impl fmt::Display for MeasurementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clock cycles: {}, {}: {}",
            self.cycles, self.unit, self.elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_unit() {
        let report = MeasurementReport::new(1_500, 42, TimeUnit::Milliseconds);

        assert_eq!(report.to_string(), "Clock cycles: 1500, milliseconds: 42");
    }

    #[test]
    fn accessors_expose_the_numbers() {
        let report = MeasurementReport::new(7, 9, TimeUnit::Hours);

        assert_eq!(report.cycles(), 7);
        assert_eq!(report.elapsed(), 9);
        assert_eq!(report.unit(), TimeUnit::Hours);
    }

    // The type is thread-safe.
    static_assertions::assert_impl_all!(MeasurementReport: Send, Sync);
}
