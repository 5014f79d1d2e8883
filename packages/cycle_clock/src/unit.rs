use std::time::Duration;

use derive_more::Display;

/// The unit in which an elapsed duration is reported.
///
/// The unit carries its own human-readable label, so presentation code never
/// needs to inspect type identity to name it:
///
/// ```
/// use cycle_clock::TimeUnit;
///
/// assert_eq!(TimeUnit::Milliseconds.to_string(), "milliseconds");
/// ```
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TimeUnit {
    /// Whole seconds.
    #[display("seconds")]
    Seconds,

    /// Whole milliseconds.
    #[display("milliseconds")]
    Milliseconds,

    /// Whole microseconds.
    #[display("microseconds")]
    Microseconds,

    /// Whole nanoseconds.
    #[display("nanoseconds")]
    Nanoseconds,

    /// Whole minutes.
    #[display("minutes")]
    Minutes,

    /// Whole hours.
    #[display("hours")]
    Hours,
}

impl TimeUnit {
    /// Expresses a duration as a whole number of this unit, truncating toward
    /// zero (the same rounding the standard duration accessors apply).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use cycle_clock::TimeUnit;
    ///
    /// let duration = Duration::from_micros(1_234_567);
    ///
    /// assert_eq!(TimeUnit::Microseconds.count_of(duration), 1_234_567);
    /// assert_eq!(TimeUnit::Milliseconds.count_of(duration), 1_234);
    /// assert_eq!(TimeUnit::Seconds.count_of(duration), 1);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "truncation toward zero is the unit's defined rounding"
    )]
    pub fn count_of(self, duration: Duration) -> i64 {
        let count = match self {
            Self::Seconds => u128::from(duration.as_secs()),
            Self::Milliseconds => duration.as_millis(),
            Self::Microseconds => duration.as_micros(),
            Self::Nanoseconds => duration.as_nanos(),
            Self::Minutes => u128::from(duration.as_secs() / 60),
            Self::Hours => u128::from(duration.as_secs() / 3600),
        };

        i64::try_from(count).expect("durations in realistic ranges fit in i64 for every unit")
    }
}
