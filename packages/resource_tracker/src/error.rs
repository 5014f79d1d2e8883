use std::io;

use thiserror::Error;

/// Errors that can occur when querying the operating system's resource sensors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operating system does not expose the resource counters this package
    /// reads. Sampling is not supported on this platform.
    #[error("resource sensors are not available on this platform")]
    SensorUnavailable,

    /// A resource counter exists on this platform but querying it failed.
    ///
    /// Queries are not retried internally; whether a retry makes sense is the
    /// caller's decision.
    #[error("failed to query {counter}: {source}")]
    Sensor {
        /// The counter that was being queried.
        counter: &'static str,

        /// The underlying operating system error.
        source: io::Error,
    },

    /// A resource counter returned data this package could not interpret.
    #[error("could not interpret {counter} data: {details}")]
    Malformed {
        /// The counter whose data was malformed.
        counter: &'static str,

        /// A human-readable description of the problem.
        details: String,
    },

    /// A processor utilization figure was requested before the monitor was
    /// armed with [`init_cpu_monitor()`][crate::ResourceTracker::init_cpu_monitor].
    #[error("the processor monitor is not armed; call init_cpu_monitor() first")]
    MonitorNotArmed,
}

/// A specialized `Result` type for resource tracker operations, returning the
/// crate's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
