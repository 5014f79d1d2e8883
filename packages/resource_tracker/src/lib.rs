#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Point-in-time system and process resource usage snapshots with delta
//! comparison.
//!
//! This package captures, on demand, one self-consistent reading of:
//! - system-wide and per-process virtual memory use,
//! - system-wide and per-process physical memory (RAM) use,
//! - system-wide processor utilization and the calling process's processor
//!   utilization since the previous reading.
//!
//! Two snapshots can then be compared to report how much of the machine a
//! piece of work consumed.
//!
//! The core functionality includes:
//! - [`ResourceTracker`] - Captures snapshots and owns the differential
//!   processor-time baseline
//! - [`ResourceSnapshot`] - One immutable reading of all the figures above
//! - [`SnapshotDelta`] - Percentage deltas between two snapshots
//! - [`UsageReport`] - Absolute usage of one snapshot, ready for presentation
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! # Simple usage
//!
//! ```
//! use resource_tracker::ResourceTracker;
//!
//! # fn main() -> Result<(), resource_tracker::Error> {
//! let tracker = ResourceTracker::new();
//!
//! // Arm the processor monitor once, before the first sample.
//! tracker.init_cpu_monitor()?;
//!
//! let before = tracker.sample()?;
//!
//! // ... the workload being observed ...
//!
//! let after = tracker.sample()?;
//!
//! // How much more (or less) of the machine the process now uses.
//! let delta = after.delta_since(&before);
//! println!("{delta}");
//!
//! // Absolute usage at one instant.
//! after.usage_report().print_to_stdout();
//! # Ok(())
//! # }
//! ```
//!
//! # Processor utilization is differential
//!
//! Process utilization is the ratio of processor time consumed to wall-clock
//! time elapsed *since the previous query*, normalized by the machine's
//! logical processor count. The first queryable figure therefore describes
//! the interval since [`init_cpu_monitor()`](ResourceTracker::init_cpu_monitor);
//! a query repeated before any wall-clock time has passed reports `None`
//! rather than dividing by zero. Calling `init_cpu_monitor()` again re-arms
//! the monitor, resetting the interval.
//!
//! # Threading
//!
//! All operations are synchronous; nothing samples in the background. The
//! differential baseline is the one piece of shared mutable state and is
//! guarded by a lock, so concurrent [`sample()`](ResourceTracker::sample)
//! calls from multiple threads serialize rather than race.
//!
//! # Platform support
//!
//! The resource sensors are implemented for Linux and Windows. On other
//! platforms every sampling operation reports
//! [`Error::SensorUnavailable`] instead of fabricating zeroed figures.

mod delta;
mod error;
mod pal;
mod report;
mod snapshot;
mod tracker;

pub use delta::SnapshotDelta;
pub use error::Error;
pub use report::UsageReport;
pub use snapshot::ResourceSnapshot;
pub use tracker::ResourceTracker;

pub(crate) const ERR_POISONED_LOCK: &str = "lock is poisoned - a thread holding it panicked";
