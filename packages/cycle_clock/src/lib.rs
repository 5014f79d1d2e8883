//! Paired cycle-counter and monotonic-clock measurements for benchmarking.
//!
//! This package provides a dual-clock benchmarking primitive: every measurement
//! pairs a raw hardware cycle counter reading with a monotonic wall-clock
//! timestamp, so a single "begin" captures both and a single "end" reports both
//! the elapsed cycle count and the elapsed duration in a caller-chosen unit.
//!
//! The core functionality includes:
//! - [`Clock`] - Captures measurements and computes elapsed cycles/durations
//! - [`Measurement`] - An immutable `(cycle count, timestamp)` pair
//! - [`TimeUnit`] - The unit in which elapsed durations are reported
//! - [`MeasurementReport`] - Cycle and duration deltas bundled for presentation
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! # Simple usage
//!
//! ```
//! use cycle_clock::{Clock, TimeUnit};
//!
//! let clock = Clock::new();
//! let start = clock.now();
//!
//! // Perform some work worth measuring.
//! let mut sum = 0_u64;
//! for i in 0..10_000 {
//!     sum = sum.wrapping_add(i);
//! }
//! std::hint::black_box(sum);
//!
//! let cycles = clock.elapsed_cycles(start);
//! let micros = clock.elapsed(start, TimeUnit::Microseconds);
//! println!("{cycles} cycles, {micros} microseconds");
//! ```
//!
//! # Benchmarking a callable
//!
//! ```
//! use cycle_clock::{Clock, TimeUnit};
//!
//! let clock = Clock::new();
//!
//! let (output, elapsed) = clock.benchmark(TimeUnit::Nanoseconds, || {
//!     (0..1000_u64).fold(0_u64, u64::wrapping_add)
//! });
//!
//! assert_eq!(output, 499_500);
//! assert!(elapsed >= 0);
//! ```
//!
//! # Reporting
//!
//! ```
//! use cycle_clock::{Clock, TimeUnit};
//!
//! let clock = Clock::new();
//! let start = clock.now();
//!
//! // ... the code being measured ...
//!
//! // The report holds the raw numbers; printing is up to the caller.
//! let report = clock.report(start, TimeUnit::Milliseconds);
//! assert!(report.elapsed() >= 0);
//! report.print_to_stdout();
//! ```
//!
//! # Portability
//!
//! Cycle counts come from the processor's timestamp counter (`RDTSC` on x86,
//! `CNTVCT_EL0` on AArch64). Comparing counts taken on different processors is
//! only meaningful where the counter is synchronized across cores, which is the
//! case on all mainstream contemporary hardware but is not guaranteed by the
//! architecture. On architectures without an accessible counter, a monotonic
//! nanosecond reading stands in so that deltas remain well-defined.
//!
//! Elapsed durations use the monotonic system clock and are meaningful across
//! threads without caveats.

mod clock;
mod measurement;
mod pal;
mod report;
mod unit;

pub use clock::Clock;
pub use measurement::Measurement;
pub use report::MeasurementReport;
pub use unit::TimeUnit;
