use std::fmt;

use crate::ResourceSnapshot;

/// Percentage deltas between two [`ResourceSnapshot`]s.
///
/// Memory deltas describe how much the *process's* use changed, expressed as
/// a percentage of the *current* snapshot's total, so "this workload consumed
/// 3% of the machine's virtual memory" reads directly off the figure. Deltas
/// are signed; a process that released memory produces negative figures.
///
/// A snapshot compared with itself yields zero for every figure.
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
/// let before = tracker.sample()?;
/// let after = tracker.sample()?;
///
/// let delta = after.delta_since(&before);
/// println!("{delta}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct SnapshotDelta {
    /// Change in the process's virtual memory use, as a percentage of the
    /// current snapshot's virtual total.
    pub virtual_delta_percent: f64,

    /// Change in the process's resident memory use, as a percentage of the
    /// current snapshot's physical total.
    pub ram_delta_percent: f64,

    /// Change in the process's processor utilization, or `None` when either
    /// snapshot has no utilization figure (see
    /// [`ResourceSnapshot::cpu_process_percent`]).
    pub cpu_delta_percent: Option<f64>,
}

impl SnapshotDelta {
    /// Computes the deltas from `previous` to `current`.
    #[must_use]
    pub fn between(previous: &ResourceSnapshot, current: &ResourceSnapshot) -> Self {
        let cpu_delta_percent = match (previous.cpu_process_percent, current.cpu_process_percent) {
            (Some(previous_cpu), Some(current_cpu)) => Some(current_cpu - previous_cpu),
            _ => None,
        };

        Self {
            virtual_delta_percent: used_delta_percent(
                previous.virtual_used_process,
                current.virtual_used_process,
                current.virtual_total,
            ),
            ram_delta_percent: used_delta_percent(
                previous.ram_used_process,
                current.ram_used_process,
                current.ram_total,
            ),
            cpu_delta_percent,
        }
    }

    /// Prints the deltas to stdout.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        println!("{self}");
    }
}

/// The change in a "used" figure as a percentage of the current total.
///
/// A total of zero can only come from a degenerate sensor reading; the delta
/// is reported as zero rather than dividing by it.
#[expect(
    clippy::cast_precision_loss,
    reason = "memory byte counts are far below the 2^52 range where f64 rounding would matter here"
)]
fn used_delta_percent(previous: u64, current: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let delta = i128::from(current).wrapping_sub(i128::from(previous));

    (delta as f64) * 100.0 / (total as f64)
}

impl fmt::Display for SnapshotDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process usage deltas: virtual {:+.3}%, RAM {:+.3}%",
            self.virtual_delta_percent, self.ram_delta_percent
        )?;

        if let Some(cpu) = self.cpu_delta_percent {
            write!(f, ", CPU {cpu:+.1}%")?;
        }

        Ok(())
    }
}
