//! Absolute-usage presentation of one snapshot.

use std::fmt;

use crate::ResourceSnapshot;

/// Absolute usage figures of one [`ResourceSnapshot`], ready for presentation.
///
/// Process figures are expressed against the memory still *available*
/// system-wide ("how much of what is left does this process occupy"), while
/// system figures are expressed against the totals. This is an absolute-usage
/// view of a single instant, not a comparison of two snapshots - for that,
/// see [`SnapshotDelta`][crate::SnapshotDelta].
///
/// The report holds the raw numbers and leaves formatting and destination to
/// the caller; the [`Display`][fmt::Display] implementation and
/// [`print_to_stdout()`](Self::print_to_stdout) are conveniences on top.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct UsageReport {
    /// The process's virtual memory use as a percentage of the virtual memory
    /// still available system-wide.
    pub process_virtual_percent: f64,

    /// System-wide virtual memory use as a percentage of the virtual total.
    pub system_virtual_percent: f64,

    /// The process's resident memory as a percentage of the physical memory
    /// still available system-wide.
    pub process_ram_percent: f64,

    /// System-wide physical memory use as a percentage of the physical total.
    pub system_ram_percent: f64,

    /// System-wide processor utilization in percent.
    pub cpu_system_percent: f64,

    /// The process's processor utilization in percent, when the snapshot
    /// carries one.
    pub cpu_process_percent: Option<f64>,
}

impl UsageReport {
    pub(crate) fn from_snapshot(snapshot: &ResourceSnapshot) -> Self {
        let virtual_available = snapshot
            .virtual_total
            .saturating_sub(snapshot.virtual_used_system);
        let ram_available = snapshot.ram_total.saturating_sub(snapshot.ram_used_system);

        Self {
            process_virtual_percent: percent_of(snapshot.virtual_used_process, virtual_available),
            system_virtual_percent: percent_of(snapshot.virtual_used_system, snapshot.virtual_total),
            process_ram_percent: percent_of(snapshot.ram_used_process, ram_available),
            system_ram_percent: percent_of(snapshot.ram_used_system, snapshot.ram_total),
            cpu_system_percent: snapshot.cpu_system_percent,
            cpu_process_percent: snapshot.cpu_process_percent,
        }
    }

    /// Prints the report to stdout.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        println!("{self}");
    }
}

/// `part` as a percentage of `whole`, zero when `whole` is zero.
#[expect(
    clippy::cast_precision_loss,
    reason = "memory byte counts are far below the 2^52 range where f64 rounding would matter here"
)]
fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    (part as f64) * 100.0 / (whole as f64)
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Virtual memory: process uses {:.1}% of available, system uses {:.1}% of total",
            self.process_virtual_percent, self.system_virtual_percent
        )?;
        writeln!(
            f,
            "RAM: process uses {:.1}% of available, system uses {:.1}% of total",
            self.process_ram_percent, self.system_ram_percent
        )?;
        write!(f, "CPU: system {:.1}%", self.cpu_system_percent)?;

        if let Some(cpu) = self.cpu_process_percent {
            write!(f, ", process {cpu:.1}%")?;
        }

        Ok(())
    }
}
