use std::fmt::Debug;
use std::io;

/// Linux exposes the resource counters we need as a virtual filesystem. This
/// trait abstracts that filesystem to allow it to be mocked.
///
/// The scope of this trait is limited to only the virtual filesystem exposed
/// by the OS. We do not expect to do "real" file I/O in this layer. All I/O is
/// synchronous and blocking because we expect it to hit a fast path in the OS,
/// given the data is never on a real storage device.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Filesystem: Debug + Send + Sync + 'static {
    /// Gets the contents of the /proc/meminfo file.
    ///
    /// This is a plaintext file with "Key:    value kB" lines.
    fn get_meminfo_contents(&self) -> io::Result<String>;

    /// Gets the contents of the /proc/self/status file for the current process.
    ///
    /// This is a plaintext file with "Key:    value" pairs; the memory fields
    /// carry a kB suffix.
    fn get_proc_self_status_contents(&self) -> io::Result<String>;

    /// Gets the contents of the /proc/stat file.
    ///
    /// The first line aggregates processor time over all processors, in
    /// USER_HZ ticks: "cpu  user nice system idle iowait irq softirq steal ...".
    fn get_proc_stat_contents(&self) -> io::Result<String>;
}
