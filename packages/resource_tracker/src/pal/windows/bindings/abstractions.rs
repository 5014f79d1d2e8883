use std::fmt::Debug;
use std::io;

/// Raw figures from `GlobalMemoryStatusEx`, in bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GlobalMemoryStatus {
    /// Current committed memory limit for the system (physical memory plus
    /// page files).
    pub(crate) total_page_file: u64,

    /// Memory the system can still commit.
    pub(crate) avail_page_file: u64,

    /// Physical memory installed.
    pub(crate) total_phys: u64,

    /// Physical memory currently available.
    pub(crate) avail_phys: u64,
}

/// Raw figures from `K32GetProcessMemoryInfo` for the current process, in bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProcessMemoryInfo {
    /// Committed private memory (the process's virtual memory use).
    pub(crate) private_usage: u64,

    /// The process's working set.
    pub(crate) working_set_size: u64,
}

/// Cumulative system times from `GetSystemTimes`, in 100 ns `FILETIME` units.
///
/// Kernel time includes idle time, per the API's definition.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SystemTimes {
    pub(crate) idle: u64,
    pub(crate) kernel: u64,
    pub(crate) user: u64,
}

/// Bindings for FFI calls into the operating system.
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    fn global_memory_status(&self) -> io::Result<GlobalMemoryStatus>;

    fn process_memory_info(&self) -> io::Result<ProcessMemoryInfo>;

    fn system_times(&self) -> io::Result<SystemTimes>;

    fn number_of_processors(&self) -> u32;
}
