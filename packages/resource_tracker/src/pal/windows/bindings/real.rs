use std::{io, mem};

use windows::Win32::Foundation::FILETIME;
use windows::Win32::System::ProcessStatus::{
    K32GetProcessMemoryInfo, PROCESS_MEMORY_COUNTERS, PROCESS_MEMORY_COUNTERS_EX,
};
use windows::Win32::System::SystemInformation::{
    GetSystemInfo, GetSystemTimes, GlobalMemoryStatusEx, MEMORYSTATUSEX, SYSTEM_INFO,
};
use windows::Win32::System::Threading::GetCurrentProcess;

use crate::pal::windows::{Bindings, GlobalMemoryStatus, ProcessMemoryInfo, SystemTimes};

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock
/// bindings. Even then, whenever possible, unit tests should use real bindings
/// for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn global_memory_status(&self) -> io::Result<GlobalMemoryStatus> {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut status: MEMORYSTATUSEX = unsafe { mem::zeroed() };
        status.dwLength = u32::try_from(mem::size_of::<MEMORYSTATUSEX>())
            .expect("MEMORYSTATUSEX size fits in u32 by definition");

        // SAFETY: We pass a valid buffer with dwLength filled in as required.
        unsafe { GlobalMemoryStatusEx(&raw mut status) }.map_err(to_io_error)?;

        Ok(GlobalMemoryStatus {
            total_page_file: status.ullTotalPageFile,
            avail_page_file: status.ullAvailPageFile,
            total_phys: status.ullTotalPhys,
            avail_phys: status.ullAvailPhys,
        })
    }

    fn process_memory_info(&self) -> io::Result<ProcessMemoryInfo> {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut counters: PROCESS_MEMORY_COUNTERS_EX = unsafe { mem::zeroed() };
        let size = u32::try_from(mem::size_of::<PROCESS_MEMORY_COUNTERS_EX>())
            .expect("PROCESS_MEMORY_COUNTERS_EX size fits in u32 by definition");
        counters.cb = size;

        // SAFETY: The EX structure begins with the base structure, so the
        // cast is valid; cb tells the API which of the two it received.
        let result = unsafe {
            K32GetProcessMemoryInfo(
                GetCurrentProcess(),
                (&raw mut counters).cast::<PROCESS_MEMORY_COUNTERS>(),
                size,
            )
        };

        if !result.as_bool() {
            return Err(io::Error::last_os_error());
        }

        Ok(ProcessMemoryInfo {
            private_usage: u64::try_from(counters.PrivateUsage)
                .expect("usize fits in u64 on all supported targets"),
            working_set_size: u64::try_from(counters.WorkingSetSize)
                .expect("usize fits in u64 on all supported targets"),
        })
    }

    fn system_times(&self) -> io::Result<SystemTimes> {
        let mut idle = FILETIME::default();
        let mut kernel = FILETIME::default();
        let mut user = FILETIME::default();

        // SAFETY: We pass valid buffers for all three out parameters.
        unsafe {
            GetSystemTimes(
                Some(&raw mut idle),
                Some(&raw mut kernel),
                Some(&raw mut user),
            )
        }
        .map_err(to_io_error)?;

        Ok(SystemTimes {
            idle: filetime_ticks(idle),
            kernel: filetime_ticks(kernel),
            user: filetime_ticks(user),
        })
    }

    fn number_of_processors(&self) -> u32 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut info: SYSTEM_INFO = unsafe { mem::zeroed() };

        // SAFETY: We pass a valid buffer; the call cannot fail.
        unsafe { GetSystemInfo(&raw mut info) };

        info.dwNumberOfProcessors
    }
}

fn filetime_ticks(filetime: FILETIME) -> u64 {
    (u64::from(filetime.dwHighDateTime) << 32) | u64::from(filetime.dwLowDateTime)
}

fn to_io_error(error: windows::core::Error) -> io::Error {
    io::Error::other(error)
}
