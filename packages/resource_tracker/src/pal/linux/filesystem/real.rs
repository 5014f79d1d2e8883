use std::{fs, io};

use crate::pal::linux::Filesystem;

/// A filesystem implementation that reads the real virtual filesystem of the
/// operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use
/// mock contents. Even then, whenever possible, unit tests should use real
/// contents for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetFilesystem;

impl Filesystem for BuildTargetFilesystem {
    fn get_meminfo_contents(&self) -> io::Result<String> {
        fs::read_to_string("/proc/meminfo")
    }

    fn get_proc_self_status_contents(&self) -> io::Result<String> {
        fs::read_to_string("/proc/self/status")
    }

    fn get_proc_stat_contents(&self) -> io::Result<String> {
        fs::read_to_string("/proc/stat")
    }
}
