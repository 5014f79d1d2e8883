//! Platform facade for switching between real and fake implementations.

use std::fmt::Debug;
use std::time::{Duration, Instant};

use crate::error::Result;
#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{
    BUILD_TARGET_PLATFORM, BuildTargetPlatform, MemoryCounters, Platform, ProcessMemoryCounters,
    SystemCpuTimes,
};

/// Facade that allows switching between the real platform and a fake one.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    /// The platform the build is targeting.
    Real(&'static BuildTargetPlatform),

    /// Fake implementation with scripted values, for testing.
    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(fake: FakePlatform) -> Self {
        Self::Fake(fake)
    }
}

impl Platform for PlatformFacade {
    fn memory_counters(&self) -> Result<MemoryCounters> {
        match self {
            Self::Real(platform) => platform.memory_counters(),
            #[cfg(test)]
            Self::Fake(platform) => platform.memory_counters(),
        }
    }

    fn process_memory_counters(&self) -> Result<ProcessMemoryCounters> {
        match self {
            Self::Real(platform) => platform.process_memory_counters(),
            #[cfg(test)]
            Self::Fake(platform) => platform.process_memory_counters(),
        }
    }

    fn system_cpu_times(&self) -> Result<SystemCpuTimes> {
        match self {
            Self::Real(platform) => platform.system_cpu_times(),
            #[cfg(test)]
            Self::Fake(platform) => platform.system_cpu_times(),
        }
    }

    fn process_cpu_time(&self) -> Result<Duration> {
        match self {
            Self::Real(platform) => platform.process_cpu_time(),
            #[cfg(test)]
            Self::Fake(platform) => platform.process_cpu_time(),
        }
    }

    fn processor_count(&self) -> usize {
        match self {
            Self::Real(platform) => platform.processor_count(),
            #[cfg(test)]
            Self::Fake(platform) => platform.processor_count(),
        }
    }

    fn now(&self) -> Instant {
        match self {
            Self::Real(platform) => platform.now(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now(),
        }
    }
}

impl From<&'static BuildTargetPlatform> for PlatformFacade {
    fn from(platform: &'static BuildTargetPlatform) -> Self {
        Self::Real(platform)
    }
}

#[cfg(test)]
impl From<FakePlatform> for PlatformFacade {
    fn from(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(platform) => platform.fmt(f),
            #[cfg(test)]
            Self::Fake(platform) => platform.fmt(f),
        }
    }
}
