use std::time::Instant;

use crate::pal::Bindings;

/// Bindings that target the real hardware that the build is targeting.
///
/// You would only use different bindings in unit tests that need to use mock
/// bindings. Even then, whenever possible, tests should use real bindings for
/// maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    #[cfg(target_arch = "x86_64")]
    fn cycle_count(&self) -> u64 {
        // SAFETY: RDTSC only reads the timestamp counter; no preconditions.
        unsafe { core::arch::x86_64::_rdtsc() }
    }

    #[cfg(target_arch = "x86")]
    fn cycle_count(&self) -> u64 {
        // SAFETY: RDTSC only reads the timestamp counter; no preconditions.
        unsafe { core::arch::x86::_rdtsc() }
    }

    #[cfg(target_arch = "aarch64")]
    fn cycle_count(&self) -> u64 {
        let count: u64;

        // SAFETY: CNTVCT_EL0 is readable from user mode; the read has no side effects.
        unsafe {
            core::arch::asm!(
                "mrs {count}, cntvct_el0",
                count = out(reg) count,
                options(nomem, nostack, preserves_flags)
            );
        }

        count
    }

    /// Monotonic nanoseconds standing in for a cycle counter on architectures
    /// where no counter is accessible from user mode. Deltas remain monotonic;
    /// the absolute values are not cycles.
    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    fn cycle_count(&self) -> u64 {
        use std::sync::OnceLock;

        static EPOCH: OnceLock<Instant> = OnceLock::new();

        let epoch = *EPOCH.get_or_init(Instant::now);
        u64::try_from(epoch.elapsed().as_nanos())
            .expect("unrealistically long process lifetime, never going to happen with real clocks")
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot read hardware counters")]
    fn cycle_counts_are_usable_as_deltas() {
        let bindings = BuildTargetBindings;

        let first = bindings.cycle_count();
        let second = bindings.cycle_count();

        // Wrapping distance must be small relative to the counter range. This
        // holds both for a real counter and for the nanosecond stand-in.
        let delta = second.wrapping_sub(first);
        assert!(delta < u64::MAX / 2);
    }
}
