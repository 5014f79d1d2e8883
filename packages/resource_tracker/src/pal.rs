//! Platform Abstraction Layer (PAL) - the operating system sensor behind the
//! public tracker type.

mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

#[cfg(all(target_os = "linux", not(miri)))]
mod linux;
#[cfg(all(target_os = "linux", not(miri)))]
pub(crate) use linux::*;

#[cfg(all(windows, not(miri)))]
mod windows;
#[cfg(all(windows, not(miri)))]
pub(crate) use windows::*;

// The fallback is the primary implementation on unsupported platforms and
// under Miri, which cannot talk to the real operating system.
#[cfg(any(miri, not(any(target_os = "linux", windows))))]
mod fallback;
#[cfg(any(miri, not(any(target_os = "linux", windows))))]
pub(crate) use fallback::*;

#[cfg(test)]
mod fake;
#[cfg(test)]
pub(crate) use fake::*;
