//! Platform abstraction layer for hardware counter and clock reads.
//!
//! All counter reads go through the [`Bindings`] trait, allowing tests to
//! substitute mock readings for the real hardware.

mod abstractions;
mod facade;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
pub(crate) use real::*;
