use std::fmt::Debug;
use std::time::Instant;

/// Hardware reads backing the public clock type.
///
/// All counter and clock reads go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// Reads the processor cycle counter.
    ///
    /// The counter starts at an arbitrary reference point; only differences
    /// between two readings are meaningful.
    fn cycle_count(&self) -> u64;

    // We also put this here because Rust does not (yet) support a proper clock
    // abstraction, so without this we have nothing to mock. This just provides
    // a mock wrapper around `Instant`.
    fn now(&self) -> Instant;
}
