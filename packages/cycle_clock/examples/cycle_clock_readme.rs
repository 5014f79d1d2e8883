//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `cycle_clock` package `README.md`.

fn main() {
    use cycle_clock::{Clock, TimeUnit};

    let clock = Clock::new();

    // Capture a measurement before the work starts.
    let start = clock.now();

    // Simulate some work.
    std::thread::sleep(std::time::Duration::from_millis(10));

    // Both views of the same interval.
    let cycles = clock.elapsed_cycles(start);
    let micros = clock.elapsed(start, TimeUnit::Microseconds);
    println!("Work took {cycles} cycles ({micros} microseconds)");

    // Or measure a callable in one step.
    let (sum, millis) = clock.benchmark(TimeUnit::Milliseconds, || {
        (0..1_000_000_u64).fold(0_u64, u64::wrapping_add)
    });
    println!("Summed to {sum} in {millis} milliseconds");

    // Or let the report do the formatting.
    clock.report(start, TimeUnit::Milliseconds).print_to_stdout();
}
