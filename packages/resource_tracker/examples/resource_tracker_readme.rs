//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `resource_tracker` package `README.md`.

fn main() {
    use resource_tracker::ResourceTracker;

    let tracker = ResourceTracker::new();

    // Arm the processor monitor once, before the first sample.
    tracker
        .init_cpu_monitor()
        .expect("resource sensors are not available on this platform");

    let before = tracker.sample().expect("sampling failed");

    // A workload worth observing: hold 64 MiB and burn some processor time.
    let held = vec![1_u8; 64 * 1024 * 1024];
    let sum = held.iter().map(|&b| u64::from(b)).sum::<u64>();
    std::hint::black_box(sum);

    let after = tracker.sample().expect("sampling failed");

    // How much more of the machine the process now uses.
    after.delta_since(&before).print_to_stdout();

    // Absolute usage at this instant.
    after.usage_report().print_to_stdout();

    drop(held);
}
