use std::time::Instant;

use crate::simulation::engine::KeplerEngine;
use crate::simulation::params::Parameters;

/// Time the tick loop across substep counts
///
/// The per-tick cost is linear in the substep count while the phase error
/// shrinks with it; this prints the cost side of that trade-off.
pub fn bench_substep_curve() {
    let substeps = [1u32, 4, 16, 64, 256];
    let ticks = 100_000u64;
    let fixed_dt = 0.02;

    for n in substeps {
        let mut parameters = Parameters::default();
        parameters.num_substeps = n;

        let mut engine = KeplerEngine::new(parameters).expect("default parameters are valid");

        let start = Instant::now();
        for _ in 0..ticks {
            engine.advance(fixed_dt);
        }
        let elapsed = start.elapsed();

        let ns_per_tick = elapsed.as_nanos() as f64 / ticks as f64;
        println!(
            "substeps = {:>4}: {:>10.1} ns/tick ({} ticks in {:?})",
            n, ns_per_tick, ticks, elapsed
        );
    }
}
