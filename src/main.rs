use keplersim::{build_scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "pluto.yaml")]
    file_name: String,

    #[arg(short = 'n', default_value_t = 10_000)]
    ticks: u64,

    #[arg(short = 'd', default_value_t = 0.02)]
    tick_duration: f64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut engine = build_scenario(scenario_cfg)?;

    println!(
        "a = {:.4}, T = {:.4}, G = {:.4}, T^2/a^3 = {:.4}",
        engine.semi_major_axis(),
        engine.period(),
        engine.newton_g(),
        engine.kepler_ratio()
    );

    // Headless fixed-rate loop; prints roughly ten progress lines
    let report_every = (args.ticks / 10).max(1);
    for tick in 0..args.ticks {
        engine.advance(args.tick_duration);

        if tick % report_every == 0 {
            let p = engine.planet_position();
            println!(
                "t = {:>10.3}: planet at ({:>9.4}, {:>9.4}), swept {:>7.4} rad",
                (tick + 1) as f64 * args.tick_duration,
                p.x,
                p.y,
                engine.swept_angle()
            );
        }
    }

    //bench_substep_curve();

    Ok(())
}
