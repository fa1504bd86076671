use springchain::config::chain::DemoChain;
use springchain::output::{write_frames_csv, write_trajectory_csv};
use springchain::physics::modes::normal_modes;
use springchain::render::SceneLayout;
use springchain::simulation::Simulator;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = DemoChain::parameters();
    let mut simulator = Simulator::new(params)?;

    for mode in normal_modes(simulator.chain()).iter() {
        println!(
            "Normal mode: f = {:.4} Hz, T = {:.4} s, shape = [{:.3}, {:.3}, {:.3}]",
            mode.frequency(),
            mode.period(),
            mode.shape[0],
            mode.shape[1],
            mode.shape[2]
        );
    }

    simulator.run();
    let energy_error = simulator.energy_error();
    let trajectory = simulator.into_trajectory();

    let layout = SceneLayout::new(&trajectory, params.rest_length, params.t_max);
    log::info!(
        "{} frames at {} ms, displacement range [{:.4}, {:.4}] m",
        layout.frame_count,
        layout.frame_interval_ms,
        layout.series_x.min,
        layout.series_x.max
    );

    let output_dir = Path::new("output");
    write_trajectory_csv(&output_dir.join("trajectory.csv"), &trajectory)?;
    write_frames_csv(&output_dir.join("frames.csv"), &trajectory, params.rest_length)?;

    println!("Relative energy error at t_max: {:.3e}", energy_error);
    println!("Simulation data has been written to output/trajectory.csv and output/frames.csv");

    Ok(())
}
