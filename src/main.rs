use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use crossing_sim::simulation::SimWorld;

#[derive(Parser)]
#[command(name = "crossing_sim")]
#[command(about = "Grid crossing simulation with autonomous traffic agents")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "200")]
    ticks: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Map file to load instead of the built-in demo crossing
    #[arg(long)]
    map: Option<PathBuf>,

    /// Print the summary and map every N ticks (0 disables)
    #[arg(long, default_value = "50")]
    report_every: u32,

    /// Ticks each light phase lasts
    #[arg(long, default_value = "19")]
    light_phase: u32,

    /// Pause between reports, in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut world = match &cli.map {
        Some(path) => SimWorld::load_map(path, cli.seed)?,
        None => SimWorld::create_demo_world(cli.seed)?,
    };
    world.set_light_phase_ticks(cli.light_phase);

    println!("Running crossing simulation in headless mode...");
    println!("Ticks: {}, Light phase: {} ticks", cli.ticks, cli.light_phase);
    println!();

    println!("Initial state:");
    world.print_summary();
    world.draw_map();

    for tick in 1..=cli.ticks {
        world.tick();

        if cli.report_every > 0 && tick % cli.report_every == 0 && tick < cli.ticks {
            println!("--- After tick {} ---", tick);
            world.print_summary();
            world.draw_map();

            if cli.delay_ms > 0 {
                std::thread::sleep(std::time::Duration::from_millis(cli.delay_ms));
            }
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();

    let stats = &world.stats;
    info!("=== SIMULATION COMPLETE ===");
    info!("Total ticks: {}", stats.ticks);
    info!("Total agents: {}", world.agents().len());
    info!("Alive agents: {}", world.alive_count());
    info!("Total deaths: {}", stats.deaths);
    info!("Total revivals: {}", stats.revivals);
    info!("Light changes: {}", stats.light_changes);
    info!("Move rate: {:.1}%", stats.move_rate());

    Ok(())
}
