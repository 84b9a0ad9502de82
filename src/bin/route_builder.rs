//! Command-line entry point: build routes for a JSON problem instance.

use clap::Parser;
use route_builder::config::Config;
use route_builder::problem::Problem;
use route_builder::utils::{save_solution, solution_report};
use route_builder::RouteBuilder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "route-builder", version, about = "Build vehicle routes within a time budget")]
struct Args {
    /// Problem instance in JSON format
    instance: PathBuf,

    /// Search time limit in seconds
    #[arg(short, long, default_value_t = 5.0)]
    time_limit: f64,

    /// Recursion depth of the search
    #[arg(short, long, default_value_t = 2)]
    depth: u32,

    /// Seed for a reproducible search
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let problem = Problem::from_file(&args.instance)?;
    log::info!(
        "Loaded {} with {} locations",
        args.instance.display(),
        problem.location_count()
    );

    let mut config = Config::new()
        .with_time_limit_secs(args.time_limit)
        .with_search_depth(args.depth);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut builder = RouteBuilder::new(problem, config);
    let Some(space) = builder.search_routes()? else {
        println!("Nothing to route");
        return Ok(());
    };

    print!("{}", solution_report(&space)?);
    println!("build time: {}s", builder.build_duration_seconds());
    log::debug!("{}", builder.statistics.format());

    if let Some(path) = args.output {
        save_solution(&space, builder.build_duration, &path)?;
        log::info!("Saved report to {}", path.display());
    }

    Ok(())
}
