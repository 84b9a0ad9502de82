//! Basic example of using the route builder library.

use route_builder::config::Config;
use route_builder::problem::{Problem, TimeWindow};
use route_builder::utils::{format_duration, solution_report};
use route_builder::RouteBuilder;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Nine locations open from 07:00 to 22:00, depot first
    let time_windows = vec![TimeWindow::new(25200, 79200); 9];

    let duration_matrix = vec![
        vec![0, 2751, 4644, 3427, 8583, 2689, 3859, 2778, 3991],
        vec![0, 1302, 4261, 3656, 8774, 3232, 3569, 2728, 3782],
        vec![0, 4394, 1164, 5064, 10331, 5012, 4200, 4079, 4807],
        vec![0, 3622, 4937, 1064, 7762, 2993, 4015, 3010, 3722],
        vec![0, 9131, 10773, 8133, 900, 8625, 9624, 8305, 9270],
        vec![0, 3064, 4791, 2908, 8084, 1093, 3921, 2773, 3929],
        vec![0, 3613, 4271, 4185, 9330, 4173, 1121, 3238, 3475],
        vec![0, 2693, 4077, 3029, 7872, 2948, 3153, 1107, 3291],
        vec![0, 3985, 4882, 4014, 8943, 4297, 3561, 3523, 1258],
    ];

    let pickup_weights_kg = vec![0, 1, 1, 1, 1, 1, 1, 1, 1];

    let problem = Problem::new(
        time_windows,
        duration_matrix,
        Some(pickup_weights_kg),
        8,
        Some(15),
    )?;

    let config = Config::new().with_time_limit(Duration::from_secs(5));

    let mut builder = RouteBuilder::new(problem, config);
    match builder.search_routes()? {
        Some(space) => {
            print!("{}", solution_report(&space)?);
            println!("build time: {}s", builder.build_duration_seconds());
            println!();
            println!("{}", builder.statistics.format());
            println!("Search completed in {}", format_duration(builder.build_duration));
        }
        None => println!("Nothing to route"),
    }

    Ok(())
}
