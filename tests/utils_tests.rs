//! Unit tests for reporting utilities.

use route_builder::config::Config;
use route_builder::error::SolutionError;
use route_builder::evaluator::Evaluator;
use route_builder::problem::{Problem, TimeWindow};
use route_builder::solution::{Route, SolutionSpace};
use route_builder::utils::{
    format_duration, round_seconds, save_solution, solution_report, SearchStatistics,
};
use std::fs;
use std::time::Duration;

/// Creates a problem with a depot and three locations, the last one closing early.
fn create_test_problem() -> Problem {
    let windows = vec![
        TimeWindow::new(0, 100_000),
        TimeWindow::new(0, 100_000),
        TimeWindow::new(0, 100_000),
        TimeWindow::new(0, 1_000),
    ];
    let matrix = vec![
        vec![0, 100, 200, 300],
        vec![100, 0, 100, 200],
        vec![200, 100, 0, 100],
        vec![300, 200, 100, 0],
    ];

    Problem::new(windows, matrix, Some(vec![0, 1, 2, 3]), 2, None).unwrap()
}

fn create_evaluated_space(problem: &Problem) -> SolutionSpace {
    let config = Config::new();
    let evaluator = Evaluator::new(problem, &config);

    let mut space = SolutionSpace::new(vec![Route::new(vec![0, 1, 2, 3])], 2).unwrap();
    space.set_cell(None, 3, 0);
    space.set_cell(Some(3), 1, 1);
    evaluator.evaluate_space(&mut space).unwrap();
    space
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_secs(0)), "0h 00m 00s");
    assert_eq!(format_duration(Duration::from_secs(3725)), "1h 02m 05s");
}

#[test]
fn test_round_seconds() {
    assert_eq!(round_seconds(Duration::from_micros(1_234_567)), 1.2346);
    assert_eq!(round_seconds(Duration::from_secs(2)), 2.0);
}

#[test]
fn test_solution_report() {
    let problem = create_test_problem();
    let space = create_evaluated_space(&problem);

    let report = solution_report(&space).unwrap();

    assert!(report.contains("[0,1,2] total weight: 3, duration: 2000, fined: 2000\n"));
    assert!(report.contains("[0,3] total weight: 3, duration: 2100, fined: 112100\n"));
    assert!(report.contains("fined duration: 114100 s\n"));
    assert!(report.contains("has fine: yes\n"));
}

#[test]
fn test_solution_report_requires_evaluation() {
    let mut space = SolutionSpace::new(vec![Route::new(vec![0, 1, 2])], 1).unwrap();
    space.set_cell(Some(2), 1, 0);
    space.set_cell(Some(1), 2, 0);

    assert_eq!(solution_report(&space), Err(SolutionError::NotDecoded));
}

#[test]
fn test_save_solution() {
    let problem = create_test_problem();
    let space = create_evaluated_space(&problem);
    let path = std::env::temp_dir().join("route_builder_report_test.txt");

    save_solution(&space, Duration::from_millis(1500), &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("[0,1,2]"));
    assert!(contents.contains("has fine: yes"));
    assert!(contents.ends_with("build time: 1.5s\n"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_search_statistics_format() {
    let statistics = SearchStatistics {
        iterations: 90,
        evaluations: 88,
        improvements: 4,
        skipped_mutations: 2,
        widest_row_limit: 3,
        runtime: Duration::from_secs(61),
        best_fined_duration_seconds: 12_000,
        best_duration_seconds: 11_000,
        best_route_count: 2,
    };

    let formatted = statistics.format();
    assert!(formatted.contains("- Iterations: 90"));
    assert!(formatted.contains("- Skipped Mutations: 2"));
    assert!(formatted.contains("- Runtime: 0h 01m 01s"));
    assert!(formatted.contains("- Best Routes: 2"));
}
