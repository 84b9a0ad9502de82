//! Unit tests for problem validation and loading.

use route_builder::error::ProblemError;
use route_builder::problem::{Problem, TimeWindow};
use std::fs;

fn square_matrix(n: usize) -> Vec<Vec<u64>> {
    (0..n)
        .map(|i| (0..n).map(|j| (i as u64).abs_diff(j as u64) * 60).collect())
        .collect()
}

#[test]
fn test_problem_accessors() {
    let windows = vec![TimeWindow::new(0, 10), TimeWindow::new(5, 20)];
    let problem = Problem::new(windows, square_matrix(2), Some(vec![0, 4]), 3, Some(9)).unwrap();

    assert_eq!(problem.location_count(), 2);
    assert_eq!(problem.time_window(1).start_seconds(), 5);
    assert_eq!(problem.time_window(1).finish_seconds(), 20);
    assert_eq!(problem.duration(0, 1), 60);
    assert_eq!(problem.pickup_weight(1), 4);
    assert_eq!(problem.max_executors(), 3);
    assert_eq!(problem.max_executor_weight(), Some(9));
}

#[test]
fn test_missing_weights_are_zero() {
    let windows = vec![TimeWindow::new(0, 10); 3];

    let problem = Problem::new(windows.clone(), square_matrix(3), None, 1, None).unwrap();
    assert!((0..3).all(|i| problem.pickup_weight(i) == 0));

    let problem = Problem::new(windows, square_matrix(3), Some(vec![0, 7]), 1, None).unwrap();
    assert_eq!(problem.pickup_weight(1), 7);
    assert_eq!(problem.pickup_weight(2), 0);
}

#[test]
fn test_empty_fleet_is_rejected() {
    let windows = vec![TimeWindow::new(0, 10); 2];
    let result = Problem::new(windows, square_matrix(2), None, 0, None);
    assert!(matches!(result, Err(ProblemError::EmptyFleet)));
}

#[test]
fn test_misaligned_inputs_are_rejected() {
    let result = Problem::new(vec![TimeWindow::new(0, 10); 2], square_matrix(3), None, 1, None);
    assert!(matches!(
        result,
        Err(ProblemError::TimeWindowCount {
            expected: 3,
            found: 2
        })
    ));

    let mut matrix = square_matrix(3);
    matrix[1].pop();
    let result = Problem::new(vec![TimeWindow::new(0, 10); 3], matrix, None, 1, None);
    assert!(matches!(
        result,
        Err(ProblemError::MatrixShape {
            row: 1,
            expected: 3,
            found: 2
        })
    ));

    let result = Problem::new(
        vec![TimeWindow::new(0, 10); 2],
        square_matrix(2),
        Some(vec![0, 1, 2]),
        1,
        None,
    );
    assert!(matches!(
        result,
        Err(ProblemError::PickupWeightCount {
            expected: 2,
            found: 3
        })
    ));
}

#[test]
fn test_from_json() {
    let json = r#"{
        "time_windows": [
            {"start_seconds": 25200, "finish_seconds": 79200},
            {"start_seconds": 25200, "finish_seconds": 79200},
            {"start_seconds": 30000, "finish_seconds": 40000}
        ],
        "duration_matrix": [[0, 10, 20], [10, 0, 30], [20, 30, 0]],
        "pickup_weights_kg": [0, 2, 3],
        "max_executors": 2,
        "max_executor_weight_kg": 4
    }"#;

    let problem = Problem::from_json(json).unwrap();
    assert_eq!(problem.location_count(), 3);
    assert_eq!(problem.time_window(2).start_seconds(), 30000);
    assert_eq!(problem.duration(1, 2), 30);
    assert_eq!(problem.pickup_weight(2), 3);
    assert_eq!(problem.max_executors(), 2);
    assert_eq!(problem.max_executor_weight(), Some(4));
}

#[test]
fn test_from_json_optional_fields() {
    let json = r#"{
        "time_windows": [{"start_seconds": 0, "finish_seconds": 100}],
        "duration_matrix": [[0]],
        "max_executors": 1
    }"#;

    let problem = Problem::from_json(json).unwrap();
    assert_eq!(problem.pickup_weight(0), 0);
    assert_eq!(problem.max_executor_weight(), None);
}

#[test]
fn test_from_json_errors() {
    assert!(matches!(
        Problem::from_json("{ not json"),
        Err(ProblemError::Json(_))
    ));

    let json = r#"{
        "time_windows": [{"start_seconds": 0, "finish_seconds": 100}],
        "duration_matrix": [[0]],
        "max_executors": 0
    }"#;
    assert!(matches!(
        Problem::from_json(json),
        Err(ProblemError::EmptyFleet)
    ));
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join("route_builder_problem_test.json");
    fs::write(
        &path,
        r#"{
            "time_windows": [
                {"start_seconds": 0, "finish_seconds": 100},
                {"start_seconds": 0, "finish_seconds": 100}
            ],
            "duration_matrix": [[0, 5], [5, 0]],
            "max_executors": 1
        }"#,
    )
    .unwrap();

    let problem = Problem::from_file(&path).unwrap();
    assert_eq!(problem.duration(0, 1), 5);

    fs::remove_file(&path).unwrap();

    assert!(matches!(
        Problem::from_file(&path),
        Err(ProblemError::Io(_))
    ));
}
