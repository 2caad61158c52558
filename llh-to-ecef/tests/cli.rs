//! Tests de bout en bout du binaire llh-to-ecef

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_llh-to-ecef"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run llh-to-ecef")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const USAGE: &str = "Usage: llh-to-ecef lat_degrees long_degrees hae_km\n";

#[test]
fn test_origin() {
    let output = run(&["0", "0", "0"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "6378.1363\n0.0\n0.0\n");
}

#[test]
fn test_north_pole() {
    let output = run(&["90", "0", "0"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0.0\n0.0\n6356.751601\n");
}

#[test]
fn test_negative_arguments() {
    let output = run(&["-33.8688", "151.2093", "0.058"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "-4646.092971\n2553.229258\n-3534.404308\n");
}

#[test]
fn test_western_longitude() {
    let output = run(&["37.7749", "-122.4194", "0.016"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "-2706.181332\n-4261.069701\n3885.734849\n");
}

#[test]
fn test_out_of_range_accepted() {
    let output = run(&["100", "370", "5"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "-1095.138713\n-193.102503\n6264.466297\n");
}

#[test]
fn test_two_arguments_prints_usage() {
    let output = run(&["0", "0"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), USAGE);
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run(&[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), USAGE);
}

#[test]
fn test_four_arguments_prints_usage() {
    let output = run(&["1", "2", "3", "4"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), USAGE);
}

#[test]
fn test_invalid_number_fails() {
    let output = run(&["abc", "0", "0"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("invalid numeric argument for lat_degrees: 'abc'"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_json_format() {
    let output = run(&["--format", "json", "0", "0", "0"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "{\"x_km\":6378.1363,\"y_km\":0.0,\"z_km\":0.0}\n"
    );
}

#[test]
fn test_precision_option() {
    let output = run(&["--precision", "3", "45", "45", "1"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "3194.919\n3194.919\n4488.055\n");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = run(&["-vv", "0", "0", "0"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "6378.1363\n0.0\n0.0\n");
    assert!(!stderr(&output).is_empty());
}

#[test]
fn test_negative_exponent_height() {
    let output = run(&["0", "0", "-6.5e-3"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "6378.1298\n0.0\n0.0\n");
}

#[test]
fn test_negative_exponent_latitude() {
    let output = run(&["-1E-3", "0", "0"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "6378.136299\n0.0\n-0.110574\n");
}

#[test]
fn test_all_arguments_negative_exponent() {
    let output = run(&["-1e-07", "-2.5e-2", "-1e-3"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "6378.134693\n-2.782986\n-1.1e-05\n");
}

#[test]
fn test_negative_exponent_after_flags() {
    let output = run(&["-q", "--precision", "4", "-1E-3", "0", "0"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "6378.1363\n0.0\n-0.1106\n");
}

#[test]
fn test_negative_infinity_reaches_converter() {
    let output = run(&["-inf", "0", "0"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "nan\nnan\nnan\n");
}

#[test]
fn test_negative_infinite_height() {
    let output = run(&["0", "0", "-inf"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "-inf\nnan\nnan\n");
}

#[test]
fn test_hyphenated_garbage_is_a_parse_error() {
    let output = run(&["-abc", "0", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("invalid numeric argument for lat_degrees: '-abc'"),
        "stderr: {}",
        stderr(&output)
    );
}
