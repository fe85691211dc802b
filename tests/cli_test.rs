//! End-to-end tests of the `gvk-report` binary.

use std::process::{Command, Output};

use gvk_report::GvkReport;

const BIN: &str = env!("CARGO_BIN_EXE_gvk-report");

/// Command with a clean logging environment.
fn gvk_report() -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env_remove("GVK_REPORT_LOG_LEVEL")
        .env_remove("GVK_REPORT_LOG_FORMAT");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().unwrap()
}

// =============================================================================
// Default run
// =============================================================================

#[test]
fn no_args_prints_exact_text_and_exits_zero() {
    let out = run(&mut gvk_report());

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, GvkReport::embedded().render_text());
    assert!(stdout.starts_with("Unique gvks: \n*/*/ClusterRole\n"));
    assert!(stdout.ends_with(
        "\nrbac.authorization.k8s.io/v1/RoleBinding\nUnique gvks count: 35\n"
    ));
    assert!(out.stderr.is_empty());
}

#[test]
fn no_args_output_is_stable_across_runs() {
    let first = run(&mut gvk_report());
    let second = run(&mut gvk_report());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn environment_does_not_change_default_output() {
    let plain = run(&mut gvk_report());
    let log_path = std::env::temp_dir().join(format!("gvk-report-{}.log", std::process::id()));

    let out = run(gvk_report()
        .env("GVK_REPORT_FORMAT", "json")
        .env("GVK_REPORT_LOG_FILE", &log_path));

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, plain.stdout);
    assert!(!log_path.exists(), "no file may be written");
}

#[test]
fn debug_logging_stays_off_stdout() {
    let plain = run(&mut gvk_report());
    let out = run(gvk_report()
        .env("GVK_REPORT_LOG_LEVEL", "debug")
        .env("GVK_REPORT_LOG_FORMAT", "json"));

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, plain.stdout);
    assert!(String::from_utf8_lossy(&out.stderr).contains("deduplicated gvk lists"));
}

// =============================================================================
// Subcommands
// =============================================================================

#[test]
fn report_json_is_opt_in() {
    let out = run(gvk_report().args(["report", "--json"]));

    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["count"], 35);
    assert_eq!(value["gvks"].as_array().unwrap().len(), 35);
}

#[test]
fn report_without_flags_matches_default() {
    let plain = run(&mut gvk_report());
    let out = run(gvk_report().arg("report"));
    assert_eq!(out.stdout, plain.stdout);
}

#[test]
fn unknown_command_exits_one() {
    let out = run(gvk_report().arg("scan"));
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown command: scan"));
}

#[test]
fn unknown_report_flag_exits_one() {
    let out = run(gvk_report().args(["report", "--yaml"]));
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn version_prints_package_version() {
    let out = run(gvk_report().arg("--version"));
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("gvk-report {}\n", env!("CARGO_PKG_VERSION"))
    );
}

// =============================================================================
// Stdout failure
// =============================================================================

#[cfg(target_os = "linux")]
#[test]
fn full_stdout_exits_one_with_single_error() {
    let dev_full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    let out = run(gvk_report().stdout(dev_full));

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("failed to write report").count(), 1, "{}", stderr);
}
