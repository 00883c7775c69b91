//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibbench() -> Command {
    Command::cargo_bin("fibbench").expect("binary not found")
}

const F10: &str = "0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55";

#[test]
fn help_flag() {
    fibbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibbench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibbench"));
}

#[test]
fn exit_on_n() {
    fibbench()
        .args(["-n", "10", "-e", "3"])
        .write_stdin("N\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{F10}{F10}{F10}\n\n")))
        .stdout(predicate::str::contains(
            "Total Time elapsed for 3 executions: ",
        ))
        .stdout(predicate::str::ends_with(
            "milliseconds.\n\nHit enter to run away or N to exit.\n",
        ));
}

#[test]
fn lowercase_n_with_spaces_exits() {
    fibbench()
        .args(["-n", "1", "-e", "1"])
        .write_stdin("  n  \n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0, 1\n"));
}

#[test]
fn enter_runs_again() {
    fibbench()
        .args(["-n", "0", "-e", "1"])
        .write_stdin("\n\nN\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Time elapsed").count(3));
}

#[test]
fn closed_stdin_ends_session() {
    fibbench()
        .args(["-n", "5", "-e", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Time elapsed").count(1));
}

#[test]
fn loop_on_eof_respects_max_runs() {
    fibbench()
        .args(["-n", "5", "-e", "1", "-q", "--loop-on-eof", "--max-runs", "3"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Time elapsed").count(3))
        .stdout(predicate::str::contains("Hit enter").count(2));
}

#[test]
fn once_does_not_prompt() {
    fibbench()
        .args(["-n", "10", "-e", "1", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(F10))
        .stdout(predicate::str::contains("Hit enter").not());
}

#[test]
fn quiet_omits_sequence() {
    fibbench()
        .args(["-n", "10", "-e", "5", "-q", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\n\nTotal Time elapsed for 5 executions: ",
        ))
        .stdout(predicate::str::contains("55").not());
}

#[test]
fn verbose_adds_average() {
    fibbench()
        .args(["-e", "10", "-q", "-v", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average per execution:"));
}

#[test]
fn json_format() {
    let output = fibbench()
        .args(["-n", "20", "-e", "4", "-q", "--once", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8(output.stdout).unwrap().trim()).unwrap();
    assert_eq!(value["sequence_length"], 20);
    assert_eq!(value["executions"], 4);
    assert_eq!(value["width"], "u64");
}

#[test]
fn default_run_prints_f45() {
    fibbench()
        .args(["-e", "1", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89",
        ))
        .stdout(predicate::str::contains("701408733, 1134903170\n"));
}

#[test]
fn big_width_long_sequence() {
    fibbench()
        .args(["-n", "300", "-e", "1", "-w", "big", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "222232244629420445529739893461909967206666939096499764990979600",
        ));
}

#[test]
fn length_beyond_width_fails_with_config_code() {
    fibbench()
        .args(["-n", "94", "--once"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds the u64 limit"));
}

#[test]
fn zero_executions_rejected() {
    fibbench().args(["-e", "0"]).assert().failure();
}

#[test]
fn invalid_width_rejected() {
    fibbench().args(["-w", "i8"]).assert().failure();
}

#[test]
fn env_var_length() {
    fibbench()
        .env("FIBBENCH_LENGTH", "3")
        .env("FIBBENCH_EXECUTIONS", "2")
        .arg("--once")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0, 1, 1, 20, 1, 1, 2\n"))
        .stdout(predicate::str::contains("for 2 executions"));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("history.json");
    fibbench()
        .args(["-n", "10", "-e", "2", "-q", "-o", path.to_str().unwrap()])
        .write_stdin("\nN\n")
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["runs"], 2);
    assert_eq!(value["reports"].as_array().unwrap().len(), 2);
}

#[test]
fn shell_completion_bash() {
    fibbench()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibbench"));
}

#[test]
fn shell_completion_zsh() {
    fibbench()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibbench"));
}

#[test]
fn rust_log_debug_reaches_stderr() {
    fibbench()
        .env("RUST_LOG", "debug")
        .args(["-n", "3", "-e", "1", "--once"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting benchmark run"))
        .stdout(predicate::str::contains("starting benchmark run").not());
}

#[test]
fn default_logging_is_quiet() {
    fibbench()
        .env_remove("RUST_LOG")
        .args(["-n", "3", "-e", "1", "--once"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
