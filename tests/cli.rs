//! CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

fn seisprep() -> Command {
    Command::cargo_bin("seisprep").unwrap()
}

#[test]
fn missing_input_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    seisprep()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("strongest-quakes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn strongest_quakes_writes_the_standard_artifact() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("seismic_data.csv"),
        "Date,Magnitude\n2023-02-02,6.5\n2023-01-15,7.8\n",
    )
    .unwrap();

    seisprep()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("strongest-quakes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed and saved"));

    assert!(dir.path().join("seismic_data_ordenado.csv").exists());
}

#[test]
fn json_report_carries_row_counts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("seismic_data.csv"),
        "Date,Magnitude\n2023-02-02,6.5\n2023-01-15,7.8\n",
    )
    .unwrap();

    seisprep()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--report")
        .arg("json")
        .arg("strongest-quakes")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"job\": \"strongest-quakes\""))
        .stdout(predicate::str::contains("\"rows_written\": 2"));
}

#[test]
fn explicit_paths_override_the_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("events.csv");
    let output = dir.path().join("ranked.csv");
    std::fs::write(&input, "Date,Magnitude\n2023-02-02,6.5\n").unwrap();

    seisprep()
        .arg("strongest-quakes")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}
