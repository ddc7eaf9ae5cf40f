use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

const NETLIST: &str = "\
* rc lowpass
R1 in out 1k
C1 out 0 100n
.TRAN 1u 1m
.END
";

fn write_netlist(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("circuit.net");
    fs::write(&path, NETLIST).unwrap();
    path
}

fn spicebench() -> Command {
    Command::cargo_bin("spicebench").unwrap()
}

#[test]
fn param_inserts_before_terminator() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("param")
        .arg(&path)
        .args(["VCC", "5"])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[lines.len() - 2], ".PARAM VCC=5");
    assert_eq!(*lines.last().unwrap(), ".END");
}

#[test]
fn tran_rewrites_the_existing_line() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("tran")
        .arg(&path)
        .args(["2u", "2m", "--start", "0", "--max", "0"])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains(".TRAN 2u 2m 0 0"));
    assert!(!text.contains(".TRAN 1u 1m"));
}

#[test]
fn ac_rejects_inverted_frequency_range() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("ac")
        .arg(&path)
        .args(["1000", "10"])
        .assert()
        .failure();

    // Nothing was written.
    assert_eq!(fs::read_to_string(&path).unwrap(), NETLIST);
}

#[test]
fn ac_rejects_unknown_sweep_kind() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("ac")
        .arg(&path)
        .args(["10", "1000", "--sweep", "log"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&path).unwrap(), NETLIST);
}

#[test]
fn ac_writes_canonical_line() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("ac")
        .arg(&path)
        .args(["10", "100000", "--sweep", "oct", "--points", "50"])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains(".AC OCT 50 10 100000"));
}

#[test]
fn value_swaps_the_trailing_field() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("value")
        .arg(&path)
        .args(["R1", "22k"])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("R1 in out 22k"));
}

#[test]
fn component_declares_a_new_line() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("component")
        .arg(&path)
        .args(["R2", "4k7", "--nodes", "out,0"])
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[lines.len() - 2], "R2 out 0 4k7");
}

#[test]
fn show_prints_the_netlist() {
    let dir = TempDir::new().unwrap();
    let path = write_netlist(&dir);

    spicebench()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(NETLIST);
}
