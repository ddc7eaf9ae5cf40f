use std::fs;

use spicebench_netlist::{Directive, EditOutcome, Netlist, NetlistError, SweepKind};
use tempfile::TempDir;

const BASIC_NETLIST: &str = "\
* rc lowpass
R1 in out 1k
C1 out 0 100n
V1 in 0 DC 5
.TRAN 1u 1m
.END
";

fn write_netlist(dir: &TempDir, content: &str) -> Netlist {
    let path = dir.path().join("circuit.net");
    fs::write(&path, content).unwrap();
    Netlist::new(path)
}

#[test]
fn insert_goes_directly_before_terminator() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, BASIC_NETLIST);

    let outcome = netlist.apply(&Directive::param("VCC", "5")).unwrap();
    assert_eq!(outcome, EditOutcome::Inserted);

    let text = netlist.text().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let original: Vec<&str> = BASIC_NETLIST.lines().collect();

    assert_eq!(lines.len(), original.len() + 1);
    assert_eq!(&lines[..original.len() - 1], &original[..original.len() - 1]);
    assert_eq!(lines[lines.len() - 2], ".PARAM VCC=5");
    assert_eq!(*lines.last().unwrap(), ".END");
}

#[test]
fn replace_rewrites_existing_transient_line() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, BASIC_NETLIST);

    let tran = Directive::tran("2u", "2m", Some("0"), Some("0"), false);
    let outcome = netlist.apply(&tran).unwrap();
    assert_eq!(outcome, EditOutcome::Replaced);

    let text = netlist.text().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[4], ".TRAN 2u 2m 0 0");
    assert_eq!(*lines.last().unwrap(), ".END");
    // Everything apart from the transient line is untouched.
    assert_eq!(lines[0], "* rc lowpass");
    assert_eq!(lines[1], "R1 in out 1k");
    assert_eq!(lines[2], "C1 out 0 100n");
    assert_eq!(lines[3], "V1 in 0 DC 5");
}

#[test]
fn repeated_application_stabilizes_after_one_call() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, BASIC_NETLIST);

    let tran = Directive::tran("2u", "2m", None, None, false);
    assert_eq!(netlist.apply(&tran).unwrap(), EditOutcome::Replaced);
    let after_first = netlist.text().unwrap();

    assert_eq!(netlist.apply(&tran).unwrap(), EditOutcome::Unchanged);
    assert_eq!(netlist.text().unwrap(), after_first);
}

#[test]
fn only_the_first_matching_line_is_replaced() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(
        &dir,
        "* doubled directives\n.TRAN 1u 1m\n.TRAN 5u 5m\n.END\n",
    );

    let tran = Directive::tran("2u", "2m", None, None, false);
    assert_eq!(netlist.apply(&tran).unwrap(), EditOutcome::Replaced);

    let text = netlist.text().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], ".TRAN 2u 2m 0 0");
    assert_eq!(lines[2], ".TRAN 5u 5m");
}

#[test]
fn missing_terminator_drops_the_insert_and_reports() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, "R1 1 0 1k\nC1 1 0 1n\n");

    let outcome = netlist.apply(&Directive::param("VCC", "5")).unwrap();
    assert_eq!(outcome, EditOutcome::MissingEnd);
    assert_eq!(netlist.text().unwrap(), "R1 1 0 1k\nC1 1 0 1n\n");
}

#[test]
fn subcircuit_end_is_not_an_insertion_point() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(
        &dir,
        ".SUBCKT divider a b\nR1 a b 1k\n.ENDS\nX1 1 2 divider\n.END\n",
    );

    let outcome = netlist.apply(&Directive::param("VCC", "5")).unwrap();
    assert_eq!(outcome, EditOutcome::Inserted);

    let text = netlist.text().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[2], ".ENDS");
    assert_eq!(lines[4], ".PARAM VCC=5");
    assert_eq!(*lines.last().unwrap(), ".END");
}

#[test]
fn invalid_frequency_range_never_reaches_the_file() {
    let err = Directive::ac(SweepKind::Dec, 100, 1e6, 1e3).unwrap_err();
    assert!(matches!(err, NetlistError::InvalidDirective(_)));

    let err = Directive::ac(SweepKind::Dec, 100, 1e3, 1e3).unwrap_err();
    assert!(matches!(err, NetlistError::InvalidDirective(_)));
}

#[test]
fn transient_builder_end_to_end() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, "* title\n.TRAN 1u 1m\n.END\n");

    let tran = Directive::tran("2u", "2m", Some("0"), Some("0"), false);
    assert_eq!(netlist.apply(&tran).unwrap(), EditOutcome::Replaced);

    assert_eq!(netlist.text().unwrap(), "* title\n.TRAN 2u 2m 0 0\n.END\n");
}

#[test]
fn parameter_builder_inserts_before_terminator() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, "* title\nR1 1 0 1k\n.END\n");

    assert_eq!(
        netlist.apply(&Directive::param("VCC", "5")).unwrap(),
        EditOutcome::Inserted
    );
    assert_eq!(
        netlist.text().unwrap(),
        "* title\nR1 1 0 1k\n.PARAM VCC=5\n.END\n"
    );
}

#[test]
fn parameter_update_does_not_duplicate() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, "* title\n.END\n");

    assert_eq!(
        netlist.apply(&Directive::param("VCC", "5")).unwrap(),
        EditOutcome::Inserted
    );
    assert_eq!(
        netlist.apply(&Directive::param("VCC", "3.3")).unwrap(),
        EditOutcome::Replaced
    );

    let text = netlist.text().unwrap();
    let param_lines: Vec<&str> = text.lines().filter(|l| l.starts_with(".PARAM")).collect();
    assert_eq!(param_lines, vec![".PARAM VCC=3.3"]);
}

#[test]
fn parameter_names_do_not_claim_longer_names() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, "* title\n.PARAM VCC2=1\n.END\n");

    assert_eq!(
        netlist.apply(&Directive::param("VCC", "5")).unwrap(),
        EditOutcome::Inserted
    );

    let text = netlist.text().unwrap();
    assert!(text.contains(".PARAM VCC2=1"));
    assert!(text.contains(".PARAM VCC=5"));
}

#[test]
fn probe_lists_are_appended_fresh() {
    let dir = TempDir::new().unwrap();
    let netlist = write_netlist(&dir, "* title\n.END\n");

    assert_eq!(
        netlist.apply(&Directive::probe(["out", "in"])).unwrap(),
        EditOutcome::Inserted
    );
    let text = netlist.text().unwrap();
    assert_eq!(text, "* title\n.PROBE out in\n.END\n");
}

#[test]
fn unreadable_netlist_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let netlist = Netlist::new(dir.path().join("missing.net"));

    let err = netlist.apply(&Directive::param("VCC", "5")).unwrap_err();
    assert!(matches!(err, NetlistError::Read { .. }));
}
