//! Command-line behavior of the rsid-harmonizer binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const VAR2LOCATION: &str = "\
rs1\trs1\tA/G\t1\t100\t100
rs2\trs2\tA/T\t2\t200\t200
rs3\trs3\tC/T\t3\t300\t300
rs3\trs3\tC/T\t3\t301\t301
rs4\trs40\t-/CT\t4\t400\t401
";

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn harmonizer() -> Command {
    Command::cargo_bin("rsid-harmonizer").unwrap()
}

#[test]
fn test_clean_from_stdin() {
    harmonizer()
        .args(["clean", "-"])
        .write_stdin("rs1_x_rs2\nrs3;rs4,rs5\nchr1:100\nrs1\n")
        .assert()
        .success()
        .stdout("rs1\nrs2\nrs3\nrs4,rs5\n");
}

#[test]
fn test_clean_json() {
    let input = temp_file(".txt", "rs9, rs8\n");
    harmonizer()
        .args(["clean", "--format", "json"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rs8\"").and(predicate::str::contains("\"rs9\"")));
}

#[test]
fn test_resolve_tsv() {
    let mappings = temp_file(".tsv", VAR2LOCATION);
    harmonizer()
        .args(["resolve", "-", "--format", "tsv", "--mappings"])
        .arg(mappings.path())
        .write_stdin("rs1\nrs3\nrs4\nrs99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rs1\trs1\tresolved\t1\t100\tA/G"))
        .stdout(predicate::str::contains("rs3\trs3\tambiguous\t\t\t"))
        .stdout(predicate::str::contains("rs4\trs40\tresolved\t4\t400\t-/CT"))
        .stdout(predicate::str::contains("rs99\t\tnot_found"));
}

#[test]
fn test_resolve_with_chromosome_subset() {
    let mappings = temp_file(".tsv", VAR2LOCATION);
    harmonizer()
        .args(["resolve", "-", "--format", "tsv", "--chromosomes", "2-3", "--mappings"])
        .arg(mappings.path())
        .write_stdin("rs1\nrs2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rs1\trs1\tno_accepted_mapping"))
        .stdout(predicate::str::contains("rs2\trs2\tresolved\t2\t200\tA/T"));
}

#[test]
fn test_check_tsv() {
    let mappings = temp_file(".tsv", VAR2LOCATION);
    let scores = temp_file(
        ".tsv",
        "#pgs_id=PGS000000\nrsID\teffect_allele\tother_allele\nrs1\tC\tT\nrs2\tA\t\nrs3\tC\tT\n",
    );
    harmonizer()
        .args(["check", "--format", "tsv", "--mappings"])
        .arg(mappings.path())
        .arg(scores.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "rs1\tC\tT\t1\t100\tA/G\ttrue\tfalse\ttrue\t",
        ))
        .stdout(predicate::str::contains(
            "rs2\tA\t\t2\t200\tA/T\ttrue\ttrue\tfalse\tT",
        ))
        .stdout(predicate::str::contains("rs3\tC\tT\t\t\t\t\t\t\t\n"));
}

#[test]
fn test_check_json() {
    let mappings = temp_file(".tsv", VAR2LOCATION);
    let scores = temp_file(".tsv", "rs4\tCT\n");
    harmonizer()
        .args(["check", "-f", "json", "--mappings"])
        .arg(mappings.path())
        .arg(scores.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"known\": \"-\""))
        .stdout(predicate::str::contains("\"is_flipped\": false"));
}

#[test]
fn test_mapping_source_required() {
    harmonizer()
        .args(["resolve", "-"])
        .write_stdin("rs1\n")
        .assert()
        .failure();
}

#[test]
fn test_mapping_sources_conflict() {
    let mappings = temp_file(".tsv", VAR2LOCATION);
    harmonizer()
        .args(["resolve", "-", "--fetch", "--mappings"])
        .arg(mappings.path())
        .write_stdin("rs1\n")
        .assert()
        .failure();
}

#[test]
fn test_invalid_configuration_is_fatal() {
    let mappings = temp_file(".tsv", VAR2LOCATION);
    harmonizer()
        .args(["resolve", "-", "--chromosomes", "22-1", "--mappings"])
        .arg(mappings.path())
        .write_stdin("rs1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chromosome range"));

    harmonizer()
        .args(["resolve", "-", "--fetch", "--build", "hg19"])
        .write_stdin("rs1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GRCh37, GRCh38"));
}

#[test]
fn test_malformed_mapping_file() {
    let mappings = temp_file(".tsv", "rs1\trs1\tA/G\t1\n");
    harmonizer()
        .args(["resolve", "-", "--mappings"])
        .arg(mappings.path())
        .write_stdin("rs1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 1"));
}
