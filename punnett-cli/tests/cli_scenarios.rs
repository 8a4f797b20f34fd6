mod common;

use assert_cmd::Command;
use std::fs;
use tempfile::NamedTempFile;

use crate::common::{run_punnett, run_punnett_failing};

#[test]
fn monohybrid_text_output() {
    let output = run_punnett(&["-m", "Aa", "-d", "Aa", "-q"]);

    assert!(output.contains("Mom: A, a"));
    assert!(output.contains("Dad: A, a"));
    assert!(output.contains("AA\tAa"));
    assert!(output.contains("Aa\taa"));
    assert!(output.contains("A: 3 (75%)"));
    assert!(output.contains("  2 heterozygous (50% chance)"));
}

#[test]
fn dihybrid_test_cross_tsv_output() {
    let output = run_punnett(&["-m", "AaBb", "-d", "aabb", "-f", "tsv", "-q"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "gametes\tmom\tAB\tAb\taB\tab");
    assert_eq!(lines[1], "gametes\tdad\tab");
    assert_eq!(lines[2], "cell\t0\t0\tAaBb\tAB\t0");
    assert_eq!(lines[5], "cell\t3\t0\taabb\tab\t3");
}

#[test]
fn json_output_parses() {
    let output = run_punnett(&["-m", "AaBb", "-d", "AaBb", "-f", "json", "-q"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["mom_gametes"].as_array().unwrap().len(), 4);
    assert_eq!(value["grid"].as_array().unwrap().len(), 4);
    let counts: usize = value["phenotypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["count"].as_u64().unwrap() as usize)
        .sum();
    assert_eq!(counts, 16);
}

#[test]
fn output_file_written() {
    let out_tmp = NamedTempFile::new().unwrap();
    run_punnett(&[
        "-m",
        "Aa",
        "-d",
        "Aa",
        "-q",
        "-o",
        out_tmp.path().to_str().unwrap(),
    ]);

    let contents = fs::read_to_string(out_tmp.path()).unwrap();
    assert!(contents.contains("Genotypes:"));
}

#[test]
fn mixed_pair_rejected() {
    // 'A' and 'b' are not the same gene
    let stderr = run_punnett_failing(&["-m", "Ab", "-d", "Ab", "-q"]);
    assert!(stderr.contains("Error: Invalid genotype input"));
}

#[test]
fn non_canonical_order_rejected() {
    let stderr = run_punnett_failing(&["-m", "aA", "-d", "Aa", "-q"]);
    assert!(stderr.contains("Invalid genotype input"));
}

#[test]
fn unequal_lengths_rejected() {
    run_punnett_failing(&["-m", "Aa", "-d", "AaBb", "-q"]);
}

#[test]
fn gene_limit_enforced() {
    let stderr = run_punnett_failing(&["-m", "AaBbCc", "-d", "AaBbCc", "-g", "2", "-q"]);
    assert!(stderr.contains("Error: Too many genes: 3 (configured limit: 2)"));
}

#[test]
fn unlimited_overrides_gene_limit() {
    run_punnett(&["-m", "AaBbCc", "-d", "AaBbCc", "-g", "2", "--unlimited", "-q"]);
}

#[test]
fn invalid_format_rejected() {
    run_punnett_failing(&["-m", "Aa", "-d", "Aa", "-f", "xml", "-q"]);
}

#[test]
fn progress_message_on_stderr() {
    let mut cmd = Command::cargo_bin("punnett").unwrap();
    cmd.args(["-m", "Aa", "-d", "Aa"]);
    let output = cmd.assert().success().get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("Cross complete!"));
}

#[test]
fn quiet_suppresses_progress() {
    let mut cmd = Command::cargo_bin("punnett").unwrap();
    cmd.args(["-m", "Aa", "-d", "Aa", "-q"]);
    let output = cmd.assert().success().get_output().stderr.clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.is_empty());
}

#[test]
fn help_lists_options() {
    let mut cmd = Command::cargo_bin("punnett").unwrap();
    cmd.arg("--help");
    let output = cmd.assert().success().get_output().stdout.clone();
    let help = String::from_utf8(output).unwrap();
    assert!(help.contains("--mom"));
    assert!(help.contains("--dad"));
    assert!(help.contains("--format"));
    assert!(help.contains("--unlimited"));
}
