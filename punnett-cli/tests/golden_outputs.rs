mod common;

use insta::assert_snapshot;

use crate::common::run_punnett;

// Golden snapshots for the text format: the section layout is the
// CLI's stable human-facing surface.

#[test]
fn monohybrid_text_snapshot() {
    let output = run_punnett(&["-m", "Aa", "-d", "Aa", "-q"]);
    assert_snapshot!("monohybrid_text", output);
}

#[test]
fn dihybrid_test_cross_text_snapshot() {
    let output = run_punnett(&["-m", "AaBb", "-d", "aabb", "-q"]);
    assert_snapshot!("dihybrid_test_cross_text", output);
}
