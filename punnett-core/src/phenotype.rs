//! Phenotype classification.
//!
//! Derives each cell's phenotype key from its canonical genotype and
//! groups cells by key. The key takes the first character of each
//! gene's two-character segment: canonical ordering guarantees that
//! character is the expressed allele (dominant when present, otherwise
//! the homozygous-recessive letter).

use crate::constants::ALLELES_PER_GENE;
use crate::types::{percent, Cell, PhenotypeGroup};

/// Classify every cell of the grid by phenotype key.
///
/// Returns the grid of [`Cell`]s (each carrying its genotype, key, and
/// group index) together with the phenotype groups in first-seen order.
/// Group indices are assigned the first time a key appears while
/// scanning row-major, so the assignment is stable for a given input.
/// Group counts always sum to the total cell count.
///
/// Group identity here is an index, not a color: any visual identity a
/// rendering layer wants to attach is its own concern and can be keyed
/// off the index.
#[must_use]
pub fn classify(grid: Vec<Vec<String>>) -> (Vec<Vec<Cell>>, Vec<PhenotypeGroup>) {
    let total: usize = grid.iter().map(Vec::len).sum();
    let mut groups: Vec<PhenotypeGroup> = Vec::new();
    let mut classified = Vec::with_capacity(grid.len());

    for row in grid {
        let mut classified_row = Vec::with_capacity(row.len());
        for genotype in row {
            let key = phenotype_key(&genotype);
            let group = match groups.iter().position(|g| g.key == key) {
                Some(index) => {
                    groups[index].count += 1;
                    index
                }
                None => {
                    groups.push(PhenotypeGroup {
                        key: key.clone(),
                        group: groups.len(),
                        count: 1,
                        percent: 0.0,
                    });
                    groups.len() - 1
                }
            };
            classified_row.push(Cell {
                genotype,
                phenotype: key,
                group,
            });
        }
        classified.push(classified_row);
    }

    for group in &mut groups {
        group.percent = percent(group.count, total);
    }

    (classified, groups)
}

/// Derive the phenotype key of a canonical genotype.
///
/// Takes the first character of each two-character gene segment and
/// concatenates them in gene order, e.g. `"AaBb"` and `"AABb"` both
/// yield `"AB"`, while `"aabb"` yields `"ab"`.
#[must_use]
pub fn phenotype_key(genotype: &str) -> String {
    let alleles: Vec<char> = genotype.chars().collect();
    alleles
        .chunks_exact(ALLELES_PER_GENE)
        .map(|pair| pair[0])
        .collect()
}
