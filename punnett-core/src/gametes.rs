//! Gamete enumeration.
//!
//! Decomposes one parent's genotype into the distinct gametes it can
//! contribute: one allele chosen from each gene pair, choices taken
//! independently across genes.

use crate::constants::ALLELES_PER_GENE;

/// Enumerate the distinct gametes a parent genotype can produce.
///
/// The genotype is chunked into adjacent two-character gene pairs (the
/// alleles of gene `i` occupy positions `2i` and `2i + 1`). A gamete
/// picks exactly one allele from each pair and concatenates the picks
/// in gene order; the full set is the cartesian product over all genes.
///
/// Enumeration order is deterministic with the rightmost gene varying
/// fastest, and duplicates are removed keeping the first occurrence
/// (a homozygous pair like `AA` contributes only one distinct choice).
/// This order fixes the row and column order of the resulting grid, so
/// identical input always yields an identical grid.
///
/// An empty genotype yields no gametes.
///
/// # Examples
///
/// ```rust
/// use punnett_core::gametes::gametes;
///
/// assert_eq!(gametes("Aa"), vec!["A", "a"]);
/// assert_eq!(gametes("AaBb"), vec!["AB", "Ab", "aB", "ab"]);
/// assert_eq!(gametes("AAbb"), vec!["Ab"]);
/// ```
#[must_use]
pub fn gametes(genotype: &str) -> Vec<String> {
    let alleles: Vec<char> = genotype.chars().collect();
    if alleles.len() < ALLELES_PER_GENE {
        return Vec::new();
    }

    // Cartesian product built left to right: appending each successive
    // gene's two choices to every partial gamete makes the rightmost
    // gene vary fastest in the result.
    let mut combinations = vec![String::new()];
    for pair in alleles.chunks_exact(ALLELES_PER_GENE) {
        let mut extended = Vec::with_capacity(combinations.len() * ALLELES_PER_GENE);
        for partial in &combinations {
            for &allele in pair {
                let mut gamete = partial.clone();
                gamete.push(allele);
                extended.push(gamete);
            }
        }
        combinations = extended;
    }

    dedup_preserving_order(combinations)
}

fn dedup_preserving_order(gametes: Vec<String>) -> Vec<String> {
    let mut distinct = Vec::with_capacity(gametes.len());
    for gamete in gametes {
        if !distinct.contains(&gamete) {
            distinct.push(gamete);
        }
    }
    distinct
}
