//! Genotype input validation.
//!
//! Validation happens once, up front, before any other stage runs. The
//! later stages perform no input checking of their own and will
//! silently produce nonsensical strings when fed malformed genotypes,
//! so every external entry point must validate first.

use crate::allele::compare_alleles;
use crate::constants::{ALLELES_PER_GENE, MIN_GENOTYPE_LENGTH};

/// Check that a pair of parent genotype strings is well-formed.
///
/// All of the following must hold:
///
/// - both strings are at least one gene long, of equal, even length;
/// - chunking each string into adjacent pairs, both characters of every
///   pair are the same letter ignoring case (`"AabbCC"` passes,
///   `"AbbCaB"` does not);
/// - each string is already in canonical order: sorting its characters
///   with [`compare_alleles`] reproduces it exactly (`"Aa"` passes,
///   `"aA"` does not).
///
/// Returns `false` on any violation; no repair is attempted and no
/// detail about the failing rule is reported.
///
/// Whether the two parents reference the *same* set of genes is
/// deliberately not checked. Mismatched gene sets (say `"AaBb"` against
/// `"XxYy"`) validate fine and cross into a well-formed but
/// biologically meaningless result.
///
/// # Examples
///
/// ```rust
/// use punnett_core::validate::validate;
///
/// assert!(validate("Aa", "Aa"));
/// assert!(validate("AaBbCc", "aaBbCC"));
/// assert!(!validate("Ab", "Aa")); // pair is not one gene
/// assert!(!validate("aA", "Aa")); // not canonical order
/// ```
#[must_use]
pub fn validate(mom: &str, dad: &str) -> bool {
    is_well_formed(mom) && is_well_formed(dad) && mom.chars().count() == dad.chars().count()
}

fn is_well_formed(genotype: &str) -> bool {
    let alleles: Vec<char> = genotype.chars().collect();
    if alleles.len() < MIN_GENOTYPE_LENGTH || alleles.len() % ALLELES_PER_GENE != 0 {
        return false;
    }

    let pairs_match = alleles
        .chunks_exact(ALLELES_PER_GENE)
        .all(|pair| pair[0].to_ascii_lowercase() == pair[1].to_ascii_lowercase());
    if !pairs_match {
        return false;
    }

    // Input must already be gene-ascending with the dominant allele
    // first; the validator rejects rather than repairs.
    let mut sorted = alleles.clone();
    sorted.sort_by(|x, y| compare_alleles(*x, *y));
    sorted == alleles
}
