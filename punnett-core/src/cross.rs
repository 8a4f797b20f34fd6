//! Cross combination and genotype canonicalization.
//!
//! Crossing takes every ordered pair of maternal and paternal gametes
//! and concatenates them into a raw offspring allele string, then
//! rewrites each raw string into its canonical form: genes grouped and
//! ordered alphabetically, dominant allele before recessive within a
//! gene.

use crate::allele::compare_alleles;

/// Cross two gamete sets into an ordered sequence of canonical
/// offspring genotypes.
///
/// Pairs are taken in enumeration order with the maternal gamete as the
/// outer loop, so the flat sequence is row-major for a grid whose rows
/// are maternal gametes and whose columns are paternal gametes.
///
/// This stage assumes its inputs come from validated genotypes; it does
/// no checking of its own and will produce nonsensical strings on
/// malformed input. Empty gamete sets produce an empty sequence.
///
/// # Examples
///
/// ```rust
/// use punnett_core::cross::cross;
///
/// let mom = vec!["A".to_string(), "a".to_string()];
/// let dad = vec!["A".to_string(), "a".to_string()];
/// assert_eq!(cross(&mom, &dad), vec!["AA", "Aa", "Aa", "aa"]);
/// ```
#[must_use]
pub fn cross(mom_gametes: &[String], dad_gametes: &[String]) -> Vec<String> {
    let mut offspring = Vec::with_capacity(mom_gametes.len() * dad_gametes.len());
    for mom_gamete in mom_gametes {
        for dad_gamete in dad_gametes {
            let raw = format!("{}{}", mom_gamete, dad_gamete);
            offspring.push(canonicalize(&raw));
        }
    }
    offspring
}

/// Rewrite a raw allele combination into canonical form.
///
/// Two stable sorting passes:
///
/// 1. sort by lowercased character, which groups the two alleles of
///    each gene adjacent and orders genes alphabetically but leaves the
///    within-gene order wherever the raw string had it;
/// 2. re-sort with the full allele comparator, which keeps the gene
///    grouping (stability) and fixes the dominant-before-recessive
///    order inside each gene.
///
/// Canonicalizing an already-canonical genotype returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use punnett_core::cross::canonicalize;
///
/// assert_eq!(canonicalize("bAaB"), "AaBb");
/// assert_eq!(canonicalize("AaBb"), "AaBb");
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    let mut alleles: Vec<char> = raw.chars().collect();
    alleles.sort_by_key(|allele| allele.to_ascii_lowercase());
    alleles.sort_by(|x, y| compare_alleles(*x, *y));
    alleles.into_iter().collect()
}
