//! Allele ordering primitives.
//!
//! A single comparator defines the canonical order of alleles and is
//! used both by the validator (input must already be in canonical
//! order) and by the canonicalizer (offspring genotypes are sorted into
//! canonical order). Its exact behavior determines every canonical
//! genotype string the engine emits, so it must not drift.

use std::cmp::Ordering;

/// Total order over allele characters.
///
/// Two alleles of *different* genes compare case-insensitively, so
/// genes order alphabetically regardless of dominance. Two alleles of
/// the *same* gene (same letter, possibly differing in case) fall back
/// to plain character comparison, which under ASCII places the
/// uppercase (dominant) allele before the lowercase (recessive) one.
///
/// The asymmetry is deliberate and load-bearing: every downstream
/// grouping keys off the canonical strings this order produces.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use punnett_core::allele::compare_alleles;
///
/// assert_eq!(compare_alleles('A', 'a'), Ordering::Less);
/// assert_eq!(compare_alleles('b', 'A'), Ordering::Greater);
/// assert_eq!(compare_alleles('B', 'a'), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_alleles(x: char, y: char) -> Ordering {
    let (lower_x, lower_y) = (x.to_ascii_lowercase(), y.to_ascii_lowercase());
    if lower_x != lower_y {
        lower_x.cmp(&lower_y)
    } else {
        x.cmp(&y)
    }
}

/// Whether an allele is dominant (encoded as uppercase).
#[must_use]
pub fn is_dominant(allele: char) -> bool {
    allele.is_ascii_uppercase()
}

/// Uppercase letter identifying the gene an allele belongs to.
#[must_use]
pub fn gene_letter(allele: char) -> char {
    allele.to_ascii_uppercase()
}
