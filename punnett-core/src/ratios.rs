//! Per-gene inheritance ratios.
//!
//! For each gene, counts how many grid cells are homozygous-dominant,
//! heterozygous, or homozygous-recessive at that gene's fixed position
//! in the canonical genotype.

use crate::allele::gene_letter;
use crate::constants::ALLELES_PER_GENE;
use crate::types::{Cell, GeneRatio, PunnettError, Zygosity};

/// Gene letters of a genotype, uppercased, in order of first
/// appearance, deduplicated.
///
/// The maternal genotype defines the gene order used for ratio
/// reporting.
#[must_use]
pub fn gene_letters(genotype: &str) -> Vec<char> {
    let mut letters = Vec::new();
    for allele in genotype.chars() {
        let letter = gene_letter(allele);
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    letters
}

/// Count homozygous-dominant, heterozygous, and homozygous-recessive
/// occurrences of each gene across the whole grid.
///
/// Gene `i` occupies the canonical segment `2i..2i + 2` of every cell's
/// genotype. A segment of both-uppercase, upper-then-lower, or
/// both-lowercase forms of the gene's letter counts toward the matching
/// bucket. A segment that does not involve the gene's letter at all is
/// counted nowhere; that only happens when the parents referenced
/// mismatched gene sets, which is degenerate but accepted input.
///
/// # Errors
///
/// Returns [`PunnettError::MalformedAllelePair`] when a segment holds
/// the gene's letter in lower-then-upper order. Canonicalization places
/// the dominant allele first, so this arrangement can only come from a
/// defect in the cross pipeline itself and is reported loudly rather
/// than folded into a bucket.
pub fn ratios(grid: &[Vec<Cell>], genes: &[char]) -> Result<Vec<GeneRatio>, PunnettError> {
    let total: usize = grid.iter().map(Vec::len).sum();
    let mut results = Vec::with_capacity(genes.len());

    for (gene_index, &gene) in genes.iter().enumerate() {
        let mut ratio = GeneRatio {
            gene,
            dominant: 0,
            heterozygous: 0,
            recessive: 0,
            total,
        };

        for cell in grid.iter().flatten() {
            match classify_segment(&cell.genotype, gene_index, gene)? {
                Some(Zygosity::HomozygousDominant) => ratio.dominant += 1,
                Some(Zygosity::Heterozygous) => ratio.heterozygous += 1,
                Some(Zygosity::HomozygousRecessive) => ratio.recessive += 1,
                None => {}
            }
        }

        results.push(ratio);
    }

    Ok(results)
}

/// Classify the two-character segment of `genotype` at `gene_index`
/// against the expected gene letter.
fn classify_segment(
    genotype: &str,
    gene_index: usize,
    gene: char,
) -> Result<Option<Zygosity>, PunnettError> {
    let mut segment = genotype.chars().skip(gene_index * ALLELES_PER_GENE);
    let (Some(first), Some(second)) = (segment.next(), segment.next()) else {
        return Ok(None);
    };

    let upper = gene;
    let lower = gene.to_ascii_lowercase();

    match (first, second) {
        (f, s) if f == upper && s == upper => Ok(Some(Zygosity::HomozygousDominant)),
        (f, s) if f == upper && s == lower => Ok(Some(Zygosity::Heterozygous)),
        (f, s) if f == lower && s == lower => Ok(Some(Zygosity::HomozygousRecessive)),
        (f, s) if f == lower && s == upper => Err(PunnettError::MalformedAllelePair {
            pair: [f, s].iter().collect(),
            gene,
        }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(genotype: &str) -> Cell {
        Cell {
            genotype: genotype.to_string(),
            phenotype: String::new(),
            group: 0,
        }
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|row| row.iter().map(|g| cell(g)).collect())
            .collect()
    }

    #[test]
    fn test_gene_letters_basic() {
        assert_eq!(gene_letters("AaBbCc"), vec!['A', 'B', 'C']);
        assert_eq!(gene_letters("Aa"), vec!['A']);
    }

    #[test]
    fn test_gene_letters_deduplicated() {
        assert_eq!(gene_letters("AABb"), vec!['A', 'B']);
        assert_eq!(gene_letters("aabb"), vec!['A', 'B']);
    }

    #[test]
    fn test_gene_letters_empty() {
        assert!(gene_letters("").is_empty());
    }

    #[test]
    fn test_monohybrid_ratios() {
        let grid = grid(&[&["AA", "Aa"], &["Aa", "aa"]]);
        let ratios = ratios(&grid, &['A']).unwrap();

        assert_eq!(ratios.len(), 1);
        assert_eq!(ratios[0].gene, 'A');
        assert_eq!(ratios[0].dominant, 1);
        assert_eq!(ratios[0].heterozygous, 2);
        assert_eq!(ratios[0].recessive, 1);
        assert_eq!(ratios[0].total, 4);
        assert_eq!(ratios[0].dominant_percent(), 25.0);
        assert_eq!(ratios[0].heterozygous_percent(), 50.0);
        assert_eq!(ratios[0].recessive_percent(), 25.0);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let grid = grid(&[
            &["AABB", "AABb", "AaBB", "AaBb"],
            &["AABb", "AAbb", "AaBb", "Aabb"],
            &["AaBB", "AaBb", "aaBB", "aaBb"],
            &["AaBb", "Aabb", "aaBb", "aabb"],
        ]);
        for ratio in ratios(&grid, &['A', 'B']).unwrap() {
            assert_eq!(
                ratio.dominant + ratio.heterozygous + ratio.recessive,
                ratio.total
            );
        }
    }

    #[test]
    fn test_second_gene_segment() {
        let grid = grid(&[&["AaBb"], &["Aabb"], &["aaBb"], &["aabb"]]);
        let ratios = ratios(&grid, &['A', 'B']).unwrap();

        assert_eq!(ratios[1].gene, 'B');
        assert_eq!(ratios[1].dominant, 0);
        assert_eq!(ratios[1].heterozygous, 2);
        assert_eq!(ratios[1].recessive, 2);
    }

    #[test]
    fn test_mismatched_gene_sets_counted_nowhere() {
        // Parents with disjoint gene sets: segments never involve the
        // queried letter and are silently skipped.
        let grid = grid(&[&["ABXY", "ABXy"]]);
        let ratios = ratios(&grid, &['A']).unwrap();
        assert_eq!(ratios[0].dominant, 0);
        assert_eq!(ratios[0].heterozygous, 0);
        assert_eq!(ratios[0].recessive, 0);
        assert_eq!(ratios[0].total, 2);
    }

    #[test]
    fn test_reversed_pair_is_invariant_failure() {
        let grid = grid(&[&["aA"]]);
        let result = ratios(&grid, &['A']);
        assert!(matches!(
            result,
            Err(PunnettError::MalformedAllelePair { gene: 'A', .. })
        ));
    }

    #[test]
    fn test_segment_past_genotype_end() {
        // Shorter genotypes than the gene list expects yield no counts
        let grid = grid(&[&["Aa"]]);
        let ratios = ratios(&grid, &['A', 'B']).unwrap();
        assert_eq!(ratios[1].dominant + ratios[1].heterozygous + ratios[1].recessive, 0);
    }

    #[test]
    fn test_empty_grid() {
        let ratios = ratios(&[], &['A']).unwrap();
        assert_eq!(ratios[0].total, 0);
        assert_eq!(ratios[0].dominant_percent(), 0.0);
    }
}
