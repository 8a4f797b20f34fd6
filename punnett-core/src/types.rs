use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single cell of a Punnett square.
///
/// Carries the canonical offspring genotype at one (row, column)
/// position of the grid, the phenotype key derived from it, and the
/// index of the phenotype group the cell belongs to. Group indices are
/// assigned in first-seen order while scanning the grid row-major, so
/// they are stable for a given pair of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Canonical genotype string, e.g. `"AaBb"`
    pub genotype: String,
    /// Phenotype key: the expressed allele of each gene, e.g. `"AB"`
    pub phenotype: String,
    /// Index of the phenotype group this cell belongs to
    pub group: usize,
}

/// One phenotype class produced by a cross.
///
/// Cells sharing a phenotype key form one group. Groups are listed in
/// the order their key was first seen in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhenotypeGroup {
    /// Phenotype key shared by every cell in the group
    pub key: String,
    /// Index assigned to the group (first-seen order)
    pub group: usize,
    /// Number of grid cells carrying this key
    pub count: usize,
    /// Share of the grid carrying this key, in percent (unrounded)
    pub percent: f64,
}

/// Zygosity of one gene's allele pair in an offspring genotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zygosity {
    /// Both alleles dominant, e.g. `AA`
    HomozygousDominant,
    /// One dominant and one recessive allele, e.g. `Aa`
    Heterozygous,
    /// Both alleles recessive, e.g. `aa`
    HomozygousRecessive,
}

impl fmt::Display for Zygosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomozygousDominant => write!(f, "dominant"),
            Self::Heterozygous => write!(f, "heterozygous"),
            Self::HomozygousRecessive => write!(f, "recessive"),
        }
    }
}

/// Per-gene inheritance counts across every cell of the grid.
///
/// Percentages are derived from the counts on demand and are not
/// rounded; the three percentages sum to 100 only up to floating-point
/// error. When the two parents reference mismatched gene sets, cells
/// whose segment does not involve this gene's letter fall into no
/// bucket, so the three counts may sum to less than `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneRatio {
    /// Gene letter, uppercased
    pub gene: char,
    /// Homozygous-dominant cell count (`AA`)
    pub dominant: usize,
    /// Heterozygous cell count (`Aa`)
    pub heterozygous: usize,
    /// Homozygous-recessive cell count (`aa`)
    pub recessive: usize,
    /// Total number of grid cells
    pub total: usize,
}

impl GeneRatio {
    /// Homozygous-dominant share of the grid, in percent
    #[must_use]
    pub fn dominant_percent(&self) -> f64 {
        percent(self.dominant, self.total)
    }

    /// Heterozygous share of the grid, in percent
    #[must_use]
    pub fn heterozygous_percent(&self) -> f64 {
        percent(self.heterozygous, self.total)
    }

    /// Homozygous-recessive share of the grid, in percent
    #[must_use]
    pub fn recessive_percent(&self) -> f64 {
        percent(self.recessive, self.total)
    }
}

/// Convert a count into an unrounded percentage of `total`.
#[must_use]
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Error types that can occur while computing a cross.
#[derive(Error, Debug)]
pub enum PunnettError {
    /// One of the parent genotype strings failed validation.
    ///
    /// Deliberately carries no detail about which rule failed; callers
    /// surface a single generic invalid-input notice.
    #[error("Invalid genotype input")]
    InvalidGenotype,
    /// The gene count exceeds the configured cap
    #[error("Too many genes: {genes} (configured limit: {limit})")]
    TooManyGenes {
        /// Number of genes in the input
        genes: usize,
        /// Configured gene cap
        limit: usize,
    },
    /// The offspring sequence cannot be reshaped into the expected grid.
    ///
    /// Indicates a defect in the cross logic, not bad input.
    #[error("Internal error: {cells} cells cannot form a grid of {columns} columns")]
    GridDimensions {
        /// Number of offspring genotypes produced
        cells: usize,
        /// Expected column count (paternal gamete count)
        columns: usize,
    },
    /// A canonical genotype contains an allele pair in non-canonical
    /// order. Indicates a defect in the canonicalizer, not bad input.
    #[error("Internal error: malformed allele pair {pair:?} for gene {gene}")]
    MalformedAllelePair {
        /// The offending two-character segment
        pair: String,
        /// Uppercase letter of the gene being classified
        gene: char,
    },
    /// Writing results failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing results to JSON failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
