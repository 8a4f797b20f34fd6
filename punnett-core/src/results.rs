use serde::Serialize;

use crate::types::{Cell, GeneRatio, PhenotypeGroup};

/// Complete outcome of crossing two parent genotypes.
///
/// Everything a rendering layer needs: the two gamete sets (for an
/// "Alleles" display), the classified grid (for the square itself),
/// phenotype groups with counts and percentages, and per-gene
/// inheritance ratios.
///
/// The result is fully derived from the two input strings and carries
/// no state between computations.
///
/// # Examples
///
/// ```rust
/// use punnett_core::{PunnettAnalyzer, config::PunnettConfig};
///
/// let analyzer = PunnettAnalyzer::new(PunnettConfig::default());
/// let results = analyzer.cross("Aa", "Aa")?;
///
/// assert_eq!(results.mom_gametes, vec!["A", "a"]);
/// assert_eq!(results.rows(), 2);
/// assert_eq!(results.columns(), 2);
/// assert_eq!(results.cell_count(), 4);
/// # Ok::<(), punnett_core::types::PunnettError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CrossResults {
    /// Distinct maternal gametes in enumeration order (grid rows)
    pub mom_gametes: Vec<String>,

    /// Distinct paternal gametes in enumeration order (grid columns)
    pub dad_gametes: Vec<String>,

    /// The Punnett square: rows of classified cells, row-major
    pub grid: Vec<Vec<Cell>>,

    /// Phenotype groups in first-seen order, counts summing to the
    /// total cell count
    pub phenotypes: Vec<PhenotypeGroup>,

    /// Per-gene inheritance counts, genes in maternal order
    pub ratios: Vec<GeneRatio>,
}

impl CrossResults {
    /// Number of grid rows (maternal gamete count)
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of grid columns (paternal gamete count)
    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Total number of cells in the grid
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid.iter().map(Vec::len).sum()
    }
}
