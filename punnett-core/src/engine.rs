use crate::config::PunnettConfig;
use crate::constants::ALLELES_PER_GENE;
use crate::cross::cross;
use crate::gametes::gametes;
use crate::grid::build_grid;
use crate::phenotype::classify;
use crate::ratios::{gene_letters, ratios};
use crate::results::CrossResults;
use crate::types::PunnettError;
use crate::validate::validate;

/// High-level cross analyzer running the whole pipeline.
///
/// Validates both parent genotypes, enumerates their gametes, crosses
/// them into a canonicalized grid, and derives phenotype groups and
/// per-gene ratios. This is the recommended entry point; the individual
/// stages are also exported for callers that need only part of the
/// pipeline.
///
/// The analyzer is a pure function of its two string arguments: it
/// keeps no memory of past calls, and identical input always yields a
/// byte-identical result.
///
/// # Examples
///
/// ```rust
/// use punnett_core::{PunnettAnalyzer, config::PunnettConfig};
///
/// let analyzer = PunnettAnalyzer::new(PunnettConfig::default());
/// let results = analyzer.cross("AaBb", "aabb")?;
///
/// assert_eq!(results.mom_gametes, vec!["AB", "Ab", "aB", "ab"]);
/// assert_eq!(results.dad_gametes, vec!["ab"]);
/// assert_eq!(results.phenotypes.len(), 4);
/// # Ok::<(), punnett_core::types::PunnettError>(())
/// ```
#[derive(Debug)]
pub struct PunnettAnalyzer {
    /// Configuration options for cross computation
    pub config: PunnettConfig,
}

impl PunnettAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use punnett_core::{PunnettAnalyzer, config::PunnettConfig};
    ///
    /// let analyzer = PunnettAnalyzer::new(PunnettConfig::default());
    /// ```
    #[must_use]
    pub const fn new(config: PunnettConfig) -> Self {
        Self { config }
    }

    /// Cross two parent genotypes into a complete result.
    ///
    /// The pipeline runs synchronously to completion: validate,
    /// enumerate gametes, cross and canonicalize, build the grid,
    /// classify phenotypes, compute ratios.
    ///
    /// # Errors
    ///
    /// - [`PunnettError::InvalidGenotype`] when either input fails
    ///   validation; no partial computation is attempted.
    /// - [`PunnettError::TooManyGenes`] when the gene count exceeds
    ///   [`PunnettConfig::max_genes`].
    /// - [`PunnettError::GridDimensions`] and
    ///   [`PunnettError::MalformedAllelePair`] signal defects in the
    ///   pipeline itself and should never occur for valid input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use punnett_core::{PunnettAnalyzer, config::PunnettConfig};
    ///
    /// let analyzer = PunnettAnalyzer::new(PunnettConfig::default());
    ///
    /// let results = analyzer.cross("Aa", "Aa")?;
    /// assert_eq!(results.grid[0][0].genotype, "AA");
    /// assert_eq!(results.grid[1][1].genotype, "aa");
    ///
    /// assert!(analyzer.cross("Ab", "Ab").is_err());
    /// # Ok::<(), punnett_core::types::PunnettError>(())
    /// ```
    pub fn cross(&self, mom: &str, dad: &str) -> Result<CrossResults, PunnettError> {
        if !validate(mom, dad) {
            return Err(PunnettError::InvalidGenotype);
        }

        let gene_count = mom.chars().count() / ALLELES_PER_GENE;
        if let Some(limit) = self.config.max_genes {
            if gene_count > limit {
                return Err(PunnettError::TooManyGenes {
                    genes: gene_count,
                    limit,
                });
            }
        }

        let mom_gametes = gametes(mom);
        let dad_gametes = gametes(dad);

        if !self.config.quiet {
            eprintln!(
                "Crossing {} x {} gametes ({} genes, {} cells)...",
                mom_gametes.len(),
                dad_gametes.len(),
                gene_count,
                mom_gametes.len() * dad_gametes.len()
            );
        }

        let offspring = cross(&mom_gametes, &dad_gametes);
        let genotype_grid = build_grid(offspring, dad_gametes.len())?;
        let (grid, phenotypes) = classify(genotype_grid);
        let ratios = ratios(&grid, &gene_letters(mom))?;

        Ok(CrossResults {
            mom_gametes,
            dad_gametes,
            grid,
            phenotypes,
            ratios,
        })
    }
}
