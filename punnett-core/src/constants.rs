/// Version string for the punnett engine
pub const VERSION: &str = "1.0.0";

/// Number of alleles each individual carries per gene
pub const ALLELES_PER_GENE: usize = 2;

/// Default cap on the number of genes accepted per parent.
///
/// A cross of `n` genes produces up to `4^n` grid cells, so work grows
/// very quickly with gene count. The cap is configurable via
/// [`PunnettConfig::max_genes`](crate::config::PunnettConfig::max_genes)
/// and can be disabled entirely.
pub const DEFAULT_MAX_GENES: usize = 10;

/// Minimum genotype string length accepted by the validator (one gene)
pub const MIN_GENOTYPE_LENGTH: usize = 2;
