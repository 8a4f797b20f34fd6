use crate::constants::DEFAULT_MAX_GENES;

/// Output format options for cross results.
///
/// # Formats
///
/// - **Text**: human-readable sections (Alleles, Genotypes, Phenotypes,
///   Ratios)
/// - **Tsv**: tab-separated records, one record type per line
/// - **Json**: full result object serialized as JSON
///
/// # Examples
///
/// ```rust
/// use punnett_core::config::{OutputFormat, PunnettConfig};
///
/// let config = PunnettConfig {
///     output_format: OutputFormat::Json,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable sections mirroring the classic Punnett square
    /// worksheet layout.
    Text,

    /// Tab-separated records.
    ///
    /// Each line starts with a record type (`gametes`, `cell`,
    /// `phenotype`, `ratio`). Lightweight and easy to parse.
    Tsv,

    /// JSON serialization of the complete result object.
    Json,
}

/// Configuration settings for cross computation.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use punnett_core::config::PunnettConfig;
///
/// let config = PunnettConfig::default();
/// assert_eq!(config.max_genes, Some(10));
/// ```
///
/// ## Unbounded gene count
///
/// ```rust
/// use punnett_core::config::PunnettConfig;
///
/// let config = PunnettConfig {
///     max_genes: None,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PunnettConfig {
    /// Cap on the number of genes accepted per parent.
    ///
    /// A cross of `n` genes produces up to `2^n` gametes per parent and
    /// `4^n` grid cells, so unbounded input is a performance cliff.
    /// `None` disables the cap and accepts any valid genotype.
    ///
    /// **Default**: `Some(10)`
    pub max_genes: Option<usize>,

    /// Output format for cross results.
    ///
    /// Controls [`write_results`](crate::output::write_results). See
    /// [`OutputFormat`] for available options.
    ///
    /// **Default**: [`OutputFormat::Text`]
    pub output_format: OutputFormat,

    /// Suppress informational output during processing.
    ///
    /// When `true`, prevents progress messages from being printed to
    /// stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for PunnettConfig {
    fn default() -> Self {
        Self {
            max_genes: Some(DEFAULT_MAX_GENES),
            output_format: OutputFormat::Text,
            quiet: false,
        }
    }
}
