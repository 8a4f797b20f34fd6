//! # Punnett - Mendelian Cross Engine
//!
//! A library for computing genetic cross outcomes from two parental
//! genotype strings: gamete enumeration, Punnett square construction,
//! phenotype grouping, and per-gene inheritance ratios.
//!
//! ## Overview
//!
//! A genotype string describes one parent as two adjacent alleles per
//! gene (uppercase dominant, lowercase recessive), genes in alphabetical
//! order: `"AaBbCc"`. Crossing two genotypes enumerates each parent's
//! distinct gametes, takes their cartesian product, canonicalizes every
//! offspring combination, and derives phenotype classes and dominance
//! ratios from the resulting grid.
//!
//! The whole pipeline is synchronous, deterministic, and a pure
//! function of its two inputs: identical input yields byte-identical
//! output every time.
//!
//! ## Quick Start
//!
//! ```rust
//! use punnett_core::{PunnettAnalyzer, config::PunnettConfig};
//!
//! let analyzer = PunnettAnalyzer::new(PunnettConfig {
//!     quiet: true,
//!     ..Default::default()
//! });
//!
//! let results = analyzer.cross("Aa", "Aa")?;
//!
//! assert_eq!(results.mom_gametes, vec!["A", "a"]);
//! assert_eq!(results.grid[0][0].genotype, "AA");
//! assert_eq!(results.phenotypes[0].count, 3);
//! # Ok::<(), punnett_core::types::PunnettError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for cross computation
//! - [`engine`]: High-level analyzer running the full pipeline
//! - [`types`]: Core data types and the error enum
//! - [`results`]: Complete cross results
//! - [`allele`]: The canonical allele comparator
//! - [`validate`]: Genotype input validation
//! - [`gametes`]: Gamete enumeration
//! - [`cross`]: Cross combination and canonicalization
//! - [`grid`]: Grid construction
//! - [`phenotype`]: Phenotype classification
//! - [`ratios`]: Per-gene inheritance ratios
//! - [`output`]: Output formatting (text, TSV, JSON)
//!
//! ## Scaling
//!
//! A cross of `n` genes produces up to `2^n` gametes per parent and
//! `4^n` grid cells. [`config::PunnettConfig::max_genes`] caps the gene
//! count (default 10) and can be disabled for callers that accept the
//! cost.
//!
//! ## Error Handling
//!
//! All fallible operations return
//! [`Result<T, PunnettError>`](types::PunnettError). Malformed input is
//! reported as a single [`types::PunnettError::InvalidGenotype`] signal
//! with no further detail; the remaining variants indicate internal
//! invariant failures or I/O problems.

pub mod allele;
pub mod config;
pub mod constants;
pub mod cross;
pub mod engine;
pub mod gametes;
pub mod grid;
pub mod output;
pub mod phenotype;
pub mod ratios;
pub mod results;
pub mod types;
pub mod validate;

pub use engine::PunnettAnalyzer;
