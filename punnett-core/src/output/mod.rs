//! Output formatting for cross results.
//!
//! This module provides writers for converting [`CrossResults`] into
//! the supported output formats.
//!
//! ## Supported Formats
//!
//! - **Text**: human-readable Alleles / Genotypes / Phenotypes / Ratios
//!   sections
//! - **TSV**: tab-separated records
//! - **JSON**: full result object
//!
//! ## Examples
//!
//! ```rust
//! use punnett_core::{PunnettAnalyzer, config::{PunnettConfig, OutputFormat}};
//! use punnett_core::output::write_results;
//! use std::io::stdout;
//!
//! let analyzer = PunnettAnalyzer::new(PunnettConfig { quiet: true, ..Default::default() });
//! let results = analyzer.cross("Aa", "Aa")?;
//!
//! write_results(&mut stdout(), &results, OutputFormat::Text)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{config::OutputFormat, results::CrossResults, types::PunnettError};
use std::io::Write;

mod formats {
    pub mod json;
    pub mod text;
    pub mod tsv;
}

use formats::{json::write_json_format, text::write_text_format, tsv::write_tsv_format};

/// Writes cross results in the specified format.
///
/// This is the main entry point for output formatting. It delegates to
/// format-specific writers based on the requested output format.
///
/// # Errors
///
/// Returns [`PunnettError`] if writing or serialization fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &CrossResults,
    format: OutputFormat,
) -> Result<(), PunnettError> {
    match format {
        OutputFormat::Text => write_text_format(writer, results),
        OutputFormat::Tsv => write_tsv_format(writer, results),
        OutputFormat::Json => write_json_format(writer, results),
    }
}
