use std::io::Write;

use crate::{
    results::CrossResults,
    types::{PunnettError, Zygosity},
};

/// Write results as human-readable sections.
///
/// Mirrors the classic worksheet layout: an Alleles section listing
/// each parent's gametes, the Genotypes grid, Phenotypes with counts
/// and percentages, and per-gene Ratios. Percentages are printed
/// unrounded.
pub fn write_text_format<W: Write>(
    writer: &mut W,
    results: &CrossResults,
) -> Result<(), PunnettError> {
    writeln!(writer, "Alleles:")?;
    writeln!(writer, "Mom: {}", results.mom_gametes.join(", "))?;
    writeln!(writer, "Dad: {}", results.dad_gametes.join(", "))?;

    writeln!(writer)?;
    writeln!(writer, "Genotypes:")?;
    for row in &results.grid {
        let line: Vec<&str> = row.iter().map(|cell| cell.genotype.as_str()).collect();
        writeln!(writer, "{}", line.join("\t"))?;
    }

    writeln!(writer)?;
    writeln!(writer, "Phenotypes:")?;
    for group in &results.phenotypes {
        writeln!(writer, "{}: {} ({}%)", group.key, group.count, group.percent)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Ratios:")?;
    for ratio in &results.ratios {
        writeln!(writer, "{}/{}", ratio.gene, ratio.gene.to_ascii_lowercase())?;
        writeln!(
            writer,
            "  {} {} ({}% chance)",
            ratio.dominant,
            Zygosity::HomozygousDominant,
            ratio.dominant_percent()
        )?;
        writeln!(
            writer,
            "  {} {} ({}% chance)",
            ratio.heterozygous,
            Zygosity::Heterozygous,
            ratio.heterozygous_percent()
        )?;
        writeln!(
            writer,
            "  {} {} ({}% chance)",
            ratio.recessive,
            Zygosity::HomozygousRecessive,
            ratio.recessive_percent()
        )?;
    }

    Ok(())
}
