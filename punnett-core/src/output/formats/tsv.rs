use std::io::Write;

use crate::{results::CrossResults, types::PunnettError};

/// Write results as tab-separated records.
///
/// Each line carries a record type in its first field:
///
/// ```text
/// gametes  <parent>  <gamete>...
/// cell     <row>  <col>  <genotype>  <phenotype>  <group>
/// phenotype  <key>  <group>  <count>  <percent>
/// ratio    <gene>  <dominant>  <heterozygous>  <recessive>  <total>
/// ```
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    results: &CrossResults,
) -> Result<(), PunnettError> {
    writeln!(writer, "gametes\tmom\t{}", results.mom_gametes.join("\t"))?;
    writeln!(writer, "gametes\tdad\t{}", results.dad_gametes.join("\t"))?;

    for (row_index, row) in results.grid.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            writeln!(
                writer,
                "cell\t{}\t{}\t{}\t{}\t{}",
                row_index, col_index, cell.genotype, cell.phenotype, cell.group
            )?;
        }
    }

    for group in &results.phenotypes {
        writeln!(
            writer,
            "phenotype\t{}\t{}\t{}\t{}",
            group.key, group.group, group.count, group.percent
        )?;
    }

    for ratio in &results.ratios {
        writeln!(
            writer,
            "ratio\t{}\t{}\t{}\t{}\t{}",
            ratio.gene, ratio.dominant, ratio.heterozygous, ratio.recessive, ratio.total
        )?;
    }

    Ok(())
}
