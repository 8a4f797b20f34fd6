use std::io::Write;

use crate::{results::CrossResults, types::PunnettError};

/// Write results as a pretty-printed JSON object.
pub fn write_json_format<W: Write>(
    writer: &mut W,
    results: &CrossResults,
) -> Result<(), PunnettError> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PunnettConfig;
    use crate::PunnettAnalyzer;

    #[test]
    fn test_json_round_trips_as_value() {
        let analyzer = PunnettAnalyzer::new(PunnettConfig {
            quiet: true,
            ..PunnettConfig::default()
        });
        let results = analyzer.cross("AaBb", "aabb").unwrap();

        let mut output = Vec::new();
        write_json_format(&mut output, &results).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["mom_gametes"].as_array().unwrap().len(), 4);
        assert_eq!(value["dad_gametes"][0], "ab");
        assert_eq!(value["grid"][0][0]["genotype"], "AaBb");
        assert_eq!(value["grid"][0][0]["phenotype"], "AB");
        assert_eq!(value["ratios"][0]["gene"], "A");
        assert_eq!(value["ratios"][0]["heterozygous"], 2);
    }

    #[test]
    fn test_json_ends_with_newline() {
        let analyzer = PunnettAnalyzer::new(PunnettConfig {
            quiet: true,
            ..PunnettConfig::default()
        });
        let results = analyzer.cross("Aa", "Aa").unwrap();

        let mut output = Vec::new();
        write_json_format(&mut output, &results).unwrap();
        assert_eq!(output.last(), Some(&b'\n'));
    }
}
