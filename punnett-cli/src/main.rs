//! # Punnett CLI - Command-Line Punnett Square Calculator
//!
//! A command-line interface for the Mendelian cross engine.
//!
//! ## Usage
//!
//! ```bash
//! # Basic monohybrid cross
//! punnett -m Aa -d Aa
//!
//! # Dihybrid cross, JSON output to a file
//! punnett -m AaBb -d AaBb -f json -o cross.json
//!
//! # Machine-readable TSV
//! punnett -m AaBb -d aabb -f tsv
//!
//! # Allow more than ten genes
//! punnett -m AaBbCcDdEeFfGgHhIiJjKk -d AaBbCcDdEeFfGgHhIiJjKk --unlimited
//! ```
//!
//! ## Options
//!
//! - `-m, --mom <GENOTYPE>`: Maternal genotype, e.g. `AaBbCc`
//! - `-d, --dad <GENOTYPE>`: Paternal genotype
//! - `-f, --format <FORMAT>`: Output format: text, tsv, json (default: text)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-g, --max-genes <N>`: Gene-count limit (default: 10)
//! - `--unlimited`: Disable the gene-count limit
//! - `-q, --quiet`: Suppress progress messages

use clap::{Arg, ArgAction, Command};
use punnett_core::config::{OutputFormat, PunnettConfig};
use punnett_core::output::write_results;
use punnett_core::PunnettAnalyzer;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("punnett")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Punnett square calculator")
        .arg(
            Arg::new("mom")
                .short('m')
                .long("mom")
                .value_name("GENOTYPE")
                .required(true)
                .help("Maternal genotype in the form AaBbCc"),
        )
        .arg(
            Arg::new("dad")
                .short('d')
                .long("dad")
                .value_name("GENOTYPE")
                .required(true)
                .help("Paternal genotype in the form AaBbCc"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, tsv, json")
                .default_value("text"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("max-genes")
                .short('g')
                .long("max-genes")
                .value_name("N")
                .help("Gene-count limit")
                .default_value("10"),
        )
        .arg(
            Arg::new("unlimited")
                .long("unlimited")
                .action(ArgAction::SetTrue)
                .help("Disable the gene-count limit"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let mut config = PunnettConfig {
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    config.max_genes = if matches.get_flag("unlimited") {
        None
    } else {
        let limit: usize = matches
            .get_one::<String>("max-genes")
            .map(|s| s.as_str())
            .unwrap_or_default()
            .parse()
            .map_err(|_| "Invalid gene-count limit")?;
        Some(limit)
    };

    config.output_format = match matches.get_one::<String>("format").unwrap().as_str() {
        "text" => OutputFormat::Text,
        "tsv" => OutputFormat::Tsv,
        "json" => OutputFormat::Json,
        _ => return Err("Invalid output format".into()),
    };

    let mom = matches.get_one::<String>("mom").unwrap();
    let dad = matches.get_one::<String>("dad").unwrap();

    let analyzer = PunnettAnalyzer::new(config);
    let results = analyzer.cross(mom, dad)?;

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_results(&mut writer, &results, analyzer.config.output_format)?;
    writer.flush()?;

    if !matches.get_flag("quiet") {
        eprintln!(
            "Cross complete! {}x{} grid, {} phenotypes, {} genes.",
            results.rows(),
            results.columns(),
            results.phenotypes.len(),
            results.ratios.len()
        );
    }

    Ok(())
}
