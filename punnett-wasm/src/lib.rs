use punnett_core::config::{OutputFormat, PunnettConfig};
use punnett_core::output::write_results;
use punnett_core::validate::validate;
use punnett_core::PunnettAnalyzer;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
pub struct WasmPunnettOptions {
    pub format: String,          // "text", "tsv", "json"
    pub max_genes: Option<usize>, // None disables the gene-count limit
}

impl Default for WasmPunnettOptions {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            max_genes: Some(punnett_core::constants::DEFAULT_MAX_GENES),
        }
    }
}

#[wasm_bindgen]
pub struct PunnettResult {
    output: String,
    cell_count: usize,
    phenotype_count: usize,
}

#[wasm_bindgen]
impl PunnettResult {
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> String {
        self.output.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    #[wasm_bindgen(getter)]
    pub fn phenotype_count(&self) -> usize {
        self.phenotype_count
    }
}

/// Check a pair of genotype strings before computing anything; lets a
/// page reject bad form input with a single notice.
#[wasm_bindgen]
pub fn validate_genotypes(mom: &str, dad: &str) -> bool {
    validate(mom, dad)
}

#[wasm_bindgen]
pub fn cross_genotypes(mom: &str, dad: &str, options_js: JsValue) -> Result<PunnettResult, JsValue> {
    // Parse options from JavaScript
    let wasm_options: WasmPunnettOptions =
        serde_wasm_bindgen::from_value(options_js).unwrap_or_default();

    let output_format = match wasm_options.format.as_str() {
        "text" => OutputFormat::Text,
        "tsv" => OutputFormat::Tsv,
        "json" => OutputFormat::Json,
        _ => return Err(JsValue::from_str("Invalid output format")),
    };

    let config = PunnettConfig {
        max_genes: wasm_options.max_genes,
        output_format,
        quiet: true,
    };

    let analyzer = PunnettAnalyzer::new(config);
    let results = analyzer
        .cross(mom, dad)
        .map_err(|e| JsValue::from_str(&format!("Cross error: {}", e)))?;

    let mut output = Vec::new();
    write_results(&mut output, &results, analyzer.config.output_format)
        .map_err(|e| JsValue::from_str(&format!("Output error: {}", e)))?;

    let output_str =
        String::from_utf8(output).map_err(|e| JsValue::from_str(&format!("UTF-8 error: {}", e)))?;

    Ok(PunnettResult {
        output: output_str,
        cell_count: results.cell_count(),
        phenotype_count: results.phenotypes.len(),
    })
}
