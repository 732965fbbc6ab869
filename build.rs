//! Build script to generate the embedded word chain dataset
//!
//! Reads the JSON dataset and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_chain_table(
        "data/word_chains.json",
        &Path::new(&out_dir).join("chains.rs"),
        "CHAINS",
        "Pre-built word ladder chains",
    );

    // Rebuild if the dataset changes
    println!("cargo:rerun-if-changed=data/word_chains.json");
}

fn generate_chain_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<serde_json::Value> = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {input_path}: {e}"));
    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated chain table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} chains)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} chains)").unwrap();
    writeln!(output, "pub const {const_name}: &[EmbeddedChain] = &[").unwrap();

    for record in &records {
        let field = |name: &str| {
            record[name]
                .as_str()
                .unwrap_or_else(|| panic!("Record is missing string field '{name}': {record}"))
                .trim()
                .to_string()
        };
        let number_of_words = record["number_of_words"]
            .as_u64()
            .map_or_else(|| "None".to_string(), |n| format!("Some({n})"));

        writeln!(output, "    EmbeddedChain {{").unwrap();
        writeln!(output, "        start_word: {:?},", field("start_word")).unwrap();
        writeln!(output, "        end_word: {:?},", field("end_word")).unwrap();
        writeln!(output, "        solution: {:?},", field("solution")).unwrap();
        writeln!(output, "        number_of_words: {number_of_words},").unwrap();
        writeln!(output, "    }},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of chains in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
