//! Benchmark for token classification over a corpus of field values.
//!
//! Each row carries a token and, optionally, the unit and declared data type
//! of the field it was typed into. The unit/type hints build the candidate
//! list exactly as a value editor would.
//!
//! ```text
//! bench-tokens [corpus.json] [--json]
//! RUST_LOG=texttype=trace bench-tokens corpus.json
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use texttype::{
    check_text_validity_in, get_text_type_list, suggest_text_type_specific,
    suggest_text_type_with, TextType, TextTypeSpecific, ValidationOptions,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const ITERS: u32 = 20;
const SYNTHETIC_ROWS: usize = 50_000;

// =============================================================================
// CORPUS
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
struct Row {
    token: String,
    #[serde(default)]
    unit: String,
    #[serde(default, rename = "dataType")]
    data_type: String,
}

impl Row {
    fn new(token: impl Into<String>, unit: &str, data_type: &str) -> Self {
        Self {
            token: token.into(),
            unit: unit.to_string(),
            data_type: data_type.to_string(),
        }
    }
}

/// Builds a deterministic corpus covering every type.
fn synthetic_corpus(rows: usize) -> Vec<Row> {
    (0..rows)
        .map(|i| match i % 12 {
            0 => Row::new(format!("{}", i), "", "int32"),
            1 => Row::new(format!("-{}.{}", i / 7, i % 100), "", "float"),
            2 => Row::new(format!("0x{:X}", i * 31), "HEX", ""),
            3 => Row::new(
                format!("20{:02}-{:02}-{:02}/12:{:02}:00", i % 100, i % 12 + 1, i % 28 + 1, i % 60),
                "UTC",
                "",
            ),
            4 => Row::new(
                format!("{}/{}/2024 08:15", i % 12 + 1, i % 28 + 1),
                "",
                "",
            ),
            5 => Row::new(format!("NOW-{}", i), "TIMEDATE", ""),
            6 => Row::new(
                format!("10.{}.{}.{}", i % 256, (i / 256) % 256, i % 7),
                "",
                "",
            ),
            7 => Row::new(format!("value_{}", i), "TEXT", ""),
            8 => Row::new(
                format!("{:02x} {:02x} 0x{:02x} {:02X}h", i % 256, (i * 3) % 256, (i * 5) % 256, (i * 7) % 256),
                "SPACEDHEXSTRING",
                "",
            ),
            9 => Row::new(format!("-0x{:x}", i), "", ""),
            10 => Row::new(format!("{}", i as u64 * 1_000_000_007), "", "float"),
            _ => Row::new(format!("\"label {}\"", i), "", ""),
        })
        .collect()
}

// =============================================================================
// REPORT
// =============================================================================

#[derive(Debug, Default, Serialize)]
struct Report {
    rows: usize,
    hinted_matches: BTreeMap<String, usize>,
    hinted_unassigned: usize,
    suggested: BTreeMap<String, usize>,
    specific: BTreeMap<String, usize>,
    list_build_ns_per_row: f64,
    validate_ns_per_row: f64,
    suggest_ns_per_row: f64,
    specific_ns_per_row: f64,
}

fn per_row(elapsed: Duration, rows: usize) -> f64 {
    if rows == 0 {
        return 0.0;
    }
    elapsed.as_nanos() as f64 / (rows as f64 * ITERS as f64)
}

fn print_histogram(title: &str, counts: &BTreeMap<String, usize>) {
    println!("\n=== {} ===", title);
    for (name, count) in counts {
        println!("  {:<18} {}", name, count);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let emit_json = args.iter().any(|a| a == "--json");
    let corpus_path = args.iter().find(|a| !a.starts_with("--"));

    let rows = match corpus_path {
        Some(path) => {
            info!("Loading corpus from: {}", path);
            let json = match fs::read_to_string(path) {
                Ok(json) => json,
                Err(err) => {
                    eprintln!("Failed to read {}: {}", path, err);
                    std::process::exit(1);
                }
            };
            match serde_json::from_str::<Vec<Row>>(&json) {
                Ok(rows) => rows,
                Err(err) => {
                    eprintln!("Failed to parse {}: {}", path, err);
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("No corpus given, generating {} rows", SYNTHETIC_ROWS);
            synthetic_corpus(SYNTHETIC_ROWS)
        }
    };

    if rows.is_empty() {
        warn!("Corpus is empty");
    }

    let options = ValidationOptions::default();
    let mut report = Report {
        rows: rows.len(),
        ..Report::default()
    };

    // Candidate lists from unit/type hints
    let build_lists = || -> Vec<Vec<TextType>> {
        rows.iter()
            .map(|r| get_text_type_list(&r.unit, &r.data_type))
            .collect()
    };
    let start = Instant::now();
    for _ in 0..ITERS {
        black_box(build_lists());
    }
    report.list_build_ns_per_row = per_row(start.elapsed(), rows.len());
    let lists = build_lists();

    // Hinted validation
    let validate_rows = || -> Vec<Option<TextType>> {
        rows.iter()
            .zip(&lists)
            .map(|(r, list)| check_text_validity_in(&r.token, list, &options))
            .collect()
    };
    let start = Instant::now();
    for _ in 0..ITERS {
        black_box(validate_rows());
    }
    report.validate_ns_per_row = per_row(start.elapsed(), rows.len());

    for m in validate_rows() {
        match m {
            Some(t) => *report.hinted_matches.entry(t.to_string()).or_default() += 1,
            None => report.hinted_unassigned += 1,
        }
    }

    // Suggestion honouring the float hint
    let suggest_rows = || -> Vec<TextType> {
        rows.iter()
            .zip(&lists)
            .map(|(r, list)| suggest_text_type_with(&r.token, list, false))
            .collect()
    };
    let start = Instant::now();
    for _ in 0..ITERS {
        black_box(suggest_rows());
    }
    report.suggest_ns_per_row = per_row(start.elapsed(), rows.len());

    for t in suggest_rows() {
        *report.suggested.entry(t.to_string()).or_default() += 1;
    }

    // Most specific outcome, text omitted
    let specific_rows = || -> Vec<TextTypeSpecific> {
        rows.iter()
            .map(|r| suggest_text_type_specific(&r.token, true))
            .collect()
    };
    let start = Instant::now();
    for _ in 0..ITERS {
        black_box(specific_rows());
    }
    report.specific_ns_per_row = per_row(start.elapsed(), rows.len());

    for s in specific_rows() {
        *report.specific.entry(format!("{:?}", s)).or_default() += 1;
    }

    if emit_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Failed to serialize report: {}", err),
        }
        return;
    }

    println!("\n=== Timing (avg of {} iterations) ===", ITERS);
    println!("Rows: {}", report.rows);
    println!("Candidate list:     {:.1} ns/row", report.list_build_ns_per_row);
    println!("Hinted validation:  {:.1} ns/row", report.validate_ns_per_row);
    println!("Suggest (hinted):   {:.1} ns/row", report.suggest_ns_per_row);
    println!("Suggest specific:   {:.1} ns/row", report.specific_ns_per_row);

    print_histogram("Hinted matches", &report.hinted_matches);
    println!("  {:<18} {}", "Unassigned", report.hinted_unassigned);
    print_histogram("Suggested", &report.suggested);
    print_histogram("Specific (text omitted)", &report.specific);
}
