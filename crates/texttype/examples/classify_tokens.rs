//! Prints how each command-line token is classified.
//!
//! ```text
//! cargo run --example classify_tokens -- 123 1.5 0xFF NOW+30 "0a 0b" 192.168.0.1
//! ```

use texttype::{
    candidate_text_types, suggest_text_type, suggest_text_type_specific, validate_text, TextType,
    ValidationOptions,
};

fn format_candidates(candidates: Option<Vec<TextType>>) -> String {
    match candidates {
        None => "-".to_string(),
        Some(list) if list.is_empty() => "(none)".to_string(),
        Some(list) => list
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn main() {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let tokens = if tokens.is_empty() {
        ["123", "-4.5", "0x1A2B", "-0x1A2B", "2024-03-15/14:30:00", "NOW+30", "0a 0b 0c"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        tokens
    };

    let options = ValidationOptions::default();

    for token in &tokens {
        let suggested = suggest_text_type(token, false);
        let specific = suggest_text_type_specific(token, true);
        println!("\n=== {:?} ===", token);
        println!("Suggested:       {}", suggested);
        println!("Specific (no text): {:?}", specific);
        println!("Valid as:        {}", format_candidates(candidate_text_types(token, false)));

        for text_type in [TextType::Integer, TextType::Float, TextType::Hex] {
            if let Err(reason) = validate_text(token, text_type, &options) {
                println!("  not {:<8} {}", text_type.to_string() + ":", reason);
            }
        }
    }
}
