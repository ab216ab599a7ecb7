use crate::error::AiActError;
use std::io::{self, BufRead, Write};

/// Interactive prompt for manual library entry.
pub struct ManualPrompter;

impl ManualPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Ask for a comma-separated library list and split it into trimmed,
    /// non-empty names. An empty answer yields `NoInput`.
    pub fn prompt_library_names(&self) -> Result<Vec<String>, AiActError> {
        println!("--- AI Act Compliance: Manual Mode ---");
        println!("Enter your AI/ML libraries separated by commas (e.g., tensorflow, face_recognition, torch).");
        print!("Libraries: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;

        let names = parse_library_list(&input);
        if names.is_empty() {
            return Err(AiActError::NoInput);
        }

        Ok(names)
    }
}

impl Default for ManualPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma-separated operator input into trimmed, non-empty names.
pub fn parse_library_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
