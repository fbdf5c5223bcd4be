//! # Input Collector
//!
//! Turns what the cashier typed into scan tokens.
//!
//! ```text
//! "A, B,,C , A"  ──split(',')──►  ["A", " B", "", "C ", " A"]
//!                ──trim/skip ──►  ["A", "B", "C", "A"]
//! ```

use std::io::{BufRead, Write};

use tally_core::validation::validate_scan_token;
use tracing::debug;

use crate::error::TerminalResult;

/// Prompt shown when no items were given on the command line.
pub const PROMPT: &str = "Enter Scanned items:";

/// Splits one comma-delimited line into scan tokens.
///
/// Whitespace around tokens is trimmed and empty tokens are skipped.
pub fn parse_scan_line(line: &str) -> Vec<String> {
    line.split(',')
        .filter_map(|raw| match validate_scan_token(raw) {
            Ok(token) => Some(token.to_string()),
            Err(reason) => {
                debug!(raw, %reason, "Skipping scan token");
                None
            }
        })
        .collect()
}

/// Collects scan tokens from CLI arguments, or prompts for one line.
///
/// Arguments may themselves hold comma-separated items
/// (`tally A,B C` scans A, B, C).
pub fn collect_items<R, W>(args: &[String], input: &mut R, prompt: &mut W) -> TerminalResult<Vec<String>>
where
    R: BufRead,
    W: Write,
{
    if !args.is_empty() {
        return Ok(args.iter().flat_map(|arg| parse_scan_line(arg)).collect());
    }

    write!(prompt, "{}", PROMPT)?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_scan_line(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_scan_line() {
        assert_eq!(parse_scan_line("A,B,C,D,A,B,A"), vec!["A", "B", "C", "D", "A", "B", "A"]);
        assert_eq!(parse_scan_line(" A , B,,C \n"), vec!["A", "B", "C"]);
        assert!(parse_scan_line("").is_empty());
        assert!(parse_scan_line(" , ,").is_empty());
    }

    #[test]
    fn test_collect_from_args_skips_prompt() {
        let args = vec!["A,B".to_string(), "C".to_string()];
        let mut input = Cursor::new("ignored\n");
        let mut prompt = Vec::new();

        let items = collect_items(&args, &mut input, &mut prompt).unwrap();
        assert_eq!(items, vec!["A", "B", "C"]);
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_collect_from_stdin_prompts() {
        let mut input = Cursor::new("C,C,C\n");
        let mut prompt = Vec::new();

        let items = collect_items(&[], &mut input, &mut prompt).unwrap();
        assert_eq!(items, vec!["C", "C", "C"]);
        assert_eq!(String::from_utf8(prompt).unwrap(), PROMPT);
    }

    #[test]
    fn test_collect_from_empty_stdin() {
        let mut input = Cursor::new("");
        let mut prompt = Vec::new();
        assert!(collect_items(&[], &mut input, &mut prompt).unwrap().is_empty());
    }
}
