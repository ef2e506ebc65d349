//! Free-text trip parsing.
//!
//! Turns a sentence like "Flights from DEL to BOM for 2 people on
//! 2024-12-25" into a [`SearchQuery`]. Extraction is keyword-positional:
//! the token after the first FROM is the origin, the token after the first
//! TO is the destination, the token after the first FOR is the traveller
//! count when it is numeric. The date is matched anywhere in the raw text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::search::SearchQuery;

/// Advisory shown to the user when parsing fails.
pub const REPHRASE_ADVICE: &str =
    "Couldn't understand the trip description. Try 'Flights from DEL to BOM for 2'";

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date shape regex"));

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseFailure {
    /// Origin or destination could not be located in the text. Terminal;
    /// the caller surfaces an advisory instead of retrying.
    #[error("could not locate origin and destination in query text")]
    AmbiguousInput,
}

/// Extract a [`SearchQuery`] from free text.
///
/// Pure function of its input: same text in, same query out. Missing
/// traveller count or date degrade to defaults; a missing origin or
/// destination is the only failure.
pub fn parse(text: &str) -> Result<SearchQuery, ParseFailure> {
    let normalized = text.to_uppercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let origin = token_after(&words, "FROM");
    let destination = token_after(&words, "TO");

    // Only a whole positive number after FOR counts; anything else keeps
    // the default of one traveller rather than failing the parse.
    let traveller_count = token_after(&words, "FOR")
        .and_then(|token| token.parse::<u32>().ok())
        .filter(|count| *count >= 1)
        .unwrap_or(1);

    // Scan the raw input, not the token list: the date shape survives
    // normalization but its position among tokens is irrelevant.
    let travel_date = DATE_SHAPE.find(text).map(|m| m.as_str().to_string());

    match (origin, destination) {
        (Some(origin), Some(destination)) => {
            let query = SearchQuery {
                origin_code: origin.to_string(),
                destination_code: destination.to_string(),
                traveller_count,
                travel_date,
            };
            debug!("Parsed trip query: {:?}", query);
            Ok(query)
        }
        _ => {
            debug!("Ambiguous trip text, origin or destination missing");
            Err(ParseFailure::AmbiguousInput)
        }
    }
}

/// Token immediately following the first occurrence of `keyword`, if any.
fn token_after<'a>(words: &[&'a str], keyword: &str) -> Option<&'a str> {
    let index = words.iter().position(|word| *word == keyword)?;
    words.get(index + 1).copied()
}
