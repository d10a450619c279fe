use crate::quote::prompts::{FALLBACK_QUOTE, MIN_QUOTE_CHARS, QUOTE_MARKER};

/// Whether a cleaned quote came straight from the model or from the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanedQuote {
    Generated(String),
    Fallback,
}

impl CleanedQuote {
    pub fn into_text(self) -> String {
        match self {
            CleanedQuote::Generated(text) => text,
            CleanedQuote::Fallback => FALLBACK_QUOTE.to_string(),
        }
    }
}

/// Trims the raw completion, drops a leading "Quote:" (any case), and applies the length guard.
pub fn clean_quote(raw: &str) -> CleanedQuote {
    let text = raw.trim();
    let quote = strip_marker(text).unwrap_or(text);

    if quote.chars().count() < MIN_QUOTE_CHARS {
        CleanedQuote::Fallback
    } else {
        CleanedQuote::Generated(quote.to_string())
    }
}

fn strip_marker(text: &str) -> Option<&str> {
    let prefix = text.get(..QUOTE_MARKER.len())?;
    prefix
        .eq_ignore_ascii_case(QUOTE_MARKER)
        .then(|| text[QUOTE_MARKER.len()..].trim())
}
