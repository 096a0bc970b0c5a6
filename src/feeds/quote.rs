//! Random motivational quote from Quotable.

use super::{get_text, FeedError};
use crate::constants::QUOTE_URL;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
}

pub fn parse_quote(body: &str) -> Result<Quote, FeedError> {
    Ok(serde_json::from_str(body)?)
}

pub fn fetch_quote(agent: &ureq::Agent) -> Result<Quote, FeedError> {
    parse_quote(&get_text(agent, QUOTE_URL)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_with_author() {
        let body = r#"{
            "_id": "abc",
            "content": "Well begun is half done.",
            "author": "Aristotle",
            "tags": ["Motivational"],
            "length": 24
        }"#;
        let quote = parse_quote(body).unwrap();
        assert_eq!(quote.content, "Well begun is half done.");
        assert_eq!(quote.author.as_deref(), Some("Aristotle"));
    }

    #[test]
    fn test_parse_quote_without_author() {
        let quote = parse_quote(r#"{"content":"Keep going."}"#).unwrap();
        assert_eq!(quote.content, "Keep going.");
        assert!(quote.author.is_none());
    }

    #[test]
    fn test_parse_quote_rejects_garbage() {
        assert!(matches!(parse_quote("<html>"), Err(FeedError::Decode(_))));
    }
}
