use crate::error::WordListError;

/// Parse the flat JSON array served as the extended dictionary.
pub fn parse_word_list(json: &str) -> Result<Vec<String>, WordListError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_array() {
        let words = parse_word_list(r#"["plan", "Planet", "ant"]"#).unwrap();
        assert_eq!(words, vec!["plan", "Planet", "ant"]);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_word_list(r#"{"words": ["plan"]}"#).is_err());
        assert!(parse_word_list("[1, 2]").is_err());
        assert!(parse_word_list("").is_err());
    }
}
