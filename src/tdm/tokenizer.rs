/// Splits a raw transaction line into its tokens.
///
/// Splits on whitespace and drops the empty tokens produced by repeated
/// separators. No case folding, stemming or stop-word handling happens here;
/// normalization is an upstream concern. An empty line yields an empty bag,
/// not an error.
pub fn tokenize(document: &str) -> Vec<String> {
    document.split_whitespace().map(str::to_string).collect()
}

/// Tokenizes a whole transaction collection into bags of words, one bag per
/// line, preserving document order.
pub fn tokenize_all<T>(documents: &[T]) -> Vec<Vec<String>>
where
    T: AsRef<str>,
{
    documents.iter().map(|doc| tokenize(doc.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("stent heart attack"), vec!["stent", "heart", "attack"]);
    }

    #[test]
    fn repeated_separators_yield_no_empty_tokens() {
        assert_eq!(tokenize("  a \t b\n\nc  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_document_yields_empty_bag() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn no_normalization_is_applied() {
        assert_eq!(tokenize("Stent stent"), vec!["Stent", "stent"]);
    }

    #[test]
    fn tokenize_all_preserves_document_order() {
        let bags = tokenize_all(&["b a", "", "c"]);
        assert_eq!(bags.len(), 3);
        assert_eq!(bags[0], vec!["b", "a"]);
        assert!(bags[1].is_empty());
        assert_eq!(bags[2], vec!["c"]);
    }
}
