//! Splits a model reply into code and prose.
//!
//! This is a heuristic, not a Markdown parser: the reply is cut on every
//! triple-backtick fence and the pieces are picked by position. A language tag
//! after the opening fence (```` ```python ````) stays in the code.

/// Fence delimiter the heuristic splits on.
pub const FENCE: &str = "```";

/// Explanation used when the reply has no prose after the first code block.
pub const DEFAULT_EXPLANATION: &str = "Code generated successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedResponse {
    pub code: String,
    pub explanation: String,
}

/// Shape a raw completion into code and explanation.
///
/// With at least one fence, `code` is the trimmed segment after the first fence and
/// `explanation` the trimmed segment after the second one. Without a fence the whole
/// text is the code, untouched.
pub fn shape_generated(text: &str) -> ShapedResponse {
    if !text.contains(FENCE) {
        return ShapedResponse {
            code: text.to_string(),
            explanation: DEFAULT_EXPLANATION.to_string(),
        };
    }

    let parts: Vec<&str> = text.split(FENCE).collect();

    let code = parts
        .get(1)
        .map(|segment| segment.trim().to_string())
        .unwrap_or_else(|| text.to_string());
    let explanation = parts
        .get(2)
        .map(|segment| segment.trim().to_string())
        .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string());

    ShapedResponse { code, explanation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_splits_code_and_tail() {
        let shaped = shape_generated("intro```CODE```tail");
        assert_eq!(shaped.code, "CODE");
        assert_eq!(shaped.explanation, "tail");
    }

    #[test]
    fn no_fence_returns_whole_text_untrimmed() {
        let text = "  def f(): pass\n";
        let shaped = shape_generated(text);
        assert_eq!(shaped.code, text);
        assert_eq!(shaped.explanation, DEFAULT_EXPLANATION);
    }

    #[test]
    fn lone_fence_uses_default_explanation() {
        let shaped = shape_generated("Here you go:\n```\nfn main() {}\n");
        assert_eq!(shaped.code, "fn main() {}");
        assert_eq!(shaped.explanation, DEFAULT_EXPLANATION);
    }

    #[test]
    fn language_tag_stays_with_code() {
        let shaped = shape_generated("```python\nprint('hi')\n```\nPrints a greeting.");
        assert_eq!(shaped.code, "python\nprint('hi')");
        assert_eq!(shaped.explanation, "Prints a greeting.");
    }

    #[test]
    fn only_first_block_and_following_prose_are_used() {
        let shaped = shape_generated("a```one```between```two```end");
        assert_eq!(shaped.code, "one");
        assert_eq!(shaped.explanation, "between");
    }

    #[test]
    fn closing_fence_at_end_leaves_empty_explanation() {
        // The segment after the closing fence exists but is blank.
        let shaped = shape_generated("```x = 1```");
        assert_eq!(shaped.code, "x = 1");
        assert_eq!(shaped.explanation, "");
    }
}
