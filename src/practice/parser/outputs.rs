extern crate regex;

use super::Parser;
use regex::{Captures, Regex};

pub(super) struct RegexSet {
    example: Regex,
    output: Regex,
    output_anywhere: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        Self {
            example: Regex::new(r"(?i)<strong[^>]*>\s*Example\s*\d+\s*:?\s*</strong>").unwrap(),
            output: Regex::new(
                r"(?is)Output:\s*(?:</strong>)?\s*(?:<span[^>]*>(.*?)</span>|([^<]+))",
            )
            .unwrap(),
            output_anywhere: Regex::new(
                r"(?i)Output:\s*(?:</strong>)?\s*(?:<span[^>]*>)?([^<\r\n]+)",
            )
            .unwrap(),
        }
    }
}

fn first_group<'t>(cap: &Captures<'t>) -> Option<&'t str> {
    cap.iter().skip(1).flatten().next().map(|m| m.as_str())
}

impl Parser {
    fn clean_output(&self, raw: &str) -> Option<String> {
        let text = self.strip_tags(raw);
        let text = text.trim().trim_start_matches('*').trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Expected outputs of the worked examples, in order of appearance.
    /// Pairs with test cases by index but may be shorter or longer.
    pub fn parse_expected_outputs(&self, description: &str) -> Vec<String> {
        let ret: Vec<String> = self
            .outputs
            .example
            .split(description)
            .skip(1)
            .filter_map(|segment| self.outputs.output.captures(segment))
            .filter_map(|cap| first_group(&cap).and_then(|raw| self.clean_output(raw)))
            .collect();
        if !ret.is_empty() {
            return ret;
        }
        self.outputs
            .output_anywhere
            .captures_iter(description)
            .filter_map(|cap| first_group(&cap).and_then(|raw| self.clean_output(raw)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SUM: &str = r#"<p>Given an array of integers <code>nums</code>&nbsp;and an integer <code>target</code>, return <em>indices of the two numbers</em>.</p>

<p><strong class="example">Example 1:</strong></p>

<pre>
<strong>Input:</strong> nums = [2,7,11,15], target = 9
<strong>Output:</strong> [0,1]
<strong>Explanation:</strong> Because nums[0] + nums[1] == 9, we return [0, 1].
</pre>

<p><strong class="example">Example 2:</strong></p>

<pre>
<strong>Input:</strong> nums = [3,2,4], target = 6
<strong>Output:</strong> [1,2]
</pre>
"#;

    #[test]
    fn extracts_one_output_per_example() {
        let parser = Parser::new();
        assert_eq!(parser.parse_expected_outputs(TWO_SUM), vec!["[0,1]", "[1,2]"]);
    }

    #[test]
    fn strips_span_wrappers_and_entities() {
        let parser = Parser::new();
        let html = r#"<p><strong>Example 1:</strong></p>
<div class="example-block">
<p><strong>Input:</strong> <span class="example-io">s = &quot;()&quot;</span></p>
<p><strong>Output:</strong> <span class="example-io">true</span></p>
</div>
<p><strong>Example 2:</strong></p>
<div class="example-block">
<p><strong>Output:</strong> <span class="example-io"><code>&quot;a&nbsp;b&quot;</code></span></p>
</div>"#;
        assert_eq!(parser.parse_expected_outputs(html), vec!["true", "\"a b\""]);
    }

    #[test]
    fn examples_without_output_are_skipped() {
        let parser = Parser::new();
        let html = "<strong>Example 1:</strong> nothing here\n<strong>Example 2:</strong>\n<strong>Output:</strong> 42\n";
        assert_eq!(parser.parse_expected_outputs(html), vec!["42"]);
    }

    #[test]
    fn falls_back_to_global_scan() {
        let parser = Parser::new();
        let text = "**Example 1:**\nInput: nums = [2,7,11,15], target = 9\nOutput: [0,1]\nExplanation: Because nums[0] + nums[1] == 9.\n\n**Example 2:**\nInput: nums = [3,2,4], target = 6\nOutput: [1,2]";
        assert_eq!(parser.parse_expected_outputs(text), vec!["[0,1]", "[1,2]"]);
    }

    #[test]
    fn nothing_found_is_empty() {
        let parser = Parser::new();
        assert!(parser.parse_expected_outputs("").is_empty());
        assert!(parser
            .parse_expected_outputs("<p>Design a stack.</p>")
            .is_empty());
    }
}
