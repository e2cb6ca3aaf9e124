extern crate regex;

use super::Parser;
use regex::Regex;

pub(super) struct RegexSet {
    pub(super) tag: Regex,
    block_end: Regex,
    list_item: Regex,
    blank_lines: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        Self {
            tag: Regex::new(r"</?[A-Za-z][^>]*>").unwrap(),
            block_end: Regex::new(r"(?i)<br\s*/?>|</(?:p|pre|div|li|ul|ol)>").unwrap(),
            list_item: Regex::new(r"(?i)[ \t]*<li[^>]*>").unwrap(),
            blank_lines: Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").unwrap(),
        }
    }
}

pub(super) fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

impl Parser {
    pub(super) fn strip_tags(&self, text: &str) -> String {
        decode_entities(&self.markup.tag.replace_all(text, ""))
    }

    /// Renders description markup for a terminal. Descriptions that are not
    /// markup pass through unchanged.
    pub fn to_plain_text(&self, description: &str) -> String {
        if !description.trim_start().starts_with('<') {
            return description.to_string();
        }
        let text = self.markup.block_end.replace_all(description, "\n");
        let text = self.markup.list_item.replace_all(&text, "- ");
        let text = text.replace("<sup>", "^");
        let text = self.strip_tags(&text);
        self.markup
            .blank_lines
            .replace_all(&text, "\n\n")
            .trim()
            .to_string()
    }
}
