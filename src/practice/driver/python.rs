extern crate regex;

use regex::Regex;

pub(super) const NAME: &str = "python";

pub(super) const TEMPLATE: &str = r#"
import sys, json
if __name__ == "__main__":
    def parse_input(line):
        try:
            return json.loads(line)
        except Exception:
            return line

    input_lines = sys.stdin.read().splitlines()
    args = [parse_input(l) for l in input_lines if l.strip()]

    try:
        sol = {{class}}()
        result = sol.{{method}}(*args)
        print(json.dumps(result))
    except Exception as e:
        print(e)
"#;

pub(super) struct RegexSet {
    class: Regex,
    method: Regex,
    entry_point: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        Self {
            class: Regex::new(r"(?m)^[ \t]*class[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]*(?:\([^)]*\))?[ \t]*:")
                .unwrap(),
            method: Regex::new(r"(?m)^[ \t]*def[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]*\(").unwrap(),
            entry_point: Regex::new(r#"(?m)^if[ \t]+__name__[ \t]*==[ \t]*["']__main__["'][ \t]*:"#)
                .unwrap(),
        }
    }

    pub(super) fn has_class(&self, script: &str) -> bool {
        self.class.is_match(script)
    }

    /// Class name and the first method defined after it, when the script has
    /// a class and no entry point of its own.
    pub(super) fn target<'a>(&self, script: &'a str) -> Option<(&'a str, &'a str)> {
        if self.entry_point.is_match(script) {
            return None;
        }
        let class = self.class.captures(script)?;
        let rest = &script[class.get(0)?.end()..];
        let method = self.method.captures(rest)?;
        Some((class.get(1)?.as_str(), method.get(1)?.as_str()))
    }
}
