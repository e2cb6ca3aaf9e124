extern crate regex;

use super::Parser;
use regex::Regex;

pub(super) struct RegexSet {
    params: Regex,
}
impl RegexSet {
    pub(super) fn new() -> Self {
        Self {
            params: Regex::new(r"\(([^)]*)\)").unwrap(),
        }
    }
}

fn is_signature_candidate(line: &str) -> bool {
    let line = line.trim_start();
    !(line.is_empty()
        || line.starts_with('#')
        || line.starts_with("//")
        || line.starts_with("/*")
        || line.starts_with('*')
        || line.starts_with("class "))
}

// Splits on commas that are not nested inside brackets or generics.
fn split_params(list: &str) -> Vec<&str> {
    let mut ret = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (pos, c) in list.char_indices() {
        match c {
            '[' | '<' | '{' | '(' => depth += 1,
            ']' | '>' | '}' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                ret.push(&list[start..pos]);
                start = pos + 1;
            }
            _ => (),
        }
    }
    ret.push(&list[start..]);
    ret.into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn is_receiver(param: &str) -> bool {
    param
        .split(|c: char| c == ':' || c.is_whitespace())
        .next()
        .map_or(false, |name| name == "self")
}

impl Parser {
    /// Number of arguments the starter's entry function takes, excluding a
    /// leading `self`. Falls back to 1 and never returns 0.
    pub fn infer_arg_count(&self, starter: &str) -> usize {
        starter
            .lines()
            .filter(|line| is_signature_candidate(line))
            .find_map(|line| self.arity.params.captures(line))
            .map(|cap| {
                let params = split_params(cap.get(1).map_or("", |m| m.as_str()));
                match params.split_first() {
                    Some((first, rest)) if is_receiver(first) => rest.len(),
                    _ => params.len(),
                }
            })
            .unwrap_or(1)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(starter: &str) -> usize {
        Parser::new().infer_arg_count(starter)
    }

    #[test]
    fn counts_parameters_after_self() {
        assert_eq!(count("def twoSum(self, nums, target):\n    pass"), 2);
        assert_eq!(count("def isValid(self, s):"), 1);
        assert_eq!(count("def merge(self, a, b, c, d):"), 4);
    }

    #[test]
    fn counts_parameters_without_receiver() {
        assert_eq!(count("function twoSum(nums, target) {\n}"), 2);
        assert_eq!(count("def two_sum(nums, target):\n    pass"), 2);
    }

    #[test]
    fn defaults_to_one_without_a_parameter_list() {
        assert_eq!(count(""), 1);
        assert_eq!(count("# func"), 1);
        assert_eq!(count("print 42"), 1);
    }

    #[test]
    fn empty_list_is_clamped_to_one() {
        assert_eq!(count("def reset(self):"), 1);
        assert_eq!(count("int main() {"), 1);
    }

    #[test]
    fn skips_class_header_and_comments() {
        let starter = "# Definition for singly-linked list.\n\
                       # class ListNode:\n\
                       #     def __init__(self, val=0, next=None):\n\
                       class Solution:\n    \
                       def addTwoNumbers(self, l1: Optional[ListNode], l2: Optional[ListNode]) -> Optional[ListNode]:\n";
        assert_eq!(count(starter), 2);
        assert_eq!(count("class Solution(object):\n    def climbStairs(self, n):"), 1);
    }

    #[test]
    fn nested_commas_do_not_split() {
        assert_eq!(
            count("def f(self, pairs: List[Tuple[int, int]], lookup: Dict[str, int]) -> int:"),
            2
        );
        assert_eq!(
            count("    public int count(Map<String, Integer> freq, int k) {"),
            2
        );
    }
}
