use crate::types::TestCase;

// A lone quoted string with no comma loses its quotes; lists and other
// literals are left for the target runtime to interpret.
fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') && !value.contains(',') {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

/// Groups the non-blank lines of `raw` into cases of `arg_count` arguments.
/// A trailing short group is kept as a case of its own.
pub fn parse_test_cases(raw: &str, arg_count: usize) -> Vec<TestCase> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    lines
        .chunks(arg_count.max(1))
        .map(|chunk| TestCase::new(chunk.iter().map(|v| unquote(v)).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cases: &[TestCase]) -> Vec<Vec<&str>> {
        cases
            .iter()
            .map(|c| c.args.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn groups_lines_by_arity() {
        let cases = parse_test_cases("[2,7,11,15]\n9\n[3,2,4]\n6\n[3,3]\n6", 2);
        assert_eq!(
            args(&cases),
            vec![
                vec!["[2,7,11,15]", "9"],
                vec!["[3,2,4]", "6"],
                vec!["[3,3]", "6"]
            ]
        );
    }

    #[test]
    fn blank_lines_and_padding_are_ignored() {
        let cases = parse_test_cases("\n  [1,2]  \r\n\n3\r\n   \n", 1);
        assert_eq!(args(&cases), vec![vec!["[1,2]"], vec!["3"]]);
    }

    #[test]
    fn uneven_tail_forms_a_short_case() {
        let cases = parse_test_cases("1\n2\n3", 2);
        assert_eq!(args(&cases), vec![vec!["1", "2"], vec!["3"]]);
    }

    #[test]
    fn zero_arity_is_treated_as_one() {
        assert_eq!(parse_test_cases("1\n2", 0).len(), 2);
    }

    #[test]
    fn bare_strings_lose_their_quotes() {
        let cases = parse_test_cases("\"()[]{}\"\n\"a,b\"\n[\"x\",\"y\"]\n\"\"\n\"", 1);
        assert_eq!(
            args(&cases),
            vec![
                vec!["()[]{}"],
                vec!["\"a,b\""],
                vec!["[\"x\",\"y\"]"],
                vec![""],
                vec!["\""]
            ]
        );
    }

    #[test]
    fn empty_input_has_no_cases() {
        assert!(parse_test_cases("", 3).is_empty());
        assert!(parse_test_cases("\n \n", 3).is_empty());
    }
}
