//! Expansion of human line-range specifications.
//!
//! A range spec is a whitespace-separated list of 1-based line numbers
//! (`"7"`) and inclusive ranges (`"1-4"`). Expansion turns it into the
//! zero-based indices of the referenced file, in token order.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Malformed line range token: {token:?}")]
    MalformedToken { token: String },
}

/// Expand a range spec such as `"1-4 7-10 22"` into zero-based indices.
///
/// The example returns `[0, 1, 2, 3, 6, 7, 8, 9, 21]`. An empty spec
/// returns an empty list, which callers treat as "every line".
///
/// Token order is kept and nothing is deduplicated, so `"3 1-2 3"` gives
/// `[2, 0, 1, 2]`. A descending range (`"5-2"`) contributes nothing.
///
/// Line `0` sits before the first line and yields no index, so `"0-3"`
/// gives the same indices as `"1-3"`. Ranges are expanded in full,
/// so an upper bound far past the end of any file still allocates an index
/// per number.
pub fn expand_indices(range_spec: &str) -> Result<Vec<usize>, RangeError> {
    Ok(expand(range_spec)?.0)
}

/// Lines a marker selects: `None` for every line, otherwise the indices.
///
/// Differs from [`expand_indices`] only for specs that name line `0` and
/// nothing else (`"0"`, `"0-0"`). Those point before the first line, so
/// they select no lines rather than falling back to the whole file.
pub fn expand_selection(range_spec: &str) -> Result<Option<Vec<usize>>, RangeError> {
    let (indices, names_any_line) = expand(range_spec)?;
    Ok(names_any_line.then_some(indices))
}

/// Expands every token, also reporting whether any token named a line,
/// counting line `0`.
fn expand(range_spec: &str) -> Result<(Vec<usize>, bool), RangeError> {
    let mut indices = Vec::new();
    let mut names_any_line = false;

    for token in range_spec.split_whitespace() {
        match token.split_once('-') {
            Some((first, last)) => {
                let first = line_number(first, token)?;
                let last = line_number(last, token)?;
                names_any_line |= first <= last;
                indices.extend(first.saturating_sub(1)..last);
            }
            None => {
                names_any_line = true;
                if let Some(index) = line_number(token, token)?.checked_sub(1) {
                    indices.push(index);
                }
            }
        }
    }

    Ok((indices, names_any_line))
}

fn line_number(text: &str, token: &str) -> Result<usize, RangeError> {
    text.parse::<usize>()
        .map_err(|_| RangeError::MalformedToken {
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("   \t ", vec![])]
    #[case("3", vec![2])]
    #[case("2-2", vec![1])]
    #[case("1-4 7-10 22", vec![0, 1, 2, 3, 6, 7, 8, 9, 21])]
    #[case("  1-2\t\t5 ", vec![0, 1, 4])]
    #[case("0", vec![])]
    #[case("0-3", vec![0, 1, 2])]
    #[case("0-0", vec![])]
    #[case("0 2", vec![1])]
    fn test_expand_indices(#[case] spec: &str, #[case] expected: Vec<usize>) {
        assert_eq!(expand_indices(spec).unwrap(), expected);
    }

    #[rstest]
    #[case("", None)]
    #[case("5-2", None)]
    #[case("0", Some(vec![]))]
    #[case("0-0 7-3", Some(vec![]))]
    #[case("0-2", Some(vec![0, 1]))]
    #[case("2 2", Some(vec![1, 1]))]
    fn test_expand_selection(#[case] spec: &str, #[case] expected: Option<Vec<usize>>) {
        assert_eq!(expand_selection(spec).unwrap(), expected);
    }

    #[test]
    fn test_descending_range_is_empty() {
        assert_eq!(expand_indices("5-2").unwrap(), Vec::<usize>::new());
        assert_eq!(expand_indices("5-2 1").unwrap(), vec![0]);
    }

    #[test]
    fn test_token_order_and_repeats_are_kept() {
        assert_eq!(expand_indices("3 1-2 3").unwrap(), vec![2, 0, 1, 2]);
        assert_eq!(expand_indices("2-3 1-3").unwrap(), vec![1, 2, 0, 1, 2]);
    }

    #[rstest]
    #[case("x")]
    #[case("1-")]
    #[case("-3")]
    #[case("1-2-3")]
    #[case("a-b")]
    #[case("1.5")]
    fn test_malformed_tokens(#[case] token: &str) {
        let err = expand_indices(token).unwrap_err();
        assert_eq!(
            err,
            RangeError::MalformedToken {
                token: token.to_string()
            }
        );
    }

    #[test]
    fn test_malformed_token_reported_after_valid_ones() {
        let err = expand_indices("1-3 7 nope 9").unwrap_err();
        assert!(err.to_string().contains("\"nope\""));
    }

    #[test]
    fn test_indices_are_one_less_than_line_numbers() {
        let spec = "4 10-12 1 6-6";
        let indices = expand_indices(spec).unwrap();
        let lines: Vec<usize> = indices.iter().map(|i| i + 1).collect();
        assert_eq!(lines, vec![4, 10, 11, 12, 1, 6]);
    }
}
