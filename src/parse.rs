use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected another input line")]
    MissingLine,
    #[error("invalid integer {0:?}")]
    InvalidInt(String),
    #[error("expected a bracketed list literal, got {0:?}")]
    NotAList(String),
}

fn int(token: &str) -> Result<i64, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidInt(token.to_owned()))
}

/// Parses the counted input format: a count line, a line of
/// whitespace-separated integers, and a target line.
///
/// The count only pre-sizes the vector; the value line is authoritative
/// for how many integers there are.
pub fn counted(input: &str) -> Result<(Vec<i64>, i64), ParseError> {
    let mut lines = input.lines();

    let count = int(lines.next().ok_or(ParseError::MissingLine)?.trim())?;
    let mut nums = Vec::with_capacity(usize::try_from(count).unwrap_or(0));

    for token in lines
        .next()
        .ok_or(ParseError::MissingLine)?
        .split_whitespace()
    {
        nums.push(int(token)?);
    }

    let target = int(lines.next().ok_or(ParseError::MissingLine)?.trim())?;

    Ok((nums, target))
}

/// Parses the literal input format: a list literal line such as
/// `[2, 7, 11, 15]`, then a target line.
pub fn literal(input: &str) -> Result<(Vec<i64>, i64), ParseError> {
    let mut lines = input.lines();

    let nums = list_literal(lines.next().ok_or(ParseError::MissingLine)?)?;
    let target = int(lines.next().ok_or(ParseError::MissingLine)?.trim())?;

    Ok((nums, target))
}

/// Parses a bracketed list literal (`[]`, `[1]`, `[2, 7, 11, 15]`).
pub fn list_literal(line: &str) -> Result<Vec<i64>, ParseError> {
    let line = line.trim();
    let inner = line
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| ParseError::NotAList(line.to_owned()))?
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner.split(',').map(|token| int(token.trim())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_format() {
        let input = "4\n2 7 11 15\n9\n";

        let (nums, target) = counted(input).unwrap();
        assert_eq!(nums, vec![2, 7, 11, 15]);
        assert_eq!(target, 9);
    }

    #[test]
    fn counted_ignores_count_mismatch() {
        let input = "2\n2 7 11 15\n9\n";

        let (nums, _) = counted(input).unwrap();
        assert_eq!(nums, vec![2, 7, 11, 15]);
    }

    #[test]
    fn counted_missing_target_line() {
        let input = "4\n2 7 11 15\n";

        let err = counted(input).unwrap_err();
        assert_eq!(err, ParseError::MissingLine);
    }

    #[test]
    fn counted_bad_token() {
        let input = "3\n2 seven 11\n9\n";

        let err = counted(input).unwrap_err();
        assert_eq!(err, ParseError::InvalidInt("seven".to_owned()));
    }

    #[test]
    fn literal_format() {
        let input = "[2, 7, 11, 15]\n9\n";

        let (nums, target) = literal(input).unwrap();
        assert_eq!(nums, vec![2, 7, 11, 15]);
        assert_eq!(target, 9);
    }

    #[test]
    fn literal_empty_list() {
        let (nums, target) = literal("[]\n0\n").unwrap();
        assert!(nums.is_empty());
        assert_eq!(target, 0);
    }

    #[test]
    fn literal_negative_values() {
        let nums = list_literal("[-1000, -1, 0, 1]").unwrap();
        assert_eq!(nums, vec![-1000, -1, 0, 1]);
    }

    #[test]
    fn literal_missing_brackets() {
        let err = list_literal("2, 7, 11, 15").unwrap_err();
        assert_eq!(err, ParseError::NotAList("2, 7, 11, 15".to_owned()));
    }

    #[test]
    fn formats_agree() {
        let (a, ta) = counted("4\n2 7 11 15\n9\n").unwrap();
        let (b, tb) = literal("[2, 7, 11, 15]\n9\n").unwrap();

        assert_eq!(a, b);
        assert_eq!(ta, tb);
    }
}
