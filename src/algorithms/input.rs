// Custom input parsing: comma separated integer lists

use super::errors::InputError;

/// Parse `"2, 7, 11, 15"` (optionally bracketed, comma and/or whitespace
/// separated) into integers.
///
/// Any token that is not an `i64` rejects the whole list so a malformed
/// submission never reaches a generator.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = text
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']');

    let tokens: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::Empty);
    }

    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            token.parse::<i64>().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
                position: idx + 1,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(parse_sequence("2,7,11,15").unwrap(), vec![2, 7, 11, 15]);
        assert_eq!(parse_sequence(" [1, -2,  3] ").unwrap(), vec![1, -2, 3]);
        assert_eq!(parse_sequence("4 5\t6").unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_sequence("  "), Err(InputError::Empty));
        assert_eq!(
            parse_sequence("1, two, 3"),
            Err(InputError::InvalidNumber {
                token: "two".to_string(),
                position: 2
            })
        );
        assert!(parse_sequence("99999999999999999999").is_err());
    }
}
