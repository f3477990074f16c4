//! Validation helpers for shell input
//!
//! Positions are 1-based on the command line and refer to the active list
//! as last shown by `list`.

use anyhow::{Result, bail};

/// Convert a 1-based position into an index into a list of `count` items
///
/// # Arguments
/// * `position` - Position typed by the user (first item is 1)
/// * `count` - Number of items currently in the list
///
/// # Returns
/// The 0-based index, or an error describing the valid range
pub fn resolve_position(position: usize, count: usize) -> Result<usize> {
    if count == 0 {
        bail!("No active projects. Add one first with: add <class> <due> <description>");
    }
    if position == 0 || position > count {
        bail!(
            "No project at position {}. Valid positions: 1-{}",
            position,
            count
        );
    }
    Ok(position - 1)
}

/// Split a command line into arguments
///
/// Arguments are separated by whitespace; double quotes group words into a
/// single argument (`add CS101 12/31/2099 "Final essay"`). A backslash
/// inside quotes escapes the next character.
pub fn split_arguments(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            '\\' if in_quotes => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => bail!("Unterminated escape at end of line"),
            },
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        bail!("Unterminated quote in: {}", line);
    }
    if has_token {
        args.push(current);
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_position() {
        assert_eq!(resolve_position(1, 3).unwrap(), 0);
        assert_eq!(resolve_position(3, 3).unwrap(), 2);
        assert!(resolve_position(0, 3).is_err());
        assert!(resolve_position(4, 3).is_err());
        let err = resolve_position(1, 0).unwrap_err();
        assert!(err.to_string().contains("No active projects"));
    }

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_arguments("  add CS101   12/31/2099 Homework ").unwrap(),
            vec!["add", "CS101", "12/31/2099", "Homework"]
        );
        assert!(split_arguments("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_quoted_words() {
        assert_eq!(
            split_arguments(r#"add "Physics 201" 12/15/2099 "Lab report""#).unwrap(),
            vec!["add", "Physics 201", "12/15/2099", "Lab report"]
        );
    }

    #[test]
    fn test_split_empty_quotes_and_escapes() {
        assert_eq!(split_arguments(r#"search """#).unwrap(), vec!["search", ""]);
        assert_eq!(
            split_arguments(r#"edit 1 --description "say \"hi\"""#).unwrap(),
            vec!["edit", "1", "--description", "say \"hi\""]
        );
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert!(split_arguments(r#"add "CS101 12/31/2099"#).is_err());
    }
}
