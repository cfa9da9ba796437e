//! Dot/bracket result paths
//!
//! A path like `pools[0].reserves` names a slot in a nested output tree.
//! Dots separate map keys; `[N]` with a decimal index names a list slot;
//! any other bracket content (optionally quoted) is treated as a map key.

/// One step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Parse a path string into segments.
///
/// Parsing is total: malformed input degrades to key segments rather than
/// failing, matching the batcher's garbage-in-propagates contract.
pub fn parse(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !buf.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut buf)));
                }
            }
            '[' => {
                if !buf.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut buf)));
                }
                let mut inner = String::new();
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    inner.push(c);
                }
                segments.push(bracket_segment(&inner));
            }
            _ => buf.push(c),
        }
    }

    if !buf.is_empty() {
        segments.push(Segment::Key(buf));
    }

    segments
}

fn bracket_segment(inner: &str) -> Segment {
    let unquoted = inner
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| inner.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')));
    if let Some(key) = unquoted {
        return Segment::Key(key.to_string());
    }
    match inner.parse::<usize>() {
        Ok(index) => Segment::Index(index),
        Err(_) => Segment::Key(inner.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Segment {
        Segment::Key(s.to_string())
    }

    #[test]
    fn test_parse_dotted() {
        assert_eq!(parse("a.b.c"), vec![key("a"), key("b"), key("c")]);
    }

    #[test]
    fn test_parse_single_key() {
        assert_eq!(parse("totalSupply"), vec![key("totalSupply")]);
    }

    #[test]
    fn test_parse_bracket_index() {
        assert_eq!(
            parse("pools[2].reserves"),
            vec![key("pools"), Segment::Index(2), key("reserves")]
        );
    }

    #[test]
    fn test_parse_leading_index() {
        assert_eq!(parse("[0]"), vec![Segment::Index(0)]);
    }

    #[test]
    fn test_parse_quoted_bracket_key() {
        assert_eq!(parse("tokens[\"0xabc\"]"), vec![key("tokens"), key("0xabc")]);
        assert_eq!(parse("tokens['dai']"), vec![key("tokens"), key("dai")]);
    }

    #[test]
    fn test_parse_non_numeric_bracket_is_a_key() {
        assert_eq!(parse("a[b]"), vec![key("a"), key("b")]);
    }

    #[test]
    fn test_parse_empty_path() {
        assert!(parse("").is_empty());
    }
}
