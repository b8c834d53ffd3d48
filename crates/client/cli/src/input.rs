//! Parsing of raw command-line tokens into call arguments.
//!
//! - `none` is an absent position
//! - integers become `int`, other numbers `float`
//! - `(a, b, ...)` is a tuple, `[a, ...]` a list, both parsed recursively
//! - anything else is kept as a string
use tabletop_core::Arg;

pub fn parse_tokens(tokens: &[String]) -> Vec<Arg> {
    tokens.iter().map(|token| parse_token(token)).collect()
}

pub fn parse_token(token: &str) -> Arg {
    let token = token.trim();

    if token.eq_ignore_ascii_case("none") {
        return Arg::Absent;
    }
    if let Some(inner) = enclosed(token, '(', ')') {
        return Arg::Tuple(split_items(inner).into_iter().map(parse_token).collect());
    }
    if let Some(inner) = enclosed(token, '[', ']') {
        return Arg::List(split_items(inner).into_iter().map(parse_token).collect());
    }
    if let Ok(value) = token.parse::<i64>() {
        return Arg::Int(value);
    }
    if let Ok(value) = token.parse::<f64>() {
        return Arg::Float(value);
    }
    Arg::from(token)
}

fn enclosed(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

/// Splits on commas that are not nested inside brackets.
fn split_items(inner: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = inner[start..].trim();
    if !last.is_empty() {
        items.push(last);
    }
    items
}
