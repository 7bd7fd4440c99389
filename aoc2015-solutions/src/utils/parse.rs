//! Lenient tokenizing for free-form puzzle input

use std::str::FromStr;
use tracing::trace;

/// Every signed decimal integer embedded in `text`, in order.
///
/// A `-` counts as a sign only when it directly precedes a digit.
///
/// ```
/// use aoc2015_solutions::utils::parse::integers;
///
/// let values: Vec<i32> = integers("Butterscotch: capacity -1, flavor 6");
/// assert_eq!(values, [-1, 6]);
/// ```
pub fn integers<T: FromStr>(text: &str) -> Vec<T> {
    let bytes = text.as_bytes();
    let mut values = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let negative = bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !negative && !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if let Ok(value) = text[start..i].parse() {
            values.push(value);
        }
    }

    values
}

/// Parse each line with `parse`, skipping (and tracing) lines it rejects.
pub fn lenient_lines<'a, T>(
    input: &'a str,
    mut parse: impl FnMut(&'a str) -> Option<T>,
) -> Vec<T> {
    input
        .lines()
        .filter_map(|line| {
            let parsed = parse(line);
            if parsed.is_none() && !line.trim().is_empty() {
                trace!(line, "skipping malformed line");
            }
            parsed
        })
        .collect()
}
