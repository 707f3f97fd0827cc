//! Digit grouping, separator stripping, and masking of card numbers.

/// Separator placed between display groups.
pub const GROUP_SEPARATOR: char = ' ';

/// Character used to hide digits in masked output.
pub const MASK_CHAR: char = '*';

/// Number of trailing digits left visible by [`mask`].
pub const VISIBLE_TAIL: usize = 4;

/// Split `digits` into consecutive groups of the given sizes, joined by a
/// single space.
///
/// Formatting is deterministic: the same input always yields the same
/// output. If the groups sum to less than the digit count the remainder is
/// dropped, and if they sum to more the last groups come out short; callers
/// validate the profile beforehand to rule both out.
#[must_use]
pub fn group(digits: &str, group_format: &[usize]) -> String {
    let mut out = String::with_capacity(digits.len() + group_format.len());
    let mut chars = digits.chars().peekable();

    for &size in group_format {
        if chars.peek().is_none() {
            break;
        }
        if !out.is_empty() {
            out.push(GROUP_SEPARATOR);
        }
        out.extend(chars.by_ref().take(size));
    }

    out
}

/// Remove display separators (spaces and dashes) from a card number.
#[must_use]
pub fn strip(number: &str) -> String {
    number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect()
}

/// Mask all but the last four digits, keeping the group layout.
#[must_use]
pub fn mask(digits: &str, group_format: &[usize]) -> String {
    let visible_from = digits.chars().count().saturating_sub(VISIBLE_TAIL);
    let hidden: String = digits
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible_from { MASK_CHAR } else { c })
        .collect();

    group(&hidden, group_format)
}
