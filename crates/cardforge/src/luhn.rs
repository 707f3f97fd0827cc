//! Luhn (mod 10) checksum.
//!
//! Digits are weighted from the right: the check digit itself is never
//! doubled, so when computing a check digit for a payload the doubling
//! starts on the rightmost payload digit.

/// Sum of `digits` with every second digit doubled, starting from the right.
///
/// When `double_rightmost` is set the rightmost digit is doubled, which is
/// the weighting used for a payload that still lacks its check digit.
fn weighted_sum(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if (i % 2 == 0) == double_rightmost {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum()
}

/// Compute the check digit to append to a payload of decimal digit values.
///
/// Each element of `payload` must be in `0..=9`.
#[must_use]
pub fn check_digit(payload: &[u8]) -> u8 {
    let sum = weighted_sum(payload, true);
    ((10 - sum % 10) % 10) as u8
}

/// Compute the check digit for a payload given as a digit string.
///
/// Returns `None` if the payload contains anything other than ASCII digits.
#[must_use]
pub fn check_digit_str(payload: &str) -> Option<u8> {
    let digits = parse_digits(payload)?;
    Some(check_digit(&digits))
}

/// Check whether digit values, check digit included, satisfy the checksum.
#[must_use]
pub fn is_valid_digits(digits: &[u8]) -> bool {
    digits.len() >= 2 && weighted_sum(digits, false) % 10 == 0
}

/// Validate a card number using the Luhn algorithm.
///
/// Spaces and dashes are ignored; any other non-digit character makes the
/// number invalid, as does having fewer than two digits.
#[must_use]
pub fn is_valid(number: &str) -> bool {
    let digits: Option<Vec<u8>> = number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    digits.is_some_and(|d| is_valid_digits(&d))
}

/// Convert a string of ASCII digits to digit values.
fn parse_digits(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}
