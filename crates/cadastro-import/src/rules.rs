//! Field-level validation rules for client records.

/// Keeps only ASCII digits, dropping formatting punctuation such as
/// `123.456.789-01` or `(11) 99999-9999`.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Validates a Brazilian CPF by its two check digits.
///
/// Accepts formatted input; all non-digit characters are stripped first.
/// Rejects anything that is not exactly 11 digits and the degenerate
/// repeated-digit sequences (`000…`, `111…`) that would otherwise pass
/// the arithmetic.
pub fn validate_cpf(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|ch| ch.to_digit(10)).collect();
    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&digit| digit == digits[0]) {
        return false;
    }
    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// Computes one CPF check digit: weighted sum with descending weights
/// starting at `first_weight`, then `(sum * 10) % 11` with 10 mapped to 0.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(idx, digit)| digit * (first_weight - idx as u32))
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 { 0 } else { remainder }
}

/// Validates a phone number: 10 or 11 digits after stripping, i.e. area
/// code plus number, with or without the mobile `9` prefix digit.
pub fn validate_phone(raw: &str) -> bool {
    let len = strip_non_digits(raw).len();
    len == 10 || len == 11
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Validates an optional email: empty input is valid, anything else must
/// have a `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    regex::Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(trimmed))
        .unwrap_or(false)
}
