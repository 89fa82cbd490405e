/// Insert `separator` between groups of three digits in the integer part of `number`
///
/// `number` is a rendered amount such as `"-1234567.89"`. The sign and the
/// fractional part are left untouched.
pub(crate) fn group_thousands(number: &str, separator: &str) -> String {
    if separator.is_empty() {
        return number.to_string();
    }

    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    // Digits are ASCII, so byte length equals digit count
    let digit_count = integer.len();
    let separator_count = digit_count.saturating_sub(1) / 3;
    let mut grouped =
        String::with_capacity(number.len() + separator_count * separator.len());

    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (digit_count - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_integer_part() {
        assert_eq!(group_thousands("1234567.89", ","), "1,234,567.89");
        assert_eq!(group_thousands("100000", ","), "100,000");
        assert_eq!(group_thousands("1000", " "), "1 000");
    }

    #[test]
    fn test_short_numbers_unchanged() {
        assert_eq!(group_thousands("123.45", ","), "123.45");
        assert_eq!(group_thousands("0.00", ","), "0.00");
        assert_eq!(group_thousands("-123", ","), "-123");
    }

    #[test]
    fn test_no_separator_after_minus_sign() {
        assert_eq!(group_thousands("-1234.56", ","), "-1,234.56");
        assert_eq!(group_thousands("-123456", ","), "-123,456");
    }

    #[test]
    fn test_fraction_is_never_grouped() {
        assert_eq!(group_thousands("1234.5678", ","), "1,234.5678");
        assert_eq!(group_thousands("0.123456", ","), "0.123456");
    }

    #[test]
    fn test_empty_separator_disables_grouping() {
        assert_eq!(group_thousands("1234567", ""), "1234567");
    }

    #[test]
    fn test_multi_byte_separator() {
        assert_eq!(
            group_thousands("1234567", "\u{202F}"),
            "1\u{202F}234\u{202F}567"
        );
        assert_eq!(group_thousands("1234567", "'"), "1'234'567");
    }
}
