/// Group the digits of `value` in threes: `1234567` -> `"1,234,567"` with a
/// comma separator.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}

pub fn format_population(population: u64) -> String {
    group_thousands(population, ',')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(7, "7")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(11792, "11,792")]
    #[case(1234567, "1,234,567")]
    #[case(100000000, "100,000,000")]
    #[case(u64::MAX, "18,446,744,073,709,551,615")]
    fn test_format_population(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(format_population(value), expected);
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(group_thousands(83_240_525, '.'), "83.240.525");
        assert_eq!(group_thousands(5_000, '\u{a0}'), "5\u{a0}000");
    }
}
