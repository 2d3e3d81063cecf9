//! Locale-aware rendering of currency amounts.

use crate::currency::Currency;
use crate::i18n::{Grouping, Language, NumberFormat};

/// Render `value` as a whole amount in `currency`, using `language`'s
/// grouping and symbol placement.
///
/// ```ignore
/// format_amount(1_200_000.0, Language::ENGLISH, usd) // "$1,200,000"
/// format_amount(1_200_000.0, Language::SPANISH, eur) // "1.200.000 €"
/// ```
pub fn format_amount(value: f64, language: Language, currency: Currency) -> String {
    let format = language.number_format();
    let number = group_digits(value, &format);

    if format.symbol_after {
        format!("{} {}", number, currency.symbol())
    } else {
        format!("{}{}", currency.symbol(), number)
    }
}

/// Round to the nearest whole unit and insert group separators.
pub fn group_digits(value: f64, format: &NumberFormat) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let groups = match format.grouping {
        Grouping::Thousands => split_groups(&digits, 3, 3),
        Grouping::Indian => split_groups(&digits, 3, 2),
    };

    let joined = groups.join(format.group_separator);
    if negative {
        format!("-{}", joined)
    } else {
        joined
    }
}

/// Split from the right: first group of `head` digits, then groups of `rest`.
fn split_groups(digits: &str, head: usize, rest: usize) -> Vec<&str> {
    if digits.len() <= head {
        return vec![digits];
    }

    let mut end = digits.len() - head;
    let mut groups = vec![&digits[end..]];
    while end > rest {
        groups.push(&digits[end - rest..end]);
        end -= rest;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(code: &str) -> Currency {
        Currency::from_code(code).unwrap()
    }

    #[test]
    fn test_english_usd() {
        assert_eq!(
            format_amount(1_200_000.0, Language::ENGLISH, currency("USD")),
            "$1,200,000"
        );
    }

    #[test]
    fn test_spanish_eur() {
        assert_eq!(
            format_amount(1_200_000.0, Language::SPANISH, currency("EUR")),
            "1.200.000 €"
        );
    }

    #[test]
    fn test_hindi_inr_uses_indian_grouping() {
        let hindi = Language::from_code("hi").unwrap();
        assert_eq!(format_amount(12_345_678.0, hindi, currency("INR")), "₹1,23,45,678");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(
            format_amount(999.6, Language::ENGLISH, currency("USD")),
            "$1,000"
        );
    }

    #[test]
    fn test_small_values_have_no_separator() {
        let format = Language::ENGLISH.number_format();
        assert_eq!(group_digits(0.0, &format), "0");
        assert_eq!(group_digits(999.0, &format), "999");
    }

    #[test]
    fn test_negative_values() {
        let format = Language::ENGLISH.number_format();
        assert_eq!(group_digits(-1234.0, &format), "-1,234");
    }

    #[test]
    fn test_french_narrow_space() {
        let french = Language::from_code("fr").unwrap();
        assert_eq!(
            format_amount(250_000.0, french, currency("EUR")),
            "250\u{202f}000 €"
        );
    }

    #[test]
    fn test_split_groups_exact_boundaries() {
        assert_eq!(split_groups("123456", 3, 3), vec!["123", "456"]);
        assert_eq!(split_groups("1234", 3, 2), vec!["1", "234"]);
        assert_eq!(split_groups("123456", 3, 2), vec!["1", "23", "456"]);
    }
}
