#[cfg(test)]
mod tests {
    use birthday_docs::parse_birthday;

    fn fields(raw: &str) -> Option<(u32, u32, Option<i32>)> {
        parse_birthday(raw, 2, "test").map(|date| (date.month, date.day, date.year))
    }

    #[test]
    fn test_equivalent_notations_yield_the_same_date() {
        let expected = Some((6, 3, Some(1980)));
        for raw in [
            "1980-06-03",
            "03.06.1980",
            "3.6.1980",
            "03/06/1980",
            "3/6/1980",
            "3. Juni 1980",
            "3. Jun 1980",
            "3 June 1980",
        ] {
            assert_eq!(fields(raw), expected, "notation {raw:?}");
        }
    }

    #[test]
    fn test_yearless_notations() {
        for raw in ["03.06.", "3.6.", "03.06", "3.6", "3/6", "3-6", "3. Juni"] {
            assert_eq!(fields(raw), Some((6, 3, None)), "notation {raw:?}");
        }
    }

    #[test]
    fn test_day_first_policy_for_ambiguous_dates() {
        // 03.06 is always the 3rd of June, never March 6th
        assert_eq!(fields("03.06.1980"), Some((6, 3, Some(1980))));
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(fields("15.01.85"), Some((1, 15, Some(1985))));
        // The regex fallback path expands two-digit years by prefixing 20
        assert_eq!(fields("31.02.85"), Some((2, 31, Some(2085))));
    }

    #[test]
    fn test_impossible_day_month_combination_still_parses() {
        // Per-month day validation is deferred to the celebration resolver
        assert_eq!(fields("31.02.2001"), Some((2, 31, Some(2001))));
    }

    #[test]
    fn test_leap_day_parses_in_any_year() {
        assert_eq!(fields("29.02.1980"), Some((2, 29, Some(1980))));
        assert_eq!(fields("29.02.1981"), Some((2, 29, Some(1981))));
        assert_eq!(fields("29.2."), Some((2, 29, None)));
    }

    #[test]
    fn test_unparsable_input_is_rejected() {
        for raw in ["", "   ", "hello", "32.13.", "0.6.", "3.0.", "June"] {
            assert_eq!(fields(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn test_raw_text_is_preserved() {
        let date = parse_birthday(" 3.6.1980 ", 2, "test").unwrap();
        assert_eq!(date.raw, "3.6.1980");
    }
}
