#[cfg(test)]
mod tests {
    use birthday_docs::{
        match_week, resolve_celebration_date, PersonRecord, StructuredDate, WeekWindow,
    };
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn recurring(month: u32, day: u32, year: Option<i32>) -> StructuredDate {
        StructuredDate {
            month,
            day,
            year,
            raw: format!("{day}.{month}."),
        }
    }

    fn person(name: &str, month: u32, day: u32, year: Option<i32>) -> PersonRecord {
        PersonRecord {
            name: name.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            birthday: recurring(month, day, year),
            bible_verse: String::new(),
            greeting: String::new(),
            address_lines: Vec::new(),
            row_number: 2,
        }
    }

    // 2026-06-01 is a Monday
    fn june_window() -> WeekWindow {
        WeekWindow::containing(date(2026, 6, 1))
    }

    #[test]
    fn test_window_spans_monday_through_sunday() {
        let window = WeekWindow::containing(date(2026, 6, 4));
        assert_eq!(window.start, date(2026, 6, 1));
        assert_eq!(window.end, date(2026, 6, 7));
    }

    #[test]
    fn test_yearless_date_resolves_to_window_year() {
        let window = june_window();
        assert_eq!(
            resolve_celebration_date(&recurring(6, 3, None), &window),
            Some(date(2026, 6, 3))
        );
    }

    #[test]
    fn test_both_bounds_are_inclusive() {
        let window = june_window();
        assert_eq!(
            resolve_celebration_date(&recurring(6, 1, None), &window),
            Some(date(2026, 6, 1))
        );
        assert_eq!(
            resolve_celebration_date(&recurring(6, 7, None), &window),
            Some(date(2026, 6, 7))
        );
        assert_eq!(resolve_celebration_date(&recurring(5, 31, None), &window), None);
        assert_eq!(resolve_celebration_date(&recurring(6, 8, None), &window), None);
    }

    #[test]
    fn test_birth_year_does_not_prevent_matching() {
        let window = june_window();
        assert_eq!(
            resolve_celebration_date(&recurring(6, 3, Some(1980)), &window),
            Some(date(2026, 6, 3))
        );
    }

    #[test]
    fn test_window_spanning_year_boundary() {
        // 2026-12-28 is a Monday; the window runs into January 2027
        let window = WeekWindow::containing(date(2026, 12, 30));
        assert_eq!(window.start, date(2026, 12, 28));
        assert_eq!(window.end, date(2027, 1, 3));
        assert_eq!(
            resolve_celebration_date(&recurring(12, 30, None), &window),
            Some(date(2026, 12, 30))
        );
        assert_eq!(
            resolve_celebration_date(&recurring(1, 2, None), &window),
            Some(date(2027, 1, 2))
        );
    }

    #[test]
    fn test_leap_day_observed_on_february_28_in_non_leap_years() {
        // 2026-02-23 is a Monday; 2026 is not a leap year
        let window = WeekWindow::containing(date(2026, 2, 23));
        assert_eq!(
            resolve_celebration_date(&recurring(2, 29, Some(2000)), &window),
            Some(date(2026, 2, 28))
        );
    }

    #[test]
    fn test_leap_day_stays_on_february_29_in_leap_years() {
        // 2028-02-28 is a Monday; 2028 is a leap year
        let window = WeekWindow::containing(date(2028, 2, 29));
        assert_eq!(window.start, date(2028, 2, 28));
        assert_eq!(
            resolve_celebration_date(&recurring(2, 29, None), &window),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_impossible_date_never_matches() {
        let window = WeekWindow::containing(date(2026, 2, 23));
        assert_eq!(resolve_celebration_date(&recurring(2, 31, None), &window), None);
    }

    #[test]
    fn test_batch_is_filtered_and_sorted() {
        let window = june_window();
        let records = vec![
            person("Zora Keller", 6, 3, None),
            person("Ueli Brunner", 8, 20, Some(1955)),
            person("anna muster", 6, 3, Some(1980)),
            person("Beat Frei", 6, 2, None),
        ];
        let matches = match_week(records, &window);
        let names: Vec<&str> = matches.iter().map(|m| m.person.name.as_str()).collect();
        // Sorted by date, then case-insensitively by name; non-matches dropped
        assert_eq!(names, vec!["Beat Frei", "anna muster", "Zora Keller"]);
        assert_eq!(matches[0].celebration_date, date(2026, 6, 2));
    }
}
