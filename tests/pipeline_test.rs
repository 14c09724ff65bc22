#[cfg(test)]
mod tests {
    use birthday_docs::{
        enrich_records, match_week, parse_batch, render_envelopes, render_greetings,
        PageGeometry, PdfCanvas, WeekWindow,
    };
    use chrono::NaiveDate;
    use std::fs;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    fn anna_rows() -> Vec<Vec<String>> {
        rows(&[
            &["Name", "Geburtstag", "Adresse", "PLZ", "Ort"],
            &["Anna Muster", "03.06.1980", "Bahnhofstr. 2", "3000", "Bern"],
        ])
    }

    // 2026-06-01 is a Monday
    fn june_window() -> WeekWindow {
        WeekWindow::containing(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
    }

    #[test]
    fn test_end_to_end_single_match() {
        let records = parse_batch(&anna_rows());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].row_number, 2);

        let matches = match_week(records, &june_window());
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].celebration_date,
            NaiveDate::from_ymd_opt(2026, 6, 3).unwrap()
        );
        assert_eq!(
            matches[0].person.address_lines,
            vec!["Bahnhofstr. 2", "3000 Bern"]
        );

        let enriched = enrich_records(matches);
        assert!(!enriched[0].bible_verse.is_empty());
        assert!(!enriched[0].greeting.is_empty());
    }

    #[test]
    fn test_rows_without_name_or_birthday_are_skipped() {
        let batch = rows(&[
            &["Name", "Geburtstag"],
            &["", "03.06.1980"],
            &["Beat Frei", "not a date"],
            &["Clara Weber", "01.06."],
        ]);
        let records = parse_batch(&batch);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Clara Weber");
        assert_eq!(records[0].row_number, 4);
    }

    #[test]
    fn test_name_is_joined_from_parts_when_missing() {
        let batch = rows(&[
            &["Vorname", "Nachname", "Geburtstag"],
            &["Anna", "Muster", "3.6."],
        ]);
        let records = parse_batch(&batch);
        assert_eq!(records[0].name, "Anna Muster");
        assert_eq!(records[0].first_name, "Anna");
    }

    #[test]
    fn test_no_match_yields_empty_batch_not_error() {
        let records = parse_batch(&rows(&[
            &["Name", "Geburtstag"],
            &["Anna Muster", "24.12.1980"],
        ]));
        let matches = match_week(records, &june_window());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_documents_are_written_to_disk() {
        let records = parse_batch(&anna_rows());
        let matches = match_week(records, &june_window());
        let enriched = enrich_records(matches);
        let dir = tempfile::tempdir().unwrap();

        let envelope_path = dir.path().join("couverts.pdf");
        let geometry = PageGeometry::c5_envelope();
        let mut canvas = PdfCanvas::new(geometry);
        render_envelopes(&mut canvas, &geometry, &enriched);
        assert_eq!(canvas.page_count(), 1);
        canvas.save(&envelope_path).unwrap();

        let greeting_path = dir.path().join("gruesse.pdf");
        let geometry = PageGeometry::a4_landscape();
        let mut canvas = PdfCanvas::new(geometry);
        render_greetings(&mut canvas, &geometry, &enriched);
        canvas.save(&greeting_path).unwrap();

        for path in [&envelope_path, &greeting_path] {
            let bytes = fs::read(path).unwrap();
            assert!(bytes.starts_with(b"%PDF"), "{} is not a PDF", path.display());
            assert!(bytes.len() > 200);
        }
    }
}
