#[cfg(test)]
mod tests {
    use birthday_docs::{
        render_envelopes, render_greetings, Canvas, EnrichedRecord, MatchedRecord, PageGeometry,
        PersonRecord, StructuredDate, TextStyle,
    };
    use chrono::NaiveDate;

    /// Canvas stub reporting one fixed height for every measurement
    struct StubCanvas {
        block_height: f64,
        pages: Vec<Vec<DrawCall>>,
    }

    #[derive(Debug, Clone)]
    struct DrawCall {
        text: String,
        x: f64,
        y: f64,
        height: f64,
    }

    impl StubCanvas {
        fn new(block_height: f64) -> Self {
            Self {
                block_height,
                pages: vec![Vec::new()],
            }
        }
    }

    impl Canvas for StubCanvas {
        fn measure(&self, _text: &str, _style: TextStyle, _width: f64) -> f64 {
            self.block_height
        }

        fn draw(&mut self, text: &str, _style: TextStyle, x: f64, y: f64, _width: f64) {
            let height = self.block_height;
            self.pages.last_mut().unwrap().push(DrawCall {
                text: text.to_string(),
                x,
                y,
                height,
            });
        }

        fn new_page(&mut self) {
            self.pages.push(Vec::new());
        }
    }

    fn enriched(name: &str) -> EnrichedRecord {
        EnrichedRecord {
            matched: MatchedRecord {
                person: PersonRecord {
                    name: name.to_string(),
                    first_name: String::new(),
                    last_name: String::new(),
                    birthday: StructuredDate {
                        month: 6,
                        day: 3,
                        year: None,
                        raw: String::from("3.6."),
                    },
                    bible_verse: String::new(),
                    greeting: String::new(),
                    address_lines: vec![String::from("Seestrasse 1"), String::from("8000 Zürich")],
                    row_number: 2,
                },
                celebration_date: NaiveDate::from_ymd_opt(2026, 6, 3).unwrap(),
            },
            bible_verse: String::from("Vers"),
            greeting: String::from("Gruss"),
        }
    }

    #[test]
    fn test_envelope_renderer_uses_one_page_per_record() {
        let geometry = PageGeometry::c5_envelope();
        let records = vec![enriched("A"), enriched("B"), enriched("C")];
        let mut canvas = StubCanvas::new(12.0);
        render_envelopes(&mut canvas, &geometry, &records);

        assert_eq!(canvas.pages.len(), 3);
        for (page, record) in canvas.pages.iter().zip(&records) {
            // Name, two address lines, caption
            assert_eq!(page.len(), 4);
            assert_eq!(page[0].text, record.person().name);
            assert_eq!(page[0].y, geometry.margin_top);
            assert_eq!(page[0].x, geometry.margin_left);
            assert!(page[3].text.starts_with("Geburtstag: 03.06.2026"));
        }
    }

    #[test]
    fn test_envelope_elements_cascade_vertically() {
        let geometry = PageGeometry::c5_envelope();
        let mut canvas = StubCanvas::new(12.0);
        render_envelopes(&mut canvas, &geometry, &[enriched("A")]);

        let page = &canvas.pages[0];
        for pair in page.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
    }

    #[test]
    fn test_flowing_renderer_breaks_page_before_overflow() {
        let geometry = PageGeometry::a4_landscape();
        // Each record block is ~425pt tall; two do not fit the ~482pt of
        // usable height, so the second record must start a new page.
        let mut canvas = StubCanvas::new(200.0);
        render_greetings(&mut canvas, &geometry, &[enriched("A"), enriched("B")]);

        assert_eq!(canvas.pages.len(), 2);
        assert_eq!(canvas.pages[1][0].y, geometry.margin_top);
        assert!(canvas.pages[1][0].text.starts_with("A –") || canvas.pages[1][0].text.starts_with("B –"));
    }

    #[test]
    fn test_flowing_renderer_never_crosses_bottom_margin() {
        let geometry = PageGeometry::a4_landscape();
        let records: Vec<EnrichedRecord> = (0..8).map(|i| enriched(&format!("P{i}"))).collect();
        let mut canvas = StubCanvas::new(120.0);
        render_greetings(&mut canvas, &geometry, &records);

        assert!(canvas.pages.len() > 1);
        for page in &canvas.pages {
            for call in page {
                assert!(
                    call.y + call.height <= geometry.max_y() + 1e-9,
                    "block at y={} height={} crosses the bottom margin",
                    call.y,
                    call.height
                );
            }
        }
    }

    #[test]
    fn test_flowing_renderer_keeps_columns_at_same_height() {
        let geometry = PageGeometry::a4_landscape();
        let mut canvas = StubCanvas::new(40.0);
        render_greetings(&mut canvas, &geometry, &[enriched("A")]);

        let page = &canvas.pages[0];
        assert_eq!(page.len(), 3);
        let verse = &page[1];
        let greeting = &page[2];
        assert_eq!(verse.y, greeting.y);
        assert!(greeting.x > verse.x);
    }

    #[test]
    fn test_records_that_fit_share_a_page() {
        let geometry = PageGeometry::a4_landscape();
        let mut canvas = StubCanvas::new(40.0);
        render_greetings(&mut canvas, &geometry, &[enriched("A"), enriched("B")]);
        assert_eq!(canvas.pages.len(), 1);
    }
}
