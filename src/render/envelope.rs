//! Fixed-slot envelope renderer: one record per page.

use crate::models::EnrichedRecord;

use super::canvas::{Canvas, FontFace, TextStyle};
use super::PageGeometry;

const NAME_STYLE: TextStyle = TextStyle::new(FontFace::Bold, 14.0);
const ADDRESS_STYLE: TextStyle = TextStyle::new(FontFace::Regular, 12.0);
const CAPTION_STYLE: TextStyle = TextStyle::new(FontFace::Oblique, 10.0);

const NAME_GAP: f64 = 6.0;
const LINE_GAP: f64 = 4.0;
const CAPTION_GAP: f64 = 6.0;

/// Render one envelope page per record: name, address lines and an
/// italicized celebration-date caption, cascading from the top margin.
/// The first record reuses the initial page; every further record starts
/// a new one, unconditionally.
pub fn render_envelopes<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    records: &[EnrichedRecord],
) {
    let x = geometry.margin_left;
    let width = geometry.usable_width();

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            canvas.new_page();
        }

        let mut y = geometry.margin_top;
        let name = &record.person().name;
        canvas.draw(name, NAME_STYLE, x, y, width);
        y += canvas.measure(name, NAME_STYLE, width) + NAME_GAP;

        for line in &record.person().address_lines {
            canvas.draw(line, ADDRESS_STYLE, x, y, width);
            y += canvas.measure(line, ADDRESS_STYLE, width) + LINE_GAP;
        }

        let caption = format!(
            "Geburtstag: {}",
            record.celebration_date().format("%d.%m.%Y")
        );
        canvas.draw(&caption, CAPTION_STYLE, x, y + CAPTION_GAP, width);
    }
}
