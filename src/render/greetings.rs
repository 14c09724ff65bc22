//! Flowing two-column greeting renderer.
//!
//! Records pack sequentially: both columns of a record sit at the same
//! vertical position and the cursor advances past the taller one. Every
//! block is measured before it is drawn; a block that would cross the
//! bottom margin starts on a fresh page instead.

use crate::models::EnrichedRecord;

use super::canvas::{Canvas, FontFace, TextStyle};
use super::{mm_to_pt, PageGeometry};

const HEADER_STYLE: TextStyle = TextStyle::new(FontFace::Bold, 12.0);
const VERSE_STYLE: TextStyle = TextStyle::with_line_gap(FontFace::Oblique, 11.0, 4.0);
const GREETING_STYLE: TextStyle = TextStyle::with_line_gap(FontFace::Regular, 11.0, 4.0);

/// Vertical layout state threaded through record processing
#[derive(Debug, Clone, Copy)]
struct LayoutCursor {
    y: f64,
}

/// Render the greeting document: per record a full-width header line, the
/// verse in the left column and the greeting in the right column.
pub fn render_greetings<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    records: &[EnrichedRecord],
) {
    let column_gap = mm_to_pt(18.0);
    let header_gap = mm_to_pt(3.0);
    let trailing_gap = mm_to_pt(6.0);
    let full_width = geometry.usable_width();
    let column_width = (full_width - column_gap) / 2.0;
    let max_y = geometry.max_y();

    let mut cursor = LayoutCursor {
        y: geometry.margin_top,
    };

    for record in records {
        let header = format!(
            "{} – {}",
            record.person().name,
            record.celebration_date().format("%d.%m.%Y")
        );

        let header_height = canvas.measure(&header, HEADER_STYLE, full_width);
        let verse_height = canvas.measure(&record.bible_verse, VERSE_STYLE, column_width);
        let greeting_height = canvas.measure(&record.greeting, GREETING_STYLE, column_width);
        let columns_height = verse_height.max(greeting_height);
        let block_height = header_height + header_gap + columns_height + trailing_gap;

        if cursor.y + block_height > max_y {
            canvas.new_page();
            cursor.y = geometry.margin_top;
        }

        canvas.draw(&header, HEADER_STYLE, geometry.margin_left, cursor.y, full_width);
        let text_top = cursor.y + header_height + header_gap;
        canvas.draw(
            &record.bible_verse,
            VERSE_STYLE,
            geometry.margin_left,
            text_top,
            column_width,
        );
        canvas.draw(
            &record.greeting,
            GREETING_STYLE,
            geometry.margin_left + column_width + column_gap,
            text_top,
            column_width,
        );

        cursor.y = text_top + columns_height + trailing_gap;
    }
}
