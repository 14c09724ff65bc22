//! lopdf-backed canvas for the standard-14 Helvetica faces.
//!
//! Wrapping and height measurement use the AFM width tables below, so
//! `measure` and `draw` agree exactly on line breaks. Pages are collected
//! in memory and the document is written by a single `save` call; a
//! failed run leaves no partial file behind.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::Result;

use super::canvas::{Canvas, FontFace, TextStyle};
use super::PageGeometry;

/// Baseline-to-baseline distance as a multiple of the font size
const LINE_HEIGHT_FACTOR: f64 = 1.15;
/// Distance from the top of a line box down to the baseline
const ASCENT_FACTOR: f64 = 0.718;

/// Accumulates page content and writes the finished PDF in one step
pub struct PdfCanvas {
    geometry: PageGeometry,
    pages: Vec<Vec<Operation>>,
}

impl PdfCanvas {
    /// A canvas with one empty page of the given geometry
    #[must_use]
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Vec::new()],
        }
    }

    /// Number of pages accumulated so far
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Assemble the document and write it to `path`
    pub fn save(self, path: &Path) -> Result<()> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular = doc.add_object(font_dictionary("Helvetica"));
        let font_bold = doc.add_object(font_dictionary("Helvetica-Bold"));
        let font_oblique = doc.add_object(font_dictionary("Helvetica-Oblique"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_regular,
                "F2" => font_bold,
                "F3" => font_oblique,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    Object::Real(self.geometry.width as f32),
                    Object::Real(self.geometry.height as f32),
                ],
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();
        doc.save(path)?;
        Ok(())
    }

    fn wrap_lines(text: &str, style: TextStyle, width: f64) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let paragraph = paragraph.trim_end();
            if paragraph.is_empty() {
                lines.push(String::new());
                continue;
            }
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if current.is_empty() || string_width(&candidate, style.face, style.size) <= width
                {
                    current = candidate;
                } else {
                    lines.push(current);
                    current = word.to_string();
                }
            }
            lines.push(current);
        }
        lines
    }
}

impl Canvas for PdfCanvas {
    fn measure(&self, text: &str, style: TextStyle, width: f64) -> f64 {
        let line_count = Self::wrap_lines(text, style, width).len();
        if line_count == 0 {
            return 0.0;
        }
        let line_height = style.size * LINE_HEIGHT_FACTOR;
        line_count as f64 * line_height + (line_count - 1) as f64 * style.line_gap
    }

    fn draw(&mut self, text: &str, style: TextStyle, x: f64, y: f64, width: f64) {
        let lines = Self::wrap_lines(text, style, width);
        let line_height = style.size * LINE_HEIGHT_FACTOR;
        let page_height = self.geometry.height;
        let page = self
            .pages
            .last_mut()
            .expect("canvas always holds at least one page");

        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_top = y + index as f64 * (line_height + style.line_gap);
            let baseline = page_height - (line_top + style.size * ASCENT_FACTOR);
            page.push(Operation::new("BT", vec![]));
            page.push(Operation::new(
                "Tf",
                vec![font_label(style.face).into(), (style.size as f32).into()],
            ));
            page.push(Operation::new(
                "Td",
                vec![(x as f32).into(), (baseline as f32).into()],
            ));
            page.push(Operation::new(
                "Tj",
                vec![Object::String(
                    encode_win_ansi(line),
                    StringFormat::Literal,
                )],
            ));
            page.push(Operation::new("ET", vec![]));
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }
}

fn font_dictionary(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

const fn font_label(face: FontFace) -> &'static str {
    match face {
        FontFace::Regular => "F1",
        FontFace::Bold => "F2",
        FontFace::Oblique => "F3",
    }
}

/// Width of a rendered string in points
fn string_width(text: &str, face: FontFace, size: f64) -> f64 {
    text.chars()
        .map(|c| char_width_units(c, face))
        .sum::<f64>()
        / 1000.0
        * size
}

fn char_width_units(c: char, face: FontFace) -> f64 {
    let table: &[u16; 95] = match face {
        FontFace::Bold => &BOLD_WIDTHS,
        FontFace::Regular | FontFace::Oblique => &REGULAR_WIDTHS,
    };
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        return f64::from(table[(code - 0x20) as usize]);
    }
    match c {
        'ß' => 611.0,
        '–' | '—' => 556.0,
        _ => accent_basis(c).map_or(556.0, |base| {
            f64::from(table[(base as u32 - 0x20) as usize])
        }),
    }
}

/// Accented Latin-1 letters share the width of their base glyph in the AFM
const fn accent_basis(c: char) -> Option<char> {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => Some('a'),
        'è' | 'é' | 'ê' | 'ë' => Some('e'),
        'ì' | 'í' | 'î' | 'ï' => Some('i'),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => Some('o'),
        'ù' | 'ú' | 'û' | 'ü' => Some('u'),
        'ç' => Some('c'),
        'ñ' => Some('n'),
        'ý' | 'ÿ' => Some('y'),
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => Some('A'),
        'È' | 'É' | 'Ê' | 'Ë' => Some('E'),
        'Ì' | 'Í' | 'Î' | 'Ï' => Some('I'),
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => Some('O'),
        'Ù' | 'Ú' | 'Û' | 'Ü' => Some('U'),
        'Ç' => Some('C'),
        'Ñ' => Some('N'),
        _ => None,
    }
}

/// Map text to WinAnsi bytes; unmappable characters become '?'
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match c {
                '\u{20AC}' => 0x80,
                '\u{201A}' => 0x82,
                '\u{201E}' => 0x84,
                '\u{2026}' => 0x85,
                '\u{2018}' => 0x91,
                '\u{2019}' => 0x92,
                '\u{201C}' => 0x93,
                '\u{201D}' => 0x94,
                '\u{2022}' => 0x95,
                '\u{2013}' => 0x96,
                '\u{2014}' => 0x97,
                '\u{2122}' => 0x99,
                _ if code < 0x100 => code as u8,
                _ => b'?',
            }
        })
        .collect()
}

/// Helvetica AFM widths for 0x20..=0x7E, in 1/1000 em
const REGULAR_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, //
    278, 278, 584, 584, 584, 556, 1015, //
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, //
    278, 278, 278, 469, 556, 333, //
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333,
    500, 278, 556, 500, 722, 500, 500, 500, //
    334, 260, 334, 584,
];

/// Helvetica-Bold AFM widths for 0x20..=0x7E, in 1/1000 em
const BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, //
    333, 333, 584, 584, 584, 611, 975, //
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, //
    333, 278, 333, 584, 556, 333, //
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389,
    556, 333, 611, 556, 778, 556, 556, 500, //
    389, 280, 389, 584,
];
