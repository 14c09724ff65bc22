//! Document layout and rendering.
//!
//! The layout renderers only depend on the [`Canvas`] contract: measure
//! the height a text block would occupy, draw text at a position, start a
//! new page. Page-break decisions are made from measured heights before
//! anything is drawn, so no drawn block ever crosses the bottom margin.

mod canvas;
mod envelope;
mod greetings;
mod pdf;

pub use canvas::{Canvas, FontFace, TextStyle};
pub use envelope::render_envelopes;
pub use greetings::render_greetings;
pub use pdf::PdfCanvas;

/// Convert millimetres to PDF points
#[must_use]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / 25.4 * 72.0
}

/// Page size and margins, in points; y grows downward from the top edge
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    /// Page width
    pub width: f64,
    /// Page height
    pub height: f64,
    /// Left margin
    pub margin_left: f64,
    /// Right margin
    pub margin_right: f64,
    /// Top margin
    pub margin_top: f64,
    /// Bottom margin
    pub margin_bottom: f64,
}

impl PageGeometry {
    /// C5 envelope (229 mm x 162 mm) with the address block offsets
    #[must_use]
    pub fn c5_envelope() -> Self {
        Self {
            width: mm_to_pt(229.0),
            height: mm_to_pt(162.0),
            margin_left: mm_to_pt(25.0),
            margin_right: mm_to_pt(15.0),
            margin_top: mm_to_pt(45.0),
            margin_bottom: mm_to_pt(15.0),
        }
    }

    /// A4 landscape with 20 mm vertical and 25 mm horizontal margins
    #[must_use]
    pub fn a4_landscape() -> Self {
        Self {
            width: 841.89,
            height: 595.28,
            margin_left: mm_to_pt(25.0),
            margin_right: mm_to_pt(25.0),
            margin_top: mm_to_pt(20.0),
            margin_bottom: mm_to_pt(20.0),
        }
    }

    /// Horizontal space between the margins
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    /// Lowest y a drawn block may reach
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.height - self.margin_bottom
    }
}
